use rescuedogs_mcp_domain::{
    BreedStats, Dog, EnhancedDogData, FilterCountsResponse, Organization, QualifyingBreed,
    Statistics,
};
use serde_json::json;

pub fn make_dog(id: i64, name: &str) -> Dog {
    serde_json::from_value(json!({
        "id": id,
        "slug": format!("{}-{}", name.to_lowercase(), id),
        "name": name,
        "adoption_url": format!("https://rescue.example/adopt/{}", id),
        "primary_image_url": format!("https://images.rescuedogs.me/dogs/{}.jpg", id),
    }))
    .unwrap()
}

pub fn make_enhanced(id: i64, tagline: &str) -> EnhancedDogData {
    EnhancedDogData {
        id,
        tagline: Some(tagline.to_string()),
        ..Default::default()
    }
}

pub fn make_org(id: i64, name: &str) -> Organization {
    serde_json::from_value(json!({
        "id": id,
        "slug": name.to_lowercase().replace(' ', "-"),
        "name": name,
        "country": "DE",
        "city": "Berlin",
    }))
    .unwrap()
}

pub fn make_breed(name: &str, group: &str, count: u64) -> QualifyingBreed {
    QualifyingBreed {
        primary_breed: name.to_string(),
        breed_group: Some(group.to_string()),
        count,
        ..Default::default()
    }
}

pub fn make_breed_stats() -> BreedStats {
    BreedStats {
        total_dogs: 60,
        unique_breeds: 3,
        purebred_count: 40,
        crossbreed_count: 20,
        breed_groups: vec![],
        qualifying_breeds: vec![
            make_breed("Collie", "Herding", 10),
            make_breed("German Shepherd", "Herding", 30),
            make_breed("Beagle", "Hound", 20),
        ],
    }
}

pub fn make_statistics() -> Statistics {
    Statistics {
        total_dogs: 1500,
        total_organizations: 12,
        ..Default::default()
    }
}

pub fn make_filter_counts() -> FilterCountsResponse {
    FilterCountsResponse::default()
}
