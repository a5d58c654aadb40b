//! Country code normalization.
//!
//! The upstream API stores the United Kingdom as the non-ISO token `UK`, while
//! the adoption guide table is keyed by ISO `GB`. The two directions are kept
//! as separate functions because their target vocabularies differ.

/// Normalize a caller country code for any outgoing upstream request.
///
/// Empty or absent input stays absent; `GB` (any case) becomes `UK`; every
/// other code is only uppercased.
pub fn normalize_country_for_api(code: Option<&str>) -> Option<String> {
    let code = code?.trim();
    if code.is_empty() {
        return None;
    }
    let upper = code.to_ascii_uppercase();
    if upper == "GB" {
        Some("UK".to_string())
    } else {
        Some(upper)
    }
}

/// Normalize a caller country code for the adoption guide lookup (`UK` -> `GB`).
pub fn normalize_country_for_guide(code: &str) -> String {
    let upper = code.trim().to_ascii_uppercase();
    if upper == "UK" {
        "GB".to_string()
    } else {
        upper
    }
}
