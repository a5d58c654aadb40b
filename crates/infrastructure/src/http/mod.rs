mod client;
mod failure;
mod image;
mod request;

pub use client::BackendClient;
pub use failure::{extract_detail, from_status, from_transport};
pub use image::{build_transform_url, CdnImageFetcher};
pub use request::{
    breeds_query, filter_counts_query, organizations_query, search_query, QueryPairs,
    RequestDescriptor,
};
