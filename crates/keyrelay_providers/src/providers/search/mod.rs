//! Hosted search service providers.

mod algolia;
mod meilisearch;

pub use algolia::AlgoliaProvider;
pub use meilisearch::MeilisearchProvider;
