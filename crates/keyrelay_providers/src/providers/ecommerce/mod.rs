//! E-commerce platform providers.

mod shopify;

pub use shopify::ShopifyProvider;
