//! Headless CMS providers.

mod contentful;
mod sanity;

pub use contentful::ContentfulProvider;
pub use sanity::SanityProvider;
