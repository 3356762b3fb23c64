//! Developer productivity tool providers.

mod airtable;
mod docker;
mod linear;
mod notion;
mod npm;

pub use airtable::AirtableProvider;
pub use docker::DockerProvider;
pub use linear::LinearProvider;
pub use notion::NotionProvider;
pub use npm::NpmProvider;
