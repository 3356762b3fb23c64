//! Cloud provider credentials.

mod aws;
mod cloudflare;
mod digitalocean;

pub use aws::AwsProvider;
pub use cloudflare::CloudflareProvider;
pub use digitalocean::DigitalOceanProvider;
