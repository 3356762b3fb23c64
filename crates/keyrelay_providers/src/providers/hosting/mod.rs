//! Deployment and hosting platform providers.

mod flyio;
mod netlify;
mod railway;
mod render;
mod vercel;

pub use flyio::FlyioProvider;
pub use netlify::NetlifyProvider;
pub use railway::RailwayProvider;
pub use render::RenderProvider;
pub use vercel::VercelProvider;
