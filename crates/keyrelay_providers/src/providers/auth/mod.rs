//! Authentication platform providers.

mod auth0;
mod clerk;

pub use auth0::Auth0Provider;
pub use clerk::ClerkProvider;
