//! Secret detection patterns for keyrelay.
//!
//! This crate provides the static catalog of API key patterns, organised
//! by service category. Patterns are declared in catalog order; the
//! detector reports entries in this order.

mod pattern;
mod provider;
/// Secret detection providers organised by service category.
pub mod providers;
mod registry;

pub use pattern::{Group, PatternDef};
pub use provider::Provider;
pub use registry::ProviderRegistry;
