//! CLI command handlers.

/// Native host and `op` session health check.
pub mod check;
/// Shell completion generation.
pub mod completions;
/// API key detection over text or stdin.
pub mod detect;
/// Credential listing through the native host.
pub mod list;
/// Pattern listing and inspection.
pub mod patterns;
/// Secret retrieval by reference.
pub mod read;

/// Convenience alias for command return types.
pub type Result<T = ()> = anyhow::Result<T>;
