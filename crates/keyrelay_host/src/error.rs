use thiserror::Error;

/// Errors raised by command handlers.
///
/// Every variant becomes a failure response envelope; handler errors never
/// crash the host.
#[derive(Debug, Error)]
pub enum HostError {
    /// A parameter failed format validation.
    #[error("{0}")]
    Validation(String),

    /// A required parameter was missing or had the wrong type.
    #[error("missing or invalid parameter: {0}")]
    BadParams(String),

    /// The secret-manager CLI failed, timed out, or produced unparseable output.
    #[error("{0}")]
    Cli(String),

    /// The request named an action the dispatch table does not know.
    #[error("Unknown action: {0}")]
    UnknownAction(String),
}

impl HostError {
    pub(crate) fn cli(message: impl Into<String>) -> Self {
        Self::Cli(message.into())
    }
}
