use thiserror::Error;

use keyrelay_core::ProtocolError;

/// Errors surfaced to callers of [`NativeClient`](crate::NativeClient).
#[derive(Debug, Error)]
pub enum ClientError {
    /// No response arrived within the request timeout. Client-local; the
    /// host-side operation is not interrupted.
    #[error("request timed out")]
    Timeout,

    /// The transport closed. All outstanding requests fail with this.
    #[error("native host disconnected")]
    Disconnected,

    /// The host answered with a failure response.
    #[error("{0}")]
    Rejected(String),

    /// A frame could not be encoded or decoded.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// The host binary could not be spawned.
    #[error("failed to spawn native host: {0}")]
    Spawn(#[from] std::io::Error),
}
