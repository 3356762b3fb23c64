use thiserror::Error;

/// Errors that can occur when compiling a detection pattern.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The pattern's regular expression failed to compile.
    #[error("invalid regex in pattern '{id}': {source}")]
    InvalidRegex {
        /// Identifier of the pattern that failed (e.g. `"openai"`).
        id: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },

    /// The pattern's context gate regex failed to compile.
    #[error("invalid context regex in pattern '{id}': {source}")]
    InvalidContext {
        /// Identifier of the pattern that failed.
        id: String,
        /// The underlying regex compilation error.
        #[source]
        source: regex::Error,
    },
}

/// Errors produced by the framed message codec.
///
/// Frame errors are isolated: a malformed payload in one frame never
/// corrupts parsing of the frames that follow it, because the length
/// framing is independent of payload validity.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A payload's serialized length exceeds the `u32` length prefix.
    #[error("payload of {len} bytes exceeds the 4-byte frame length prefix")]
    Oversize {
        /// Serialized payload length in bytes.
        len: usize,
    },

    /// A complete frame's payload was not valid JSON.
    #[error("malformed frame payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}
