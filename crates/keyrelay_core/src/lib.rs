//! Detection engine and framed protocol types for keyrelay.
//!
//! This crate provides pattern-based API key detection and the
//! length-prefixed JSON wire format shared by the client and the native
//! host. It is pure and synchronous; transports live in
//! `keyrelay_client` and `keyrelay_host`.
//!
//! # Main Types
//!
//! - [`Detector`] - Runs catalog patterns against text and produces detections
//! - [`PatternRegistry`] - Compiled patterns with keyword pre-filtering
//! - [`FrameDecoder`] / [`encode_frame`] - The framed message codec
//! - [`Request`] / [`Response`] - Wire envelopes
//!
//! # Error Handling
//!
//! This crate uses [`thiserror`] for structured, typed errors that library
//! consumers can match on:
//!
//! - [`PatternError`] - Pattern compilation failures
//! - [`ProtocolError`] - Frame encoding/decoding failures
//!
//! The CLI crate (`keyrelay_cli`) uses `anyhow` for error propagation.

/// Length-prefixed JSON frame codec.
pub mod codec;
/// Types representing detected secrets.
pub mod detection;
/// The detection engine that matches patterns against text.
pub mod detector;
/// Error types for pattern compilation and the wire protocol.
pub mod error;
/// Placeholder filtering, env-pair parsing, and secret-shape heuristics.
pub mod heuristics;
/// Compiled patterns and the keyword-indexed registry.
pub mod pattern;
/// Common re-exports for internal use.
pub mod prelude;
/// Request and response envelopes for the native-messaging protocol.
pub mod protocol;
#[cfg(test)]
pub(crate) mod test_utils;

pub use codec::{FrameDecoder, encode_frame};
pub use detection::{DetectedSecret, EnvVarPair, UNKNOWN_PROVIDER, dedupe_by_value};
pub use detector::Detector;
pub use error::{PatternError, ProtocolError};
pub use heuristics::{infer_project_from_url, is_likely_real_key, looks_like_secret, parse_env_var_pairs};
pub use pattern::{Group, Pattern, PatternRegistry};
pub use protocol::{MessageId, Request, Response};
