//! Convenience re-exports of the most commonly used types.

pub use crate::codec::{FrameDecoder, encode_frame};
pub use crate::detection::{DetectedSecret, EnvVarPair, dedupe_by_value};
pub use crate::detector::Detector;
pub use crate::error::{PatternError, ProtocolError};
pub use crate::heuristics::{infer_project_from_url, is_likely_real_key, looks_like_secret, parse_env_var_pairs};
pub use crate::pattern::{Group, Pattern, PatternRegistry};
pub use crate::protocol::{MessageId, Request, Response};
