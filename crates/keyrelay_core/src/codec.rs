//! Length-prefixed JSON frame codec.
//!
//! The wire format in both directions is `uint32_le length` followed by
//! `length` bytes of UTF-8 JSON. The byte stream is a strict concatenation
//! of frames with no interleaving.

use serde::Serialize;

use crate::error::ProtocolError;

/// Byte width of the length prefix.
const LENGTH_PREFIX: usize = 4;

/// Serializes a message into a complete frame.
///
/// The message becomes a UTF-8 JSON payload preceded by its byte length as
/// a 4-byte little-endian unsigned integer. Payloads longer than
/// `u32::MAX` bytes fail with [`ProtocolError::Oversize`].
pub fn encode_frame<T: Serialize>(message: &T) -> Result<Vec<u8>, ProtocolError> {
    let payload = serde_json::to_vec(message)?;
    let len = u32::try_from(payload.len()).map_err(|_| ProtocolError::Oversize { len: payload.len() })?;

    let mut frame = Vec::with_capacity(LENGTH_PREFIX + payload.len());
    frame.extend_from_slice(&len.to_le_bytes());
    frame.extend_from_slice(&payload);
    Ok(frame)
}

#[derive(Debug, Clone, Copy)]
enum DecodeState {
    AwaitingLength,
    AwaitingBody(usize),
}

/// Pull-based parser extracting frames from an arbitrarily-chunked stream.
///
/// Feed incoming chunks with [`feed`](Self::feed), then drain complete
/// frames with [`next_frame`](Self::next_frame); a single chunk may
/// complete several frames. Malformed JSON inside a complete frame is
/// reported as an error for that frame only — the decoder consumes the
/// frame's bytes regardless and stays usable for the frames that follow.
#[derive(Debug)]
pub struct FrameDecoder {
    buf: Vec<u8>,
    state: DecodeState,
}

impl FrameDecoder {
    /// Creates an empty decoder.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: Vec::new(),
            state: DecodeState::AwaitingLength,
        }
    }

    /// Appends a chunk of incoming bytes to the internal buffer.
    pub fn feed(&mut self, chunk: &[u8]) {
        self.buf.extend_from_slice(chunk);
    }

    /// Attempts to extract the next complete frame.
    ///
    /// Returns `None` when more data is needed. Call repeatedly after each
    /// [`feed`](Self::feed) until it returns `None`.
    pub fn next_frame(&mut self) -> Option<Result<serde_json::Value, ProtocolError>> {
        if let DecodeState::AwaitingLength = self.state {
            if self.buf.len() < LENGTH_PREFIX {
                return None;
            }
            let mut prefix = [0u8; LENGTH_PREFIX];
            prefix.copy_from_slice(&self.buf[..LENGTH_PREFIX]);
            self.buf.drain(..LENGTH_PREFIX);
            self.state = DecodeState::AwaitingBody(u32::from_le_bytes(prefix) as usize);
        }

        let DecodeState::AwaitingBody(len) = self.state else {
            return None;
        };
        if self.buf.len() < len {
            return None;
        }

        let payload: Vec<u8> = self.buf.drain(..len).collect();
        self.state = DecodeState::AwaitingLength;

        Some(serde_json::from_slice(&payload).map_err(ProtocolError::from))
    }

    /// Returns the number of buffered bytes not yet consumed by a frame.
    #[must_use]
    pub fn buffered(&self) -> usize {
        self.buf.len()
    }
}

impl Default for FrameDecoder {
    fn default() -> Self {
        Self::new()
    }
}
