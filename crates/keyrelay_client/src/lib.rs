//! Async client-side router for the keyrelay native-messaging protocol.
//!
//! [`NativeClient`] turns the fire-and-forget framed transport into
//! awaitable request/response pairs: it assigns correlation ids, tracks
//! pending requests, enforces per-request timeouts, and bulk-fails
//! everything on disconnect. See the typed action wrappers on
//! [`NativeClient`] for the supported operations.

mod actions;
mod client;
mod error;

pub use actions::CreateItem;
pub use client::{DEFAULT_TIMEOUT, NativeClient};
pub use error::ClientError;
