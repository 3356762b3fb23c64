//! The client-side message router.
//!
//! A single connection task owns the pending-request table: callers send
//! commands over an mpsc channel, responses arrive from the transport, and
//! per-request timers post expiry messages. No locks are needed because
//! the table is only ever touched from that one task.

use std::collections::HashMap;
use std::process::Stdio;
use std::time::Duration;

use serde_json::{Map, Value};
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tokio::process::Command as ProcessCommand;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use keyrelay_core::{FrameDecoder, MessageId, Request, Response, encode_frame};

use crate::error::ClientError;

/// Default time to wait for a response before failing the request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Read buffer size for the transport.
const READ_BUF: usize = 4096;

type ReplySender = oneshot::Sender<Result<Value, ClientError>>;

enum Command {
    Send {
        action: String,
        params: Map<String, Value>,
        timeout: Duration,
        reply: ReplySender,
    },
}

/// Async client for the framed native-messaging protocol.
///
/// Wraps any `AsyncRead + AsyncWrite` transport (or a spawned host
/// process) in a request/response API with id correlation, per-request
/// timeouts, and disconnect handling. Cloning is cheap; clones share the
/// same connection.
#[derive(Clone)]
pub struct NativeClient {
    cmd_tx: mpsc::Sender<Command>,
    timeout: Duration,
}

impl std::fmt::Debug for NativeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeClient")
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

impl NativeClient {
    /// Connects over an existing transport and verifies the link with a
    /// `ping` round-trip. Failure to ping propagates to the caller.
    pub async fn connect<T>(transport: T) -> Result<Self, ClientError>
    where
        T: AsyncRead + AsyncWrite + Send + 'static,
    {
        let client = Self::start(transport);
        client.ping().await?;
        Ok(client)
    }

    /// Spawns the host binary at `path` and connects over its stdio.
    ///
    /// The child is killed when the connection task finishes.
    pub async fn spawn(path: &std::path::Path) -> Result<Self, ClientError> {
        let mut child = ProcessCommand::new(path)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .kill_on_drop(true)
            .spawn()?;

        let stdin = child.stdin.take().ok_or_else(|| {
            ClientError::Spawn(std::io::Error::other("host stdin not captured"))
        })?;
        let stdout = child.stdout.take().ok_or_else(|| {
            ClientError::Spawn(std::io::Error::other("host stdout not captured"))
        })?;

        let client = Self::start_split(stdout, stdin, Some(child));
        client.ping().await?;
        Ok(client)
    }

    /// Returns a client with a different per-request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn start<T>(transport: T) -> Self
    where
        T: AsyncRead + AsyncWrite + Send + 'static,
    {
        let (reader, writer) = tokio::io::split(transport);
        Self::start_split(reader, writer, None)
    }

    fn start_split<R, W>(reader: R, writer: W, child: Option<tokio::process::Child>) -> Self
    where
        R: AsyncRead + Send + Unpin + 'static,
        W: AsyncWrite + Send + Unpin + 'static,
    {
        let (cmd_tx, cmd_rx) = mpsc::channel(32);

        tokio::spawn(async move {
            let mut task = ConnectionTask::new(reader, writer, cmd_rx);
            task.run().await;
            // Dropping the child here kills a spawned host.
            drop(child);
        });

        Self {
            cmd_tx,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Sends a request and waits for the matching response.
    ///
    /// Resolves with the response's `data` on success; a failure response
    /// rejects with [`ClientError::Rejected`] carrying the host's error
    /// message (or `"Unknown error"` when the host omitted one).
    pub async fn request(&self, action: &str, params: Map<String, Value>) -> Result<Value, ClientError> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.cmd_tx
            .send(Command::Send {
                action: action.to_string(),
                params,
                timeout: self.timeout,
                reply: reply_tx,
            })
            .await
            .map_err(|_| ClientError::Disconnected)?;

        reply_rx.await.map_err(|_| ClientError::Disconnected)?
    }
}

struct ConnectionTask<R, W> {
    reader: R,
    writer: W,
    cmd_rx: mpsc::Receiver<Command>,
    expire_tx: mpsc::UnboundedSender<u64>,
    expire_rx: mpsc::UnboundedReceiver<u64>,
    decoder: FrameDecoder,
    pending: HashMap<u64, ReplySender>,
    next_id: u64,
}

impl<R, W> ConnectionTask<R, W>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    fn new(reader: R, writer: W, cmd_rx: mpsc::Receiver<Command>) -> Self {
        let (expire_tx, expire_rx) = mpsc::unbounded_channel();
        Self {
            reader,
            writer,
            cmd_rx,
            expire_tx,
            expire_rx,
            decoder: FrameDecoder::new(),
            pending: HashMap::new(),
            next_id: 1,
        }
    }

    async fn run(&mut self) {
        let mut buf = vec![0u8; READ_BUF];

        loop {
            tokio::select! {
                command = self.cmd_rx.recv() => {
                    let Some(command) = command else {
                        // All client handles dropped.
                        break;
                    };
                    self.handle_command(command).await;
                }
                expired = self.expire_rx.recv() => {
                    if let Some(id) = expired {
                        self.expire(id);
                    }
                }
                read = self.reader.read(&mut buf) => {
                    match read {
                        Ok(0) => {
                            debug!("transport closed");
                            break;
                        }
                        Ok(n) => {
                            self.decoder.feed(&buf[..n]);
                            while let Some(frame) = self.decoder.next_frame() {
                                self.handle_frame(frame);
                            }
                        }
                        Err(error) => {
                            warn!(%error, "transport read failed");
                            break;
                        }
                    }
                }
            }
        }

        self.reject_all();
    }

    async fn handle_command(&mut self, command: Command) {
        match command {
            Command::Send {
                action,
                params,
                timeout,
                reply,
            } => {
                let id = self.next_id;
                self.next_id += 1;

                let mut request = Request::new(id, action);
                request.params = params;

                let frame = match encode_frame(&request) {
                    Ok(frame) => frame,
                    Err(error) => {
                        let _ = reply.send(Err(error.into()));
                        return;
                    }
                };

                if self.writer.write_all(&frame).await.is_err() || self.writer.flush().await.is_err() {
                    let _ = reply.send(Err(ClientError::Disconnected));
                    return;
                }

                self.pending.insert(id, reply);

                let expire_tx = self.expire_tx.clone();
                tokio::spawn(async move {
                    tokio::time::sleep(timeout).await;
                    let _ = expire_tx.send(id);
                });
            }
        }
    }

    fn handle_frame(&mut self, frame: Result<Value, keyrelay_core::ProtocolError>) {
        let value = match frame {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "discarding malformed frame");
                return;
            }
        };

        let Ok(response) = serde_json::from_value::<Response>(value) else {
            warn!("discarding frame that is not a response envelope");
            return;
        };

        let MessageId::Int(id) = response.id else {
            debug!(id = %response.id, "discarding response with foreign id");
            return;
        };

        // Late responses after a timeout land here too; the entry is
        // already gone, so they are silently dropped.
        let Some(reply) = self.pending.remove(&id) else {
            debug!(id, "discarding response with no pending request");
            return;
        };

        let result = if response.success {
            Ok(response.data.unwrap_or(Value::Null))
        } else {
            Err(ClientError::Rejected(
                response.error.unwrap_or_else(|| "Unknown error".to_string()),
            ))
        };
        let _ = reply.send(result);
    }

    fn expire(&mut self, id: u64) {
        if let Some(reply) = self.pending.remove(&id) {
            debug!(id, "request timed out");
            let _ = reply.send(Err(ClientError::Timeout));
        }
    }

    fn reject_all(&mut self) {
        for (_, reply) in self.pending.drain() {
            let _ = reply.send(Err(ClientError::Disconnected));
        }
    }
}
