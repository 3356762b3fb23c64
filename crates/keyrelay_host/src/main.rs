//! Binary entry point for the keyrelay native messaging host.
//!
//! Reads framed requests from stdin, dispatches them sequentially, and
//! writes exactly one framed response per request to stdout. Logging goes
//! to stderr because stdout is the wire.

mod config;
mod dispatch;
mod error;
mod handlers;
mod op;

use std::fmt;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tracing::error;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;

use keyrelay_core::{FrameDecoder, Request, Response, encode_frame};

use config::HostConfig;
use dispatch::dispatch;

/// Read buffer size for stdin.
const READ_BUF: usize = 4096;

#[tokio::main]
async fn main() {
    init_logging();

    let config = match HostConfig::load() {
        Ok(config) => config,
        Err(err) => fatal(&format!("config error: {err}")),
    };

    match serve(&config).await {
        // EOF: the remote closed the stream.
        Ok(()) => {}
        Err(err) => fatal(&format!("fatal host error: {err}")),
    }
}

async fn serve(config: &HostConfig) -> std::io::Result<()> {
    let mut stdin = tokio::io::stdin();
    let mut stdout = tokio::io::stdout();
    let mut decoder = FrameDecoder::new();
    let mut buf = vec![0u8; READ_BUF];

    loop {
        let n = stdin.read(&mut buf).await?;
        if n == 0 {
            return Ok(());
        }
        decoder.feed(&buf[..n]);

        while let Some(frame) = decoder.next_frame() {
            // A malformed frame is isolated: report it against id 0 and
            // keep serving.
            let response = match frame {
                Ok(value) => match serde_json::from_value::<Request>(value) {
                    Ok(request) => dispatch(config, request).await,
                    Err(err) => Response::fail(0u64, format!("Failed to parse message: {err}")),
                },
                Err(err) => Response::fail(0u64, format!("Failed to parse message: {err}")),
            };

            let frame = encode_frame(&response)
                .map_err(|err| std::io::Error::other(format!("encoding response: {err}")))?;
            stdout.write_all(&frame).await?;
            stdout.flush().await?;
        }
    }
}

/// Last-resort exit: state may be inconsistent, so report against id 0
/// and leave with a non-zero code.
fn fatal(message: &str) -> ! {
    error!("{message}");

    if let Ok(frame) = encode_frame(&Response::fail(0u64, message)) {
        use std::io::Write;
        let mut stdout = std::io::stdout().lock();
        let _ = stdout.write_all(&frame);
        let _ = stdout.flush();
    }

    std::process::exit(1);
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_level(false)
        .with_timer(HostPrefix)
        .init();
}

struct HostPrefix;

impl FormatTime for HostPrefix {
    fn format_time(&self, w: &mut Writer<'_>) -> fmt::Result {
        write!(w, "[host]  ")
    }
}
