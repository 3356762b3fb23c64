//! Shared plumbing for commands that drive the native host.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use keyrelay_client::NativeClient;

use crate::HostArgs;

/// Builds a single-threaded tokio runtime for one command invocation.
pub fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")
}

/// Resolves the host binary path: the explicit flag when given, otherwise
/// a `keyrelay-host` sibling of the current executable.
pub fn host_path(args: &HostArgs) -> anyhow::Result<PathBuf> {
    if let Some(path) = &args.host {
        return Ok(path.clone());
    }

    let exe = std::env::current_exe().context("cannot locate current executable")?;
    let dir = exe.parent().context("executable has no parent directory")?;
    Ok(dir.join("keyrelay-host"))
}

/// Spawns the host binary and connects over its stdio.
pub async fn connect(args: &HostArgs) -> anyhow::Result<NativeClient> {
    let path = host_path(args)?;
    let client = NativeClient::spawn(&path)
        .await
        .with_context(|| format!("failed to connect to native host at {}", path.display()))?;
    Ok(client.with_timeout(Duration::from_secs(args.timeout)))
}
