//! Invocation of the 1Password `op` CLI.

use std::process::Stdio;

use tokio::process::Command;
use tracing::debug;

use crate::config::HostConfig;
use crate::error::HostError;

/// Runs `op` with the given argv vector and returns trimmed stdout.
///
/// Arguments are passed directly to the process, never through a shell.
/// A non-zero exit surfaces trimmed stderr as the error message; the
/// invocation is bounded by the configured timeout.
pub async fn op_command(config: &HostConfig, args: &[String]) -> Result<String, HostError> {
    debug!(command = ?args.first(), "invoking op");

    let child = Command::new(&config.op_path)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .output();

    let output = tokio::time::timeout(config.timeout(), child)
        .await
        .map_err(|_| HostError::cli(format!("op command timed out after {}s", config.timeout_secs)))?
        .map_err(|error| HostError::cli(format!("failed to run {}: {error}", config.op_path.display())))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let stderr = stderr.trim();
        if stderr.is_empty() {
            return Err(HostError::cli(format!("op exited with {}", output.status)));
        }
        return Err(HostError::cli(stderr));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    Ok(stdout.trim().to_string())
}

/// Parses `op --format=json` output, mapping parse failures to a handler error.
pub fn parse_json_output(raw: &str) -> Result<serde_json::Value, HostError> {
    serde_json::from_str(raw).map_err(|error| HostError::cli(format!("unexpected op output: {error}")))
}
