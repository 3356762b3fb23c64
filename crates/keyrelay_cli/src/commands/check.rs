//! Check command - verifies the native host and the `op` session.

use serde_json::Value;

use crate::HostArgs;
use crate::client;
use crate::ui::{print_command_header, print_success};

/// Spawns the host, pings it, and asks it to verify the `op` session.
pub fn run(args: &HostArgs) -> super::Result {
    print_command_header("check");

    let runtime = client::runtime()?;
    let data = runtime.block_on(async {
        // Spawning already performs the ping round-trip.
        let host = client::connect(args).await?;
        anyhow::Ok(host.check().await?)
    })?;

    print_success("native host reachable");

    let version = data
        .get("version")
        .and_then(Value::as_str)
        .unwrap_or("unknown");
    print_success(&format!("op {version}"));

    if data.get("authenticated").and_then(Value::as_bool) == Some(true) {
        print_success("authenticated");
    }

    Ok(())
}
