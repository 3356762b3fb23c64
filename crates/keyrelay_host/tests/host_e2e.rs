//! End-to-end tests driving the host binary over real stdio frames.

#![cfg(unix)]

use std::io::Write;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;

use assert_cmd::Command;
use serde_json::{Value, json};

use keyrelay_core::{FrameDecoder, encode_frame};

/// Points the host at a config file that does not exist, so tests always
/// run against defaults plus env overrides.
const NO_CONFIG: &str = "/nonexistent/keyrelay-host.toml";

fn frame(value: &Value) -> Vec<u8> {
    encode_frame(value).unwrap()
}

fn decode_all(bytes: &[u8]) -> Vec<Value> {
    let mut decoder = FrameDecoder::new();
    decoder.feed(bytes);
    let mut frames = Vec::new();
    while let Some(f) = decoder.next_frame() {
        frames.push(f.unwrap());
    }
    assert_eq!(decoder.buffered(), 0, "host wrote a partial frame");
    frames
}

/// Writes an executable fake `op` script into `dir` and returns its path.
fn fake_op(dir: &tempfile::TempDir, body: &str) -> PathBuf {
    let path = dir.path().join("op");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "#!/bin/sh").unwrap();
    file.write_all(body.as_bytes()).unwrap();
    drop(file);

    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

fn host() -> Command {
    let mut cmd = Command::cargo_bin("keyrelay-host").unwrap();
    cmd.env("KEYRELAY_HOST_CONFIG", NO_CONFIG);
    cmd
}

#[test]
fn ping_round_trip() {
    let output = host()
        .write_stdin(frame(&json!({"id": 1, "action": "ping"})))
        .output()
        .unwrap();

    assert!(output.status.success());
    let frames = decode_all(&output.stdout);
    assert_eq!(frames, [json!({"id": 1, "success": true, "data": {"pong": true}})]);
}

#[test]
fn unknown_action_yields_failure_response() {
    let output = host()
        .write_stdin(frame(&json!({"id": 2, "action": "bogus"})))
        .output()
        .unwrap();

    assert!(output.status.success());
    let frames = decode_all(&output.stdout);
    assert_eq!(frames, [json!({"id": 2, "success": false, "error": "Unknown action: bogus"})]);
}

#[test]
fn malformed_frame_is_isolated_from_following_requests() {
    let garbage = b"{ not json";
    let mut stdin = Vec::new();
    stdin.extend(u32::try_from(garbage.len()).unwrap().to_le_bytes());
    stdin.extend_from_slice(garbage);
    stdin.extend(frame(&json!({"id": 5, "action": "ping"})));

    let output = host().write_stdin(stdin).output().unwrap();

    assert!(output.status.success());
    let frames = decode_all(&output.stdout);
    assert_eq!(frames.len(), 2);

    assert_eq!(frames[0]["id"], 0);
    assert_eq!(frames[0]["success"], false);
    let error = frames[0]["error"].as_str().unwrap();
    assert!(error.starts_with("Failed to parse message:"), "unexpected error: {error}");

    assert_eq!(frames[1], json!({"id": 5, "success": true, "data": {"pong": true}}));
}

#[test]
fn each_request_gets_exactly_one_response_in_order() {
    let mut stdin = Vec::new();
    stdin.extend(frame(&json!({"id": 1, "action": "ping"})));
    stdin.extend(frame(&json!({"id": 2, "action": "bogus"})));
    stdin.extend(frame(&json!({"id": 3, "action": "ping"})));

    let output = host().write_stdin(stdin).output().unwrap();

    let frames = decode_all(&output.stdout);
    let ids: Vec<_> = frames.iter().map(|f| f["id"].as_u64().unwrap()).collect();
    assert_eq!(ids, [1, 2, 3]);
}

#[test]
fn eof_with_no_input_exits_cleanly() {
    let output = host().write_stdin(Vec::new()).output().unwrap();

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn check_reports_version_and_authentication() {
    let dir = tempfile::tempdir().unwrap();
    let op = fake_op(
        &dir,
        r#"
if [ "$1" = "--version" ]; then echo "2.30.0"; exit 0; fi
if [ "$1" = "vault" ]; then echo "[]"; exit 0; fi
exit 1
"#,
    );

    let output = host()
        .env("KEYRELAY_OP_PATH", &op)
        .write_stdin(frame(&json!({"id": 1, "action": "check"})))
        .output()
        .unwrap();

    let frames = decode_all(&output.stdout);
    assert_eq!(
        frames,
        [json!({"id": 1, "success": true, "data": {"version": "2.30.0", "authenticated": true}})]
    );
}

#[test]
fn list_maps_items_to_references() {
    let dir = tempfile::tempdir().unwrap();
    let op = fake_op(
        &dir,
        r#"
if [ "$1" = "item" ] && [ "$2" = "list" ]; then
cat <<'EOF'
[{"id":"abc","title":"OpenAI","category":"API_CREDENTIAL","vault":{"name":"Work"}}]
EOF
exit 0
fi
exit 1
"#,
    );

    let output = host()
        .env("KEYRELAY_OP_PATH", &op)
        .write_stdin(frame(&json!({"id": 4, "action": "list"})))
        .output()
        .unwrap();

    let frames = decode_all(&output.stdout);
    assert_eq!(
        frames[0]["data"],
        json!([{
            "id": "abc",
            "title": "OpenAI",
            "vault": "Work",
            "category": "API_CREDENTIAL",
            "reference": "op://Work/OpenAI/credential",
        }])
    );
}

#[test]
fn cli_stderr_becomes_failure_response() {
    let dir = tempfile::tempdir().unwrap();
    let op = fake_op(&dir, "echo 'not signed in' >&2\nexit 1\n");

    let output = host()
        .env("KEYRELAY_OP_PATH", &op)
        .write_stdin(frame(&json!({"id": 7, "action": "check"})))
        .output()
        .unwrap();

    // The host keeps running and exits cleanly on EOF.
    assert!(output.status.success());
    let frames = decode_all(&output.stdout);
    assert_eq!(frames, [json!({"id": 7, "success": false, "error": "not signed in"})]);
}

#[test]
fn read_returns_trimmed_raw_value() {
    let dir = tempfile::tempdir().unwrap();
    let op = fake_op(&dir, "if [ \"$1\" = \"read\" ]; then echo \"sk-secret-value\"; exit 0; fi\nexit 1\n");

    let output = host()
        .env("KEYRELAY_OP_PATH", &op)
        .write_stdin(frame(&json!({"id": 8, "action": "read", "reference": "op://Work/OpenAI/credential"})))
        .output()
        .unwrap();

    let frames = decode_all(&output.stdout);
    assert_eq!(frames, [json!({"id": 8, "success": true, "data": "sk-secret-value"})]);
}

#[tokio::test]
async fn native_client_spawns_and_drives_the_host() {
    let path = assert_cmd::cargo::cargo_bin("keyrelay-host");

    // connect() performs the ping round-trip.
    let client = keyrelay_client::NativeClient::spawn(&path).await.unwrap();

    let error = client.request("bogus", serde_json::Map::new()).await.unwrap_err();
    assert_eq!(error.to_string(), "Unknown action: bogus");
}
