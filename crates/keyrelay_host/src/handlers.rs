//! Command handlers, one per protocol action.
//!
//! Each handler translates its params into an `op` argv vector, runs the
//! CLI, and shapes the output for the wire. Argument building is kept in
//! pure functions so it can be tested without a CLI present.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::{Map, Value, json};

use crate::config::HostConfig;
use crate::error::HostError;
use crate::op::{op_command, parse_json_output};

/// 1Password item IDs are alphanumeric with hyphens.
static ITEM_ID: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::unwrap_used, reason = "static regex is known-valid at compile time")]
    Regex::new("^[a-zA-Z0-9-]+$").unwrap()
});

/// Field names must start with a letter.
static FIELD_NAME: LazyLock<Regex> = LazyLock::new(|| {
    #[expect(clippy::unwrap_used, reason = "static regex is known-valid at compile time")]
    Regex::new("^[a-zA-Z][a-zA-Z0-9_-]*$").unwrap()
});

pub async fn ping() -> Result<Value, HostError> {
    Ok(json!({"pong": true}))
}

/// `op --version` plus a vault listing to verify the session is signed in.
pub async fn check(config: &HostConfig) -> Result<Value, HostError> {
    let version = op_command(config, &["--version".to_string()]).await?;
    op_command(
        config,
        &["vault".to_string(), "list".to_string(), "--format=json".to_string()],
    )
    .await?;
    Ok(json!({"version": version, "authenticated": true}))
}

pub async fn list(config: &HostConfig, params: &Map<String, Value>) -> Result<Value, HostError> {
    let args = build_list_args(vault_param(config, params)?, tags_param(params)?);
    let raw = op_command(config, &args).await?;
    if raw.is_empty() {
        return Ok(json!([]));
    }

    let items = parse_json_output(&raw)?;
    let summaries: Vec<Value> = items_array(&items)?.iter().map(list_summary).collect();
    Ok(Value::Array(summaries))
}

pub async fn read(config: &HostConfig, params: &Map<String, Value>) -> Result<Value, HostError> {
    let reference = required_str(params, "reference")?;
    let raw = op_command(config, &["read".to_string(), reference]).await?;
    Ok(Value::String(raw))
}

pub async fn create(config: &HostConfig, params: &Map<String, Value>) -> Result<Value, HostError> {
    let args = build_create_args(config, params)?;
    let raw = op_command(config, &args).await?;
    let item = parse_json_output(&raw)?;
    Ok(item_identity(&item))
}

pub async fn get(config: &HostConfig, params: &Map<String, Value>) -> Result<Value, HostError> {
    let item_id = required_str(params, "itemId")?;
    if !ITEM_ID.is_match(&item_id) {
        return Err(HostError::Validation("Invalid item ID format".to_string()));
    }

    let mut args = vec!["item".to_string(), "get".to_string(), item_id, "--format=json".to_string()];
    if let Some(vault) = vault_param(config, params)? {
        args.push(format!("--vault={vault}"));
    }

    let raw = op_command(config, &args).await?;
    parse_json_output(&raw)
}

pub async fn search(config: &HostConfig, params: &Map<String, Value>) -> Result<Value, HostError> {
    let query = optional_str(params, "query")?;
    let args = build_list_args(vault_param(config, params)?, tags_param(params)?);
    let raw = op_command(config, &args).await?;
    if raw.is_empty() {
        return Ok(json!([]));
    }

    let items = parse_json_output(&raw)?;
    let query_lower = query.map(|q| q.to_lowercase());
    let summaries: Vec<Value> = items_array(&items)?
        .iter()
        .filter(|item| match &query_lower {
            None => true,
            Some(query) => item
                .get("title")
                .and_then(Value::as_str)
                .is_some_and(|title| title.to_lowercase().contains(query)),
        })
        .map(search_summary)
        .collect();
    Ok(Value::Array(summaries))
}

pub async fn update_field(config: &HostConfig, params: &Map<String, Value>) -> Result<Value, HostError> {
    let args = build_edit_args(config, params)?;
    let raw = op_command(config, &args).await?;
    let item = parse_json_output(&raw)?;
    Ok(item_identity(&item))
}

fn build_list_args(vault: Option<String>, tags: Option<String>) -> Vec<String> {
    let mut args = vec!["item".to_string(), "list".to_string(), "--format=json".to_string()];
    if let Some(vault) = vault {
        args.push(format!("--vault={vault}"));
    }
    if let Some(tags) = tags {
        args.push(format!("--tags={tags}"));
    }
    args
}

fn build_create_args(config: &HostConfig, params: &Map<String, Value>) -> Result<Vec<String>, HostError> {
    let title = required_str(params, "title")?;
    let credential = required_str(params, "credential")?;

    let mut args = vec![
        "item".to_string(),
        "create".to_string(),
        "--category=API Credential".to_string(),
        format!("--title={title}"),
    ];

    if let Some(vault) = vault_param(config, params)? {
        args.push(format!("--vault={vault}"));
    }
    if let Some(tags) = tags_param(params)? {
        args.push(format!("--tags={tags}"));
    }

    args.push(format!("credential={credential}"));

    if let Some(dashboard_url) = optional_str(params, "dashboardUrl")? {
        args.push(format!("dashboard_url={dashboard_url}"));
    }
    // Only well-formed web URLs are stored; anything else is skipped
    // rather than rejected.
    if let Some(source_url) = optional_str(params, "sourceUrl")? {
        if source_url.starts_with("https://") || source_url.starts_with("http://") {
            args.push(format!("source_url={source_url}"));
        }
    }
    if let Some(env_var_name) = optional_str(params, "envVarName")? {
        args.push(format!("env_var_name={env_var_name}"));
    }
    if let Some(project) = optional_str(params, "project")? {
        args.push(format!("project={project}"));
    }

    args.push("--format=json".to_string());
    Ok(args)
}

fn build_edit_args(config: &HostConfig, params: &Map<String, Value>) -> Result<Vec<String>, HostError> {
    let item_id = required_str(params, "itemId")?;
    if !ITEM_ID.is_match(&item_id) {
        return Err(HostError::Validation("Invalid item ID format".to_string()));
    }

    let field_name = required_str(params, "fieldName")?;
    if !FIELD_NAME.is_match(&field_name) {
        return Err(HostError::Validation("Invalid field name format".to_string()));
    }

    let field_value = required_str(params, "fieldValue")?;

    let mut args = vec!["item".to_string(), "edit".to_string(), item_id];
    if let Some(vault) = vault_param(config, params)? {
        args.push(format!("--vault={vault}"));
    }

    let field_path = match optional_str(params, "section")? {
        Some(section) => format!("{section}.{field_name}"),
        None => field_name,
    };
    args.push(format!("{field_path}={field_value}"));
    args.push("--format=json".to_string());
    Ok(args)
}

fn required_str(params: &Map<String, Value>, key: &str) -> Result<String, HostError> {
    params
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .ok_or_else(|| HostError::BadParams(key.to_string()))
}

fn optional_str(params: &Map<String, Value>, key: &str) -> Result<Option<String>, HostError> {
    match params.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(value)) => Ok(Some(value.clone())),
        Some(_) => Err(HostError::BadParams(key.to_string())),
    }
}

/// The request's vault, falling back to the configured default.
fn vault_param(config: &HostConfig, params: &Map<String, Value>) -> Result<Option<String>, HostError> {
    Ok(optional_str(params, "vault")?.or_else(|| config.default_vault.clone()))
}

/// Tags arrive as an array from the extension wrapper or as a
/// comma-separated string from the CLI; both collapse to `op`'s
/// comma-separated form.
fn tags_param(params: &Map<String, Value>) -> Result<Option<String>, HostError> {
    match params.get("tags") {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(tags)) => Ok(Some(tags.clone())),
        Some(Value::Array(tags)) => {
            let parts: Option<Vec<&str>> = tags.iter().map(Value::as_str).collect();
            let parts = parts.ok_or_else(|| HostError::BadParams("tags".to_string()))?;
            if parts.is_empty() {
                Ok(None)
            } else {
                Ok(Some(parts.join(",")))
            }
        }
        Some(_) => Err(HostError::BadParams("tags".to_string())),
    }
}

fn items_array(items: &Value) -> Result<&Vec<Value>, HostError> {
    items
        .as_array()
        .ok_or_else(|| HostError::cli("unexpected op output: expected an array"))
}

fn vault_name(item: &Value) -> Option<&str> {
    item.pointer("/vault/name").and_then(Value::as_str)
}

fn list_summary(item: &Value) -> Value {
    let title = item.get("title").and_then(Value::as_str).unwrap_or_default();
    json!({
        "id": item.get("id"),
        "title": title,
        "vault": vault_name(item),
        "category": item.get("category"),
        "reference": format!("op://{}/{title}/credential", vault_name(item).unwrap_or("Private")),
    })
}

fn search_summary(item: &Value) -> Value {
    json!({
        "id": item.get("id"),
        "title": item.get("title"),
        "vault": vault_name(item),
        "category": item.get("category"),
        "tags": item.get("tags").cloned().unwrap_or_else(|| json!([])),
    })
}

fn item_identity(item: &Value) -> Value {
    json!({
        "id": item.get("id"),
        "title": item.get("title"),
        "vault": vault_name(item),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, Value)]) -> Map<String, Value> {
        pairs.iter().map(|(k, v)| ((*k).to_string(), v.clone())).collect()
    }

    fn config() -> HostConfig {
        HostConfig::default()
    }

    #[test]
    fn list_args_include_vault_and_tags() {
        let args = build_list_args(Some("Work".to_string()), Some("env-var,openai".to_string()));
        assert_eq!(args, ["item", "list", "--format=json", "--vault=Work", "--tags=env-var,openai"]);
    }

    #[test]
    fn create_args_follow_field_order() {
        let p = params(&[
            ("title", json!("OpenAI - API_KEY")),
            ("credential", json!("sk-secret")),
            ("dashboardUrl", json!("https://platform.openai.com/api-keys")),
            ("sourceUrl", json!("https://github.com/acme/widgets")),
            ("tags", json!(["env-var", "openai"])),
            ("vault", json!("Work")),
            ("envVarName", json!("OPENAI_API_KEY")),
            ("project", json!("widgets")),
        ]);

        let args = build_create_args(&config(), &p).unwrap();
        assert_eq!(
            args,
            [
                "item",
                "create",
                "--category=API Credential",
                "--title=OpenAI - API_KEY",
                "--vault=Work",
                "--tags=env-var,openai",
                "credential=sk-secret",
                "dashboard_url=https://platform.openai.com/api-keys",
                "source_url=https://github.com/acme/widgets",
                "env_var_name=OPENAI_API_KEY",
                "project=widgets",
                "--format=json",
            ]
        );
    }

    #[test]
    fn create_skips_non_web_source_urls() {
        let p = params(&[
            ("title", json!("Item")),
            ("credential", json!("value")),
            ("sourceUrl", json!("javascript:alert(1)")),
        ]);

        let args = build_create_args(&config(), &p).unwrap();
        assert!(!args.iter().any(|arg| arg.starts_with("source_url=")));
    }

    #[test]
    fn create_requires_title_and_credential() {
        let missing_credential = params(&[("title", json!("Item"))]);
        assert!(matches!(
            build_create_args(&config(), &missing_credential),
            Err(HostError::BadParams(key)) if key == "credential"
        ));
    }

    #[test]
    fn create_applies_default_vault_when_absent() {
        let mut cfg = config();
        cfg.default_vault = Some("Private".to_string());
        let p = params(&[("title", json!("Item")), ("credential", json!("value"))]);

        let args = build_create_args(&cfg, &p).unwrap();
        assert!(args.contains(&"--vault=Private".to_string()));
    }

    #[test]
    fn edit_args_join_section_and_field() {
        let p = params(&[
            ("itemId", json!("abc-123")),
            ("fieldName", json!("api_key")),
            ("fieldValue", json!("v2")),
            ("section", json!("credentials")),
        ]);

        let args = build_edit_args(&config(), &p).unwrap();
        assert_eq!(args, ["item", "edit", "abc-123", "credentials.api_key=v2", "--format=json"]);
    }

    #[test]
    fn edit_rejects_malformed_item_id() {
        let p = params(&[
            ("itemId", json!("abc/123")),
            ("fieldName", json!("api_key")),
            ("fieldValue", json!("v2")),
        ]);

        assert!(matches!(
            build_edit_args(&config(), &p),
            Err(HostError::Validation(message)) if message == "Invalid item ID format"
        ));
    }

    #[test]
    fn edit_rejects_field_name_not_starting_with_letter() {
        let p = params(&[
            ("itemId", json!("abc123")),
            ("fieldName", json!("1password")),
            ("fieldValue", json!("v2")),
        ]);

        assert!(matches!(
            build_edit_args(&config(), &p),
            Err(HostError::Validation(message)) if message == "Invalid field name format"
        ));
    }

    #[test]
    fn tags_accept_array_or_string() {
        assert_eq!(
            tags_param(&params(&[("tags", json!(["a", "b"]))])).unwrap(),
            Some("a,b".to_string())
        );
        assert_eq!(
            tags_param(&params(&[("tags", json!("a,b"))])).unwrap(),
            Some("a,b".to_string())
        );
        assert_eq!(tags_param(&params(&[])).unwrap(), None);
        assert!(tags_param(&params(&[("tags", json!(7))])).is_err());
    }

    #[test]
    fn list_summary_builds_op_reference() {
        let item = json!({
            "id": "abc",
            "title": "OpenAI",
            "category": "API_CREDENTIAL",
            "vault": {"name": "Work"},
        });
        let summary = list_summary(&item);
        assert_eq!(summary["reference"], "op://Work/OpenAI/credential");
    }

    #[test]
    fn list_summary_defaults_missing_vault_to_private() {
        let item = json!({"id": "abc", "title": "OpenAI"});
        let summary = list_summary(&item);
        assert_eq!(summary["reference"], "op://Private/OpenAI/credential");
    }
}
