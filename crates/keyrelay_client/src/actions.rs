//! Typed wrappers over the raw request API, one per host action.

use serde_json::{Map, Value, json};

use crate::client::NativeClient;
use crate::error::ClientError;

/// Parameters for the `create` action.
#[derive(Debug, Clone, Default)]
pub struct CreateItem {
    /// Item title shown in the vault.
    pub title: String,
    /// The secret value to store.
    pub credential: String,
    /// Where the key can be revoked, when known.
    pub dashboard_url: Option<String>,
    /// URL of the page the key was copied from.
    pub source_url: Option<String>,
    /// Comma-separated tags.
    pub tags: Option<String>,
    /// Target vault; the host's default vault applies when absent.
    pub vault: Option<String>,
    /// Environment variable name the key was assigned to.
    pub env_var_name: Option<String>,
    /// Project name inferred from the source URL.
    pub project: Option<String>,
}

fn params() -> Map<String, Value> {
    Map::new()
}

fn insert_opt(map: &mut Map<String, Value>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        map.insert(key.to_string(), Value::String(value.to_string()));
    }
}

impl NativeClient {
    /// Verifies the link with a `ping` round-trip.
    pub async fn ping(&self) -> Result<(), ClientError> {
        let data = self.request("ping", params()).await?;
        if data.get("pong").and_then(Value::as_bool) == Some(true) {
            Ok(())
        } else {
            Err(ClientError::Rejected("host did not answer ping".to_string()))
        }
    }

    /// Checks that the secret-manager CLI is installed and signed in.
    pub async fn check(&self) -> Result<Value, ClientError> {
        self.request("check", params()).await
    }

    /// Lists stored items, optionally filtered by vault and tags.
    pub async fn list(&self, vault: Option<&str>, tags: Option<&str>) -> Result<Value, ClientError> {
        let mut map = params();
        insert_opt(&mut map, "vault", vault);
        insert_opt(&mut map, "tags", tags);
        self.request("list", map).await
    }

    /// Reads a secret by its `op://` reference.
    pub async fn read(&self, reference: &str) -> Result<Value, ClientError> {
        let mut map = params();
        map.insert("reference".to_string(), json!(reference));
        self.request("read", map).await
    }

    /// Stores a new credential item.
    pub async fn create(&self, item: &CreateItem) -> Result<Value, ClientError> {
        let mut map = params();
        map.insert("title".to_string(), json!(item.title));
        map.insert("credential".to_string(), json!(item.credential));
        insert_opt(&mut map, "dashboardUrl", item.dashboard_url.as_deref());
        insert_opt(&mut map, "sourceUrl", item.source_url.as_deref());
        insert_opt(&mut map, "tags", item.tags.as_deref());
        insert_opt(&mut map, "vault", item.vault.as_deref());
        insert_opt(&mut map, "envVarName", item.env_var_name.as_deref());
        insert_opt(&mut map, "project", item.project.as_deref());
        self.request("create", map).await
    }

    /// Fetches the full record for one item.
    pub async fn get_item(&self, item_id: &str, vault: Option<&str>) -> Result<Value, ClientError> {
        let mut map = params();
        map.insert("itemId".to_string(), json!(item_id));
        insert_opt(&mut map, "vault", vault);
        self.request("get", map).await
    }

    /// Searches item titles, optionally scoped by vault and tags.
    pub async fn search(
        &self,
        query: Option<&str>,
        vault: Option<&str>,
        tags: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut map = params();
        insert_opt(&mut map, "query", query);
        insert_opt(&mut map, "vault", vault);
        insert_opt(&mut map, "tags", tags);
        self.request("search", map).await
    }

    /// Sets one field on an existing item.
    pub async fn update_field(
        &self,
        item_id: &str,
        field_name: &str,
        field_value: &str,
        vault: Option<&str>,
        section: Option<&str>,
    ) -> Result<Value, ClientError> {
        let mut map = params();
        map.insert("itemId".to_string(), json!(item_id));
        map.insert("fieldName".to_string(), json!(field_name));
        map.insert("fieldValue".to_string(), json!(field_value));
        insert_opt(&mut map, "vault", vault);
        insert_opt(&mut map, "section", section);
        self.request("updateField", map).await
    }
}
