//! Request and response envelopes for the native-messaging protocol.
//!
//! Request JSON shape: `{id, action, ...params}` (params flattened into
//! the top level). Response JSON shape:
//! `{id, success, data?, error?}`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Correlation id shared between a request and its response.
///
/// The client assigns integer ids; string ids are accepted on the wire
/// for compatibility with foreign peers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageId {
    /// Monotonically assigned integer id.
    Int(u64),
    /// Caller-supplied string id.
    Str(String),
}

impl From<u64> for MessageId {
    fn from(id: u64) -> Self {
        Self::Int(id)
    }
}

impl std::fmt::Display for MessageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Str(id) => write!(f, "{id}"),
        }
    }
}

/// A request envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Request {
    /// Correlation id, unique among the sender's outstanding requests.
    pub id: MessageId,
    /// Name of the action to dispatch.
    pub action: String,
    /// Action parameters, flattened into the envelope's top level.
    #[serde(flatten)]
    pub params: Map<String, Value>,
}

impl Request {
    /// Creates a request with no parameters.
    #[must_use]
    pub fn new(id: impl Into<MessageId>, action: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            action: action.into(),
            params: Map::new(),
        }
    }

    /// Adds a parameter, skipping `Null` values so optional fields are
    /// simply absent from the wire.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let value = value.into();
        if !value.is_null() {
            self.params.insert(key.into(), value);
        }
        self
    }
}

/// A response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    /// Correlation id copied from the request. Id `0` is reserved for
    /// errors that could not be attributed to a request.
    pub id: MessageId,
    /// Whether the request succeeded.
    pub success: bool,
    /// Result payload, present on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    /// Human-readable error message, present on failure.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    /// Creates a success response carrying `data`.
    #[must_use]
    pub fn ok(id: impl Into<MessageId>, data: Value) -> Self {
        Self {
            id: id.into(),
            success: true,
            data: Some(data),
            error: None,
        }
    }

    /// Creates a failure response carrying an error message.
    #[must_use]
    pub fn fail(id: impl Into<MessageId>, error: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            success: false,
            data: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_params_flatten_into_top_level() {
        let request = Request::new(3, "read").with_param("reference", "op://Private/OpenAI/credential");
        let wire = serde_json::to_value(&request).unwrap();

        assert_eq!(
            wire,
            json!({
                "id": 3,
                "action": "read",
                "reference": "op://Private/OpenAI/credential",
            })
        );
    }

    #[test]
    fn with_param_skips_null_values() {
        let request = Request::new(1, "list").with_param("vault", Value::Null);
        assert!(request.params.is_empty());
    }

    #[test]
    fn request_round_trips_through_wire_shape() {
        let wire = json!({"id": 9, "action": "get", "itemId": "abc123", "vault": "Private"});
        let request: Request = serde_json::from_value(wire.clone()).unwrap();

        assert_eq!(request.id, MessageId::Int(9));
        assert_eq!(request.action, "get");
        assert_eq!(request.params.get("itemId"), Some(&json!("abc123")));
        assert_eq!(serde_json::to_value(&request).unwrap(), wire);
    }

    #[test]
    fn message_id_accepts_strings_on_the_wire() {
        let request: Request = serde_json::from_value(json!({"id": "req-1", "action": "ping"})).unwrap();
        assert_eq!(request.id, MessageId::Str("req-1".to_string()));
    }

    #[test]
    fn success_response_omits_error_field() {
        let wire = serde_json::to_value(Response::ok(1, json!({"pong": true}))).unwrap();
        assert_eq!(wire, json!({"id": 1, "success": true, "data": {"pong": true}}));
    }

    #[test]
    fn failure_response_omits_data_field() {
        let wire = serde_json::to_value(Response::fail(2, "Unknown action: bogus")).unwrap();
        assert_eq!(wire, json!({"id": 2, "success": false, "error": "Unknown action: bogus"}));
    }

    #[test]
    fn message_id_display_formats_both_variants() {
        assert_eq!(MessageId::Int(7).to_string(), "7");
        assert_eq!(MessageId::Str("abc".to_string()).to_string(), "abc");
    }
}
