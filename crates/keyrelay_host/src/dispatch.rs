//! Server-side router: action name to handler, one response per request.

use tracing::debug;

use keyrelay_core::{Request, Response};

use crate::config::HostConfig;
use crate::error::HostError;
use crate::handlers;

/// Dispatches one request to its handler and shapes the outcome as a
/// response envelope.
///
/// Handler failures (CLI errors, validation) become failure responses;
/// they never escape as process faults. Exactly one response is produced
/// per request.
pub async fn dispatch(config: &HostConfig, request: Request) -> Response {
    debug!(action = %request.action, id = %request.id, "dispatching");

    let result = match request.action.as_str() {
        "ping" => handlers::ping().await,
        "check" => handlers::check(config).await,
        "list" => handlers::list(config, &request.params).await,
        "read" => handlers::read(config, &request.params).await,
        "create" => handlers::create(config, &request.params).await,
        "get" => handlers::get(config, &request.params).await,
        "search" => handlers::search(config, &request.params).await,
        "updateField" => handlers::update_field(config, &request.params).await,
        other => Err(HostError::UnknownAction(other.to_string())),
    };

    match result {
        Ok(data) => Response::ok(request.id, data),
        Err(error) => Response::fail(request.id, error.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[tokio::test]
    async fn ping_answers_pong() {
        let response = dispatch(&HostConfig::default(), Request::new(1, "ping")).await;

        assert_eq!(response.id, 1.into());
        assert!(response.success);
        assert_eq!(response.data, Some(json!({"pong": true})));
    }

    #[tokio::test]
    async fn unknown_action_fails_with_action_name() {
        let response = dispatch(&HostConfig::default(), Request::new(2, "bogus")).await;

        assert_eq!(response.id, 2.into());
        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Unknown action: bogus"));
    }

    #[tokio::test]
    async fn validation_failure_becomes_failure_response() {
        let request = Request::new(3, "get").with_param("itemId", "not/valid");
        let response = dispatch(&HostConfig::default(), request).await;

        assert!(!response.success);
        assert_eq!(response.error.as_deref(), Some("Invalid item ID format"));
    }
}
