use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorkerError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("Parse error: {0}")]
    Parse(String),
    #[error("Worker API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Client build error: {0}")]
    Build(String),
}

/// Inbound request context handed to API implementations.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    pub username: Option<String>,
    pub headers: HashMap<String, String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_username(username: impl Into<String>) -> Self {
        Self {
            username: Some(username.into()),
            headers: HashMap::new(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }
}

/// HTTP-style response returned by API implementations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse {
    pub status: u16,
    pub body: serde_json::Value,
}

impl ApiResponse {
    pub fn ok(body: serde_json::Value) -> Self {
        Self { status: 200, body }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Introspection of Siddhi stream-processing apps deployed on a worker node.
///
/// Implementations live with the dashboard server's resource layer; this crate
/// only fixes the signatures.
#[async_trait]
pub trait SiddhiAppsApi: Send + Sync {
    /// List apps that expose queryable store elements.
    async fn get_siddhi_apps(&self, ctx: &RequestContext) -> Result<ApiResponse, WorkerError>;

    /// List the queryable store elements of the named app.
    async fn get_siddhi_app_store_elements(
        &self,
        ctx: &RequestContext,
        app_name: &str,
    ) -> Result<ApiResponse, WorkerError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_context_header_lookup() {
        let mut ctx = RequestContext::with_username("admin");
        ctx.headers
            .insert("Accept".to_string(), "application/json".to_string());

        assert_eq!(ctx.username.as_deref(), Some("admin"));
        assert_eq!(ctx.header("Accept"), Some("application/json"));
        assert_eq!(ctx.header("Authorization"), None);
    }

    #[test]
    fn test_response_success_range() {
        assert!(ApiResponse::ok(serde_json::json!([])).is_success());
        let not_found = ApiResponse {
            status: 404,
            body: serde_json::Value::Null,
        };
        assert!(!not_found.is_success());
    }
}
