use crate::api::{ApiResponse, WorkerError};
use reqwest::Client;
use std::fmt;

/// HTTPS client for one worker node's REST API.
///
/// Built fresh by the factory for each call site; callers own the stub and
/// drop it when done. Credentials ride along as basic auth on every request.
#[derive(Clone)]
pub struct WorkerServiceStub {
    client: Client,
    base_url: String,
    username: String,
    password: String,
}

pub fn siddhi_apps_url(base: &str) -> String {
    format!("{}/siddhi-apps", base.trim_end_matches('/'))
}

pub fn store_elements_url(base: &str, app_name: &str) -> String {
    format!(
        "{}/siddhi-apps/{}/store-elements",
        base.trim_end_matches('/'),
        app_name
    )
}

impl WorkerServiceStub {
    pub fn new(
        client: Client,
        url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: url.into(),
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// GET `{base}/siddhi-apps`: apps exposing queryable store elements.
    pub async fn siddhi_apps(&self) -> Result<ApiResponse, WorkerError> {
        self.get(&siddhi_apps_url(&self.base_url)).await
    }

    /// GET `{base}/siddhi-apps/{app}/store-elements`.
    pub async fn siddhi_app_store_elements(
        &self,
        app_name: &str,
    ) -> Result<ApiResponse, WorkerError> {
        self.get(&store_elements_url(&self.base_url, app_name)).await
    }

    async fn get(&self, url: &str) -> Result<ApiResponse, WorkerError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .basic_auth(&self.username, Some(&self.password))
            .send()
            .await
            .map_err(|e| WorkerError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(WorkerError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .json()
            .await
            .map_err(|e| WorkerError::Parse(e.to_string()))?;

        Ok(ApiResponse {
            status: status.as_u16(),
            body,
        })
    }
}

// Password stays out of logs.
impl fmt::Debug for WorkerServiceStub {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerServiceStub")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}
