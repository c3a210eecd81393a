use crate::api::WorkerError;
use crate::stub::WorkerServiceStub;
use reqwest::Client;
use std::time::Duration;

pub const WORKER_CONNECT_TIMEOUT_MS: u64 = 1000;
pub const WORKER_READ_TIMEOUT_MS: u64 = 1000;

/// Builds worker client stubs from connection parameters.
///
/// Passed explicitly wherever a stub is needed, so tests can substitute a
/// double and callers carry no hidden global state.
pub trait ClientBuilderService: Send + Sync {
    fn build(
        &self,
        username: &str,
        password: &str,
        connect_timeout_ms: u64,
        read_timeout_ms: u64,
        url: &str,
    ) -> Result<WorkerServiceStub, WorkerError>;
}

/// Default builder backed by reqwest.
pub struct HttpsClientBuilder;

impl ClientBuilderService for HttpsClientBuilder {
    fn build(
        &self,
        username: &str,
        password: &str,
        connect_timeout_ms: u64,
        read_timeout_ms: u64,
        url: &str,
    ) -> Result<WorkerServiceStub, WorkerError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_millis(connect_timeout_ms))
            .timeout(Duration::from_millis(read_timeout_ms))
            .build()
            .map_err(|e| WorkerError::Build(e.to_string()))?;

        Ok(WorkerServiceStub::new(client, url, username, password))
    }
}

/// Stub for calling a worker node over HTTPS, with the fixed 1000 ms
/// connection and socket timeouts. A fresh stub per call; nothing is cached.
/// Builder failures propagate to the caller untouched.
pub fn worker_https_client(
    builder: &dyn ClientBuilderService,
    url: &str,
    username: &str,
    password: &str,
) -> Result<WorkerServiceStub, WorkerError> {
    tracing::debug!("Building worker client for {}", url);
    builder.build(
        username,
        password,
        WORKER_CONNECT_TIMEOUT_MS,
        WORKER_READ_TIMEOUT_MS,
        url,
    )
}
