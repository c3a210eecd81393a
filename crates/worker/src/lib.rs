pub mod api;
pub mod builder;
pub mod stub;

pub use api::{ApiResponse, RequestContext, SiddhiAppsApi, WorkerError};
pub use builder::{
    worker_https_client, ClientBuilderService, HttpsClientBuilder, WORKER_CONNECT_TIMEOUT_MS,
    WORKER_READ_TIMEOUT_MS,
};
pub use stub::WorkerServiceStub;
