use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Dashboard server settings read from the deployment descriptor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DashboardConfiguration {
    #[serde(default)]
    pub roles: Option<RolesConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RolesConfig {
    #[serde(default)]
    pub creators: Vec<String>,
}

impl DashboardConfiguration {
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(&path).await?;
        let config: DashboardConfiguration = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded dashboard configuration from {:?}", path.as_ref());
        Ok(config)
    }
}
