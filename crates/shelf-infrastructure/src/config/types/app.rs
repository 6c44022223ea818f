//! Main application configuration

use super::{AuthConfig, LoggingConfig, RepositoryConfig, ServerConfig};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Credentials guarding write endpoints
    #[serde(default)]
    pub auth: AuthConfig,
    /// Repository provider selection
    #[serde(default)]
    pub repository: RepositoryConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}
