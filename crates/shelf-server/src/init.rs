//! Server startup
//!
//! Loads configuration, installs logging, builds the [`AppContext`] and
//! serves the API until shutdown.

use shelf_infrastructure::config::{AppConfig, ConfigLoader};
use shelf_infrastructure::di::init_app;
use shelf_infrastructure::logging::init_logging;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use crate::api::ShelfApi;

/// Load configuration from `config_path` (or the default locations)
pub fn load_config(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    let loader = match config_path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    Ok(loader.load()?)
}

/// Run the Shelf server
pub async fn run(config_path: Option<&Path>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    init_logging(&config.logging)?;

    info!(
        version = env!("CARGO_PKG_VERSION"),
        host = %config.server.host,
        port = config.server.port,
        provider = %config.repository.provider,
        "Starting Shelf"
    );

    let server = config.server.clone();
    let context = Arc::new(init_app(config).await?);
    ShelfApi::new(server, context).start().await
}
