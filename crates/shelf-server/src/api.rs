//! Rocket assembly and launch
//!
//! [`shelf_rocket`] builds the application around an [`AppContext`]; tests
//! hand it to a local client, [`ShelfApi`] binds it to a socket.

use rocket::config::{Config as RocketConfig, LogLevel};
use rocket::{Build, Rocket, routes};
use shelf_domain::error::{Error, Result};
use shelf_infrastructure::config::ServerConfig;
use shelf_infrastructure::di::AppContext;
use std::net::IpAddr;
use std::sync::Arc;
use tracing::info;

use crate::books::{create_book, get_book, list_books, update_book};
use crate::error::json_catchers;
use crate::health::liveness;

/// Build the Rocket instance serving the book API
pub fn shelf_rocket(context: Arc<AppContext>) -> Rocket<Build> {
    rocket::build()
        .manage(context)
        .mount(
            "/",
            routes![list_books, get_book, create_book, update_book, liveness],
        )
        .register("/", json_catchers())
}

/// Rocket configuration for a server section
pub fn rocket_config(server: &ServerConfig) -> Result<RocketConfig> {
    let address: IpAddr = server.host.parse().map_err(|e| {
        Error::configuration_with_source(
            format!("Invalid server.host '{}'", server.host),
            e,
        )
    })?;

    Ok(RocketConfig {
        address,
        port: server.port,
        log_level: LogLevel::Critical,
        ..RocketConfig::default()
    })
}

/// HTTP server for the book API
pub struct ShelfApi {
    server: ServerConfig,
    context: Arc<AppContext>,
}

impl ShelfApi {
    /// Create a server for `context`, listening where `server` says
    pub fn new(server: ServerConfig, context: Arc<AppContext>) -> Self {
        Self { server, context }
    }

    /// Bind and serve until shutdown
    pub async fn start(self) -> anyhow::Result<()> {
        let config = rocket_config(&self.server)?;
        info!(
            address = %config.address,
            port = config.port,
            "Book API listening"
        );

        shelf_rocket(self.context)
            .configure(config)
            .launch()
            .await
            .map_err(|e| anyhow::anyhow!("Book API server failed: {e}"))?;

        info!("Book API stopped");
        Ok(())
    }
}
