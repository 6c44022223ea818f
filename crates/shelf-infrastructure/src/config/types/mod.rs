//! Configuration types module

pub mod app;
pub mod auth;
pub mod logging;
pub mod repository;
pub mod server;

// Re-export main types
pub use app::AppConfig;
pub use auth::{AuthConfig, AuthSettings};
pub use logging::LoggingConfig;
pub use repository::RepositoryConfig;
pub use server::ServerConfig;
