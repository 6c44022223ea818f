//! # Shelf Server
//!
//! HTTP surface for the Shelf book service, built on Rocket.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use shelf_server::run;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     // Defaults + shelf.toml + SHELF__* environment variables
//!     run(None).await
//! }
//! ```
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Description |
//! |--------|------|------|-------------|
//! | GET | `/books` | - | List all books |
//! | GET | `/books/<id>` | - | Fetch one book |
//! | POST | `/books` | - | Create a book with a generated id |
//! | POST | `/books/<id>` | Basic | Create or replace the book at `id` |
//! | GET | `/live` | - | Liveness probe |
//!
//! Handlers resolve their dependencies from the [`AppContext`] managed by
//! Rocket, so tests substitute fakes by overriding bindings on the context
//! passed to [`shelf_rocket`].
//!
//! [`AppContext`]: shelf_infrastructure::di::AppContext

pub mod api;
pub mod auth;
pub mod books;
pub mod constants;
pub mod error;
pub mod health;
pub mod init;

pub use api::{ShelfApi, shelf_rocket};
pub use init::run;
