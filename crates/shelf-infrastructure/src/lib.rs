//! # Infrastructure Layer
//!
//! Cross-cutting technical concerns for the Shelf service.
//!
//! ### Configuration & DI
//! | Module | Description |
//! |--------|-------------|
//! | [`config`] | Figment-based configuration (defaults, TOML, environment) |
//! | [`di`] | Overridable singleton bindings and the [`AppContext`](di::AppContext) composition root |
//! | [`constants`] | Centralized configuration constants |
//!
//! ### Security
//! | Module | Description |
//! |--------|-------------|
//! | [`infrastructure`] | Settings-backed credential verification |
//!
//! ### Observability
//! | Module | Description |
//! |--------|-------------|
//! | [`logging`] | Structured logging with tracing |

// Force-link shelf-providers so its registry entries are always present
extern crate shelf_providers;

pub mod config;
pub mod constants;
pub mod di;
pub mod error_ext;
pub mod infrastructure;
pub mod logging;

pub use error_ext::ErrorContext;
