//! # Shelf Domain
//!
//! Core types and contracts for the Shelf book service. Nothing in this crate
//! knows about HTTP, configuration files or concrete storage.
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`entities`] | The [`Book`](entities::Book) record and its draft payload |
//! | [`ports`] | Repository and credential verification contracts |
//! | [`error`] | Domain error type shared by every layer |
//! | [`constants`] | Domain constants |

pub mod constants;
pub mod entities;
pub mod error;
pub mod ports;

pub use entities::{Book, BookDraft};
pub use error::{Error, Result};
