//! Application Layer - Shelf
//!
//! Use cases for the book service and the registry through which repository
//! providers make themselves available.
//!
//! ## Use Cases
//!
//! - List, fetch, create and update books ([`use_cases::BookServiceImpl`])
//!
//! ## Ports
//!
//! - `ports::registry::*`: linkme-backed repository provider registry
//! - `domain_services::*`: use case interfaces
//!
//! ## Dependencies
//!
//! This crate depends only on `shelf-domain` and pure Rust libraries.

pub mod domain_services;
pub mod ports;
pub mod use_cases;

pub use domain_services::*;
pub use use_cases::*;
