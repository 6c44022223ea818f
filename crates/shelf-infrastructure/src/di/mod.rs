//! Dependency Injection
//!
//! Bindings are explicit values owned by an [`AppContext`] rather than a
//! process-wide registry. Handlers receive the context as framework state,
//! and tests build their own context, override what they need and reset it.
//!
//! ```text
//! AppConfig → BookRepositoryResolver → Singleton<dyn BookRepository> ─┐
//!          └→ AuthSettings::from_config → Singleton<AuthSettings> ────┼→ AppContext → handlers
//!                                          override_with / reset ─────┘
//! ```

pub mod bootstrap;
pub mod resolver;
pub mod singleton;

pub use bootstrap::{AppContext, init_app, init_test_app};
pub use resolver::BookRepositoryResolver;
pub use singleton::Singleton;
