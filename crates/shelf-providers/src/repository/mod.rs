//! Book Repository Provider Implementations
//!
//! | Provider | Type | Description |
//! |----------|------|-------------|
//! | InMemoryBookRepository | Local | Map-backed storage, lost on restart |
//! | NullBookRepository | Placeholder | Stores nothing; default slot for an unconfigured backend |

#[cfg(feature = "repository-memory")]
pub mod in_memory;
pub mod null;

#[cfg(feature = "repository-memory")]
pub use in_memory::InMemoryBookRepository;
pub use null::NullBookRepository;
