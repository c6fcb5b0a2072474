//! Nullable infrastructure — deterministic, in-memory stand-ins for the
//! external store and the system clock.
//!
//! `MemoryStore` is also the only backend bundled with the workspace:
//! durability is delegated to whatever relational store the embedder brings,
//! behind the `patina-store` traits.

pub mod clock;
pub mod store;

pub use clock::NullClock;
pub use store::MemoryStore;
