//! # Postplan Infrastructure
//!
//! Concrete implementations of the ports defined in `postplan-core`.
//! Today that is the in-memory post store plus the demo seed data; a
//! persistent store would live here too.

pub mod seed;
pub mod store;

pub use store::InMemoryPostStore;
