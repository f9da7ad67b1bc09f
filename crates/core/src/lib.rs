//! Domain layer for the Reelbase media tracker.
//!
//! Zero-I/O building blocks shared by the persistence and API crates:
//! the error taxonomy, database type aliases, and pagination helpers.

pub mod error;
pub mod pagination;
pub mod types;
