//! Row structs and DTOs for every table.

pub mod media_entry;
pub mod session;
pub mod user;
