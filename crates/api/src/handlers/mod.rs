//! HTTP request handlers, grouped by resource.

pub mod auth;
pub mod media;
pub mod seed;
