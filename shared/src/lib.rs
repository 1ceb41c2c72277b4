//! Types shared between catalog-server and its clients
//!
//! Wire-level models and request/response DTOs. All ids are plain
//! `table:key` strings; everything serializes with the camelCase names
//! the HTTP contract uses.

pub mod client;
pub mod models;

pub use models::{Movie, MovieCreate, MovieUpdate, Role, SortField, SortOrder};
