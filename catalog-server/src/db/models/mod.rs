//! Database Models
//!
//! Storage-side record shapes. Ids are SurrealDB [`surrealdb::RecordId`]s
//! serialized as `table:key` strings on the wire; conversions into the
//! shared client models live next to each type.

pub mod serde_helpers;

mod movie;
mod user;

pub use movie::{parse_movie_key, Movie, MOVIE_TABLE};
pub use user::{User, USER_TABLE};
