//! Domain models

mod movie;
mod role;

pub use movie::{Movie, MovieCreate, MovieUpdate, SortField, SortOrder};
pub use role::Role;
