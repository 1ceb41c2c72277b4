//! Movie storage model

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

use super::serde_helpers;

pub const MOVIE_TABLE: &str = "movie";

/// Movie record as stored in SurrealDB
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Movie {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<RecordId>,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    #[serde(default)]
    pub duration: Option<i64>,
    #[serde(default)]
    pub poster: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Movie> for shared::Movie {
    fn from(m: Movie) -> Self {
        shared::Movie {
            id: m.id.map(|id| id.to_string()).unwrap_or_default(),
            title: m.title,
            description: m.description,
            rating: m.rating,
            release_date: m.release_date,
            duration: m.duration,
            poster: m.poster,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Parse a client-supplied movie id into a bare record key.
///
/// Accepts either `movie:key` or the bare key. Keys are SurrealDB-generated
/// (alphanumeric); anything else is malformed and maps to a 400 at the API
/// boundary, the analog of a driver cast error on a bad object id.
pub fn parse_movie_key(id: &str) -> Option<&str> {
    let key = id.strip_prefix("movie:").unwrap_or(id);
    if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return None;
    }
    Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_bare_and_prefixed_keys() {
        assert_eq!(parse_movie_key("abc123XYZ"), Some("abc123XYZ"));
        assert_eq!(parse_movie_key("movie:abc123"), Some("abc123"));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert_eq!(parse_movie_key("not-a-valid-id"), None);
        assert_eq!(parse_movie_key(""), None);
        assert_eq!(parse_movie_key("movie:"), None);
        assert_eq!(parse_movie_key("user:abc"), None);
        assert_eq!(parse_movie_key("abc; DELETE movie"), None);
    }

    #[test]
    fn converts_to_wire_model_with_string_id() {
        let movie = Movie {
            id: Some(RecordId::from_table_key(MOVIE_TABLE, "abc")),
            title: "Dune".into(),
            description: None,
            rating: Some(8.5),
            release_date: None,
            duration: None,
            poster: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let wire: shared::Movie = movie.into();
        assert_eq!(wire.id, "movie:abc");
        assert_eq!(wire.title, "Dune");
    }
}
