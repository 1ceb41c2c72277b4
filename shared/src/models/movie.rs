//! Movie Model
//!
//! Wire representation of a catalog entry plus the create/update payloads.
//! Only `title` is required; rating and duration are deliberately not
//! range-checked server-side (the catalog is permissive by contract).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Movie entity as seen by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Record id ("movie:key"), assigned by the store on creation
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    /// Runtime in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Create movie payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieCreate {
    #[serde(default)]
    pub title: String,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i64>,
    pub poster: Option<String>,
}

/// Update movie payload (partial; absent fields are left untouched)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MovieUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub rating: Option<f64>,
    pub release_date: Option<NaiveDate>,
    pub duration: Option<i64>,
    pub poster: Option<String>,
}

/// Sortable movie fields (the allow-list)
///
/// Anything outside this set never reaches query text; the list endpoint
/// falls back to `Title`, the dedicated sort endpoint rejects with 400.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum SortField {
    #[default]
    Title,
    Rating,
    ReleaseDate,
    Duration,
}

impl SortField {
    /// Database column the field sorts on
    pub fn column(&self) -> &'static str {
        match self {
            SortField::Title => "title",
            SortField::Rating => "rating",
            SortField::ReleaseDate => "release_date",
            SortField::Duration => "duration",
        }
    }
}

/// Sort direction
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString, Default,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// SurrealQL keyword for the direction
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_field_parses_camel_case_names() {
        assert_eq!("title".parse::<SortField>().unwrap(), SortField::Title);
        assert_eq!(
            "releaseDate".parse::<SortField>().unwrap(),
            SortField::ReleaseDate
        );
        assert!("year".parse::<SortField>().is_err());
    }

    #[test]
    fn sort_field_columns_are_snake_case() {
        assert_eq!(SortField::ReleaseDate.column(), "release_date");
        assert_eq!(SortField::Title.column(), "title");
    }

    #[test]
    fn movie_serializes_with_camel_case_keys() {
        let movie = Movie {
            id: "movie:abc".into(),
            title: "Dune".into(),
            description: None,
            rating: Some(8.5),
            release_date: None,
            duration: Some(155),
            poster: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_value(&movie).unwrap();
        assert!(json.get("createdAt").is_some());
        assert!(json.get("releaseDate").is_none());
        assert_eq!(json["duration"], 155);
    }

    #[test]
    fn update_payload_defaults_to_no_changes() {
        let update: MovieUpdate = serde_json::from_str("{}").unwrap();
        assert!(update.title.is_none());
        assert!(update.rating.is_none());
    }
}
