//! Client-related types shared between server and client
//!
//! Request/response envelopes used in API communication.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::{Movie, Role, SortField, SortOrder};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Registration request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Login / registration response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserInfo,
    pub token: String,
}

/// Public user information (never carries the password hash)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Catalog API DTOs
// =============================================================================

/// Pagination block returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_movies: u64,
    pub has_next_page: bool,
    pub has_prev_page: bool,
}

/// GET /api/movies response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieListResponse {
    pub movies: Vec<Movie>,
    pub pagination: Pagination,
}

/// GET /api/movies/search response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieSearchResponse {
    pub movies: Vec<Movie>,
    pub search_query: String,
    pub count: usize,
}

/// GET /api/movies/sorted response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortedMoviesResponse {
    pub movies: Vec<Movie>,
    pub sort_by: SortField,
    pub sort_order: SortOrder,
    pub count: usize,
}

/// POST/PUT /api/movies response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MovieMutationResponse {
    pub message: String,
    pub movie: Movie,
}

/// DELETE /api/movies/{id} response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieDeleteResponse {
    pub message: String,
    pub deleted_movie: Movie,
}

/// Error body; `errors` is present for validation failures only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<String>,
}
