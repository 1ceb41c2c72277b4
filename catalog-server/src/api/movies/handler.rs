//! Movie API Handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;

use shared::client::{
    MovieDeleteResponse, MovieListResponse, MovieMutationResponse, MovieSearchResponse,
    Pagination, SortedMoviesResponse,
};
use shared::{MovieCreate, MovieUpdate, SortField, SortOrder};

use crate::core::ServerState;
use crate::db::models::parse_movie_key;
use crate::db::repository::MovieRepository;
use crate::utils::validation::{
    validate_optional_text, validate_required_text, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN,
    MAX_URL_LEN,
};
use crate::utils::{AppError, AppResult};

const DEFAULT_PAGE: u64 = 1;
const DEFAULT_LIMIT: u64 = 10;

/// GET /api/movies query string
///
/// Numeric params arrive as text and fall back to defaults when they do
/// not parse as positive integers; an unknown `sortBy` silently falls
/// back to title (permissive by contract, unlike /sorted).
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    #[serde(default)]
    search: String,
    sort_by: Option<String>,
    order: Option<String>,
    page: Option<String>,
    limit: Option<String>,
}

fn parse_positive(value: Option<&str>, default: u64) -> u64 {
    value
        .and_then(|s| s.parse::<u64>().ok())
        .filter(|n| *n >= 1)
        .unwrap_or(default)
}

/// GET /api/movies - 搜索 + 排序 + 分页列表
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<MovieListResponse>> {
    let sort: SortField = query
        .sort_by
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();
    let order: SortOrder = query
        .order
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();
    let page = parse_positive(query.page.as_deref(), DEFAULT_PAGE);
    let limit = parse_positive(query.limit.as_deref(), DEFAULT_LIMIT);

    let repo = MovieRepository::new(state.get_db());
    let (movies, total) = repo.list(&query.search, sort, order, page, limit).await?;

    let total_pages = total.div_ceil(limit);
    let pagination = Pagination {
        current_page: page,
        total_pages,
        total_movies: total,
        has_next_page: page < total_pages,
        has_prev_page: page > 1,
    };

    Ok(Json(MovieListResponse {
        movies: movies.into_iter().map(Into::into).collect(),
        pagination,
    }))
}

/// GET /api/movies/search query string
#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
}

/// GET /api/movies/search - 按标题/描述搜索
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<MovieSearchResponse>> {
    let q = query
        .q
        .filter(|s| !s.is_empty())
        .ok_or_else(|| AppError::invalid("Search query parameter \"q\" is required"))?;

    let repo = MovieRepository::new(state.get_db());
    let movies = repo
        .find_filtered(&q, SortField::Title, SortOrder::Asc)
        .await?;

    let count = movies.len();
    Ok(Json(MovieSearchResponse {
        movies: movies.into_iter().map(Into::into).collect(),
        search_query: q,
        count,
    }))
}

/// GET /api/movies/sorted query string
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortedQuery {
    sort_by: Option<String>,
    sort_order: Option<String>,
}

/// GET /api/movies/sorted - 排序的完整列表
///
/// 与列表接口不同，这里对非法 sortBy 严格返回 400 (HTTP 契约如此)。
pub async fn sorted(
    State(state): State<ServerState>,
    Query(query): Query<SortedQuery>,
) -> AppResult<Json<SortedMoviesResponse>> {
    let sort: SortField = match query.sort_by.as_deref() {
        None => SortField::default(),
        Some(s) => s.parse().map_err(|_| {
            AppError::invalid(
                "Invalid sort field. Allowed fields: title, rating, releaseDate, duration",
            )
        })?,
    };
    let order: SortOrder = query
        .sort_order
        .as_deref()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();

    let repo = MovieRepository::new(state.get_db());
    let movies = repo.find_filtered("", sort, order).await?;

    let count = movies.len();
    Ok(Json(SortedMoviesResponse {
        movies: movies.into_iter().map(Into::into).collect(),
        sort_by: sort,
        sort_order: order,
        count,
    }))
}

/// Shared field checks for create/update payloads
fn validate_text_fields(
    title: Option<&str>,
    description: &Option<String>,
    poster: &Option<String>,
) -> Result<(), AppError> {
    if let Some(title) = title {
        validate_required_text(title, "Title", MAX_TITLE_LEN)?;
    }
    validate_optional_text(description, "Description", MAX_DESCRIPTION_LEN)?;
    validate_optional_text(poster, "Poster", MAX_URL_LEN)?;
    Ok(())
}

/// POST /api/movies - 创建电影 (admin)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MovieCreate>,
) -> AppResult<(StatusCode, Json<MovieMutationResponse>)> {
    validate_text_fields(Some(&payload.title), &payload.description, &payload.poster)?;

    let repo = MovieRepository::new(state.get_db());
    let movie = repo.create(payload).await?;

    tracing::info!(
        movie_id = %movie.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
        title = %movie.title,
        "Movie created"
    );

    Ok((
        StatusCode::CREATED,
        Json(MovieMutationResponse {
            message: "Movie created successfully".to_string(),
            movie: movie.into(),
        }),
    ))
}

/// PUT /api/movies/:id - 部分更新电影 (admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MovieUpdate>,
) -> AppResult<Json<MovieMutationResponse>> {
    let key = parse_movie_key(&id).ok_or(AppError::InvalidId)?;
    validate_text_fields(
        payload.title.as_deref(),
        &payload.description,
        &payload.poster,
    )?;

    let repo = MovieRepository::new(state.get_db());
    let movie = repo.update(key, payload).await?;

    tracing::info!(movie_id = %id, "Movie updated");

    Ok(Json(MovieMutationResponse {
        message: "Movie updated successfully".to_string(),
        movie: movie.into(),
    }))
}

/// DELETE /api/movies/:id - 删除电影 (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<MovieDeleteResponse>> {
    let key = parse_movie_key(&id).ok_or(AppError::InvalidId)?;

    let repo = MovieRepository::new(state.get_db());
    let movie = repo.delete(key).await?;

    tracing::info!(movie_id = %id, title = %movie.title, "Movie deleted");

    Ok(Json(MovieDeleteResponse {
        message: "Movie deleted successfully".to_string(),
        deleted_movie: movie.into(),
    }))
}
