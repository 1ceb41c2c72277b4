//! Movie Repository
//!
//! Query construction for the catalog: literal substring filtering,
//! allow-listed ordering and pagination. The search needle is always a
//! bound parameter; only tokens derived from the [`SortField`] /
//! [`SortOrder`] enums are interpolated into query text.

use chrono::Utc;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use shared::{MovieCreate, MovieUpdate, SortField, SortOrder};

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{Movie, MOVIE_TABLE};

#[derive(Clone)]
pub struct MovieRepository {
    base: BaseRepository,
}

impl MovieRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Fetch movies matching `search` (case-insensitive substring on title
    /// or description; empty matches all), ordered by `sort`/`order`.
    pub async fn find_filtered(
        &self,
        search: &str,
        sort: SortField,
        order: SortOrder,
    ) -> RepoResult<Vec<Movie>> {
        let mut query = format!("SELECT * FROM {MOVIE_TABLE}");
        if !search.is_empty() {
            query.push_str(
                " WHERE string::contains(string::lowercase(title), $needle) \
                 OR string::contains(string::lowercase(description ?? ''), $needle)",
            );
        }
        query.push_str(&format!(" ORDER BY {} {}", sort.column(), order.keyword()));

        let mut result = self
            .base
            .db()
            .query(query)
            .bind(("needle", search.to_lowercase()))
            .await?;
        let movies: Vec<Movie> = result.take(0)?;
        Ok(movies)
    }

    /// Paginated listing: returns the requested page plus the total match
    /// count. Paging is sliced in-process after the ordered fetch: the
    /// embedded engine has a known issue dropping rows when LIMIT/START
    /// combine with ORDER BY, and a single fetch also yields the total
    /// without a second count query.
    pub async fn list(
        &self,
        search: &str,
        sort: SortField,
        order: SortOrder,
        page: u64,
        limit: u64,
    ) -> RepoResult<(Vec<Movie>, u64)> {
        let all = self.find_filtered(search, sort, order).await?;
        let total = all.len() as u64;

        // page and limit come straight off the query string; saturate so
        // absurd values land on an empty page instead of overflowing
        let skip = usize::try_from(page.saturating_sub(1).saturating_mul(limit))
            .unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);
        let page_items: Vec<Movie> = all.into_iter().skip(skip).take(take).collect();

        Ok((page_items, total))
    }

    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<Movie>> {
        let movie: Option<Movie> = self.base.db().select((MOVIE_TABLE, key)).await?;
        Ok(movie)
    }

    /// Create a new movie; the store assigns the id, we stamp the timestamps.
    pub async fn create(&self, data: MovieCreate) -> RepoResult<Movie> {
        let now = Utc::now();
        let movie = Movie {
            id: None,
            title: data.title,
            description: data.description,
            rating: data.rating,
            release_date: data.release_date,
            duration: data.duration,
            poster: data.poster,
            created_at: now,
            updated_at: now,
        };

        let created: Option<Movie> = self
            .base
            .db()
            .create(MOVIE_TABLE)
            .content(movie)
            .await?;

        created.ok_or_else(|| RepoError::Database("Failed to create movie".to_string()))
    }

    /// Partial update: only fields present in `data` are written, plus
    /// `updated_at`, which refreshes on every successful update (an empty
    /// field set still touches the record). `id` and `created_at` are
    /// never written.
    pub async fn update(&self, key: &str, data: MovieUpdate) -> RepoResult<Movie> {
        let thing = RecordId::from_table_key(MOVIE_TABLE, key);

        // Build dynamic SET clauses with typed bindings
        let mut set_parts: Vec<&str> = Vec::new();
        if data.title.is_some() {
            set_parts.push("title = $title");
        }
        if data.description.is_some() {
            set_parts.push("description = $description");
        }
        if data.rating.is_some() {
            set_parts.push("rating = $rating");
        }
        if data.release_date.is_some() {
            set_parts.push("release_date = $release_date");
        }
        if data.duration.is_some() {
            set_parts.push("duration = $duration");
        }
        if data.poster.is_some() {
            set_parts.push("poster = $poster");
        }

        set_parts.push("updated_at = $updated_at");

        let query_str = format!("UPDATE $thing SET {} RETURN AFTER", set_parts.join(", "));

        let mut query = self.base.db().query(query_str).bind(("thing", thing));
        if let Some(v) = data.title {
            query = query.bind(("title", v));
        }
        if let Some(v) = data.description {
            query = query.bind(("description", v));
        }
        if let Some(v) = data.rating {
            query = query.bind(("rating", v));
        }
        if let Some(v) = data.release_date {
            query = query.bind(("release_date", v));
        }
        if let Some(v) = data.duration {
            query = query.bind(("duration", v));
        }
        if let Some(v) = data.poster {
            query = query.bind(("poster", v));
        }
        query = query.bind(("updated_at", Utc::now()));

        let mut result = query.await?;
        let updated: Vec<Movie> = result.take(0)?;

        updated
            .into_iter()
            .next()
            .ok_or_else(|| RepoError::NotFound("Movie not found".to_string()))
    }

    /// Delete a movie and return its final snapshot.
    pub async fn delete(&self, key: &str) -> RepoResult<Movie> {
        let deleted: Option<Movie> = self.base.db().delete((MOVIE_TABLE, key)).await?;
        deleted.ok_or_else(|| RepoError::NotFound("Movie not found".to_string()))
    }
}
