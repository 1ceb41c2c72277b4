//! User Repository

use surrealdb::engine::local::Db;
use surrealdb::Surreal;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::models::{User, USER_TABLE};

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let mut result = self
            .base
            .db()
            .query(format!(
                "SELECT * FROM {USER_TABLE} WHERE email = $email LIMIT 1"
            ))
            .bind(("email", email.to_string()))
            .await?;
        let user: Option<User> = result.take(0)?;
        Ok(user)
    }

    pub async fn find_by_id(&self, key: &str) -> RepoResult<Option<User>> {
        let user: Option<User> = self.base.db().select((USER_TABLE, key)).await?;
        Ok(user)
    }

    /// Create a user; the unique email index is the backstop against a
    /// concurrent registration with the same address.
    pub async fn create(&self, user: User) -> RepoResult<User> {
        let created: Option<User> = self
            .base
            .db()
            .create(USER_TABLE)
            .content(user)
            .await
            .map_err(|e| {
                let msg = e.to_string();
                if msg.contains("user_email_idx") {
                    RepoError::Duplicate("Email already registered".to_string())
                } else {
                    RepoError::Database(msg)
                }
            })?;

        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}
