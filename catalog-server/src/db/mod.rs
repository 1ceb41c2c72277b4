//! Database Module
//!
//! Embedded SurrealDB connection and startup schema definitions.

pub mod models;
pub mod repository;

use std::path::Path;

use surrealdb::engine::local::{Db, RocksDb};
use surrealdb::Surreal;

use crate::utils::AppError;

const NAMESPACE: &str = "catalog";
const DATABASE: &str = "catalog";

/// Database service, owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the database under `data_dir` and apply schema
    pub async fn new(data_dir: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = data_dir.as_ref().join("catalog.db");

        let db: Surreal<Db> = Surreal::new::<RocksDb>(path.as_path())
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        tracing::info!("Database opened at {}", path.display());

        Self::define_schema(&db).await?;

        Ok(Self { db })
    }

    /// Apply table and index definitions (idempotent)
    async fn define_schema(db: &Surreal<Db>) -> Result<(), AppError> {
        db.query(
            "DEFINE TABLE IF NOT EXISTS movie SCHEMALESS;
             DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
             DEFINE INDEX IF NOT EXISTS user_email_idx ON user FIELDS email UNIQUE;",
        )
        .await
        .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?
        .check()
        .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?;

        tracing::info!("Database schema applied");
        Ok(())
    }
}
