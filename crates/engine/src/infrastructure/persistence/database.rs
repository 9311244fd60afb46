//! SQLite connection management

use sqlx::SqlitePool;

use crate::infrastructure::ports::RepoError;

/// Shared SQLite pool
#[derive(Clone)]
pub struct SqliteDatabase {
    pool: SqlitePool,
}

impl SqliteDatabase {
    /// Open (creating if missing) the database file at `db_path`.
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;
        tracing::info!("Opened SQLite database at {}", db_path);

        Ok(Self { pool })
    }

    /// Get a reference to the pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create gallery tables if they do not exist yet
    pub async fn initialize_schema(&self) -> Result<(), RepoError> {
        let statements = [
            r#"
            CREATE TABLE IF NOT EXISTS bootsy_image_galleries (
                id TEXT PRIMARY KEY NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
            r#"
            CREATE TABLE IF NOT EXISTS bootsy_container_galleries (
                container_kind TEXT NOT NULL,
                container_id TEXT NOT NULL,
                image_gallery_id TEXT NOT NULL REFERENCES bootsy_image_galleries (id),
                updated_at TEXT NOT NULL,
                PRIMARY KEY (container_kind, container_id)
            )
            "#,
        ];

        for statement in statements {
            sqlx::query(statement)
                .execute(&self.pool)
                .await
                .map_err(|e| RepoError::database("initialize_schema", e))?;
        }

        tracing::debug!("Gallery schema initialized");
        Ok(())
    }
}
