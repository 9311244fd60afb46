//! SQLite-backed image gallery storage.

use std::sync::Arc;

use async_trait::async_trait;
use bootsy_domain::{ImageGallery, ImageGalleryId};
use chrono::{DateTime, Utc};
use sqlx::Row;

use super::SqliteDatabase;
use crate::infrastructure::ports::{ClockPort, ImageGalleryRepo, RepoError};

/// SQLite implementation of [`ImageGalleryRepo`].
pub struct SqliteImageGalleryRepo {
    db: SqliteDatabase,
    clock: Arc<dyn ClockPort>,
}

impl SqliteImageGalleryRepo {
    pub fn new(db: SqliteDatabase, clock: Arc<dyn ClockPort>) -> Self {
        Self { db, clock }
    }
}

#[async_trait]
impl ImageGalleryRepo for SqliteImageGalleryRepo {
    async fn create(&self) -> Result<ImageGallery, RepoError> {
        let gallery = ImageGallery::new(self.clock.now());

        sqlx::query("INSERT INTO bootsy_image_galleries (id, created_at) VALUES (?, ?)")
            .bind(gallery.id().to_string())
            .bind(gallery.created_at().to_rfc3339())
            .execute(self.db.pool())
            .await
            .map_err(|e| RepoError::database("image_gallery.create", e))?;

        tracing::debug!(gallery_id = %gallery.id(), "Created image gallery");
        Ok(gallery)
    }

    async fn get(&self, id: ImageGalleryId) -> Result<Option<ImageGallery>, RepoError> {
        let row = sqlx::query("SELECT id, created_at FROM bootsy_image_galleries WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(self.db.pool())
            .await
            .map_err(|e| RepoError::database("image_gallery.get", e))?;

        match row {
            Some(row) => {
                let created_at: String = row.get("created_at");
                let created_at = DateTime::parse_from_rfc3339(&created_at)
                    .map_err(RepoError::serialization)?
                    .with_timezone(&Utc);
                Ok(Some(ImageGallery::reconstruct(id, created_at)))
            }
            None => Ok(None),
        }
    }
}
