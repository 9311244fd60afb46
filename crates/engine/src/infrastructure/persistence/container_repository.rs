//! SQLite-backed container to gallery links.
//!
//! Hosts that keep `bootsy_image_gallery_id` as a column on their own tables
//! implement [`ContainerRepo`] against that column instead; this adapter keeps
//! the link in a side table keyed by container kind and id.

use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use bootsy_domain::{ContainerKey, ImageGalleryId};
use sqlx::Row;

use super::SqliteDatabase;
use crate::infrastructure::ports::{ClockPort, ContainerRepo, RepoError};

/// SQLite implementation of [`ContainerRepo`].
pub struct SqliteContainerRepo {
    db: SqliteDatabase,
    clock: Arc<dyn ClockPort>,
}

impl SqliteContainerRepo {
    pub fn new(db: SqliteDatabase, clock: Arc<dyn ClockPort>) -> Self {
        Self { db, clock }
    }
}

#[async_trait]
impl ContainerRepo for SqliteContainerRepo {
    async fn set_image_gallery(
        &self,
        container: &ContainerKey,
        gallery_id: ImageGalleryId,
    ) -> Result<(), RepoError> {
        sqlx::query(
            r#"
            INSERT INTO bootsy_container_galleries
                (container_kind, container_id, image_gallery_id, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(container_kind, container_id) DO UPDATE SET
                image_gallery_id = excluded.image_gallery_id,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(&container.kind)
        .bind(&container.id)
        .bind(gallery_id.to_string())
        .bind(self.clock.now().to_rfc3339())
        .execute(self.db.pool())
        .await
        .map_err(|e| RepoError::database("container.set_image_gallery", e))?;

        tracing::debug!(container = %container, gallery_id = %gallery_id, "Linked container to gallery");
        Ok(())
    }

    async fn image_gallery_for(
        &self,
        container: &ContainerKey,
    ) -> Result<Option<ImageGalleryId>, RepoError> {
        let row = sqlx::query(
            "SELECT image_gallery_id FROM bootsy_container_galleries \
             WHERE container_kind = ? AND container_id = ?",
        )
        .bind(&container.kind)
        .bind(&container.id)
        .fetch_optional(self.db.pool())
        .await
        .map_err(|e| RepoError::database("container.image_gallery_for", e))?;

        row.map(|row| {
            let raw: String = row.get("image_gallery_id");
            ImageGalleryId::from_str(&raw).map_err(RepoError::serialization)
        })
        .transpose()
    }
}
