//! ImageGallery entity - Collection of uploadable images anchored to one container

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ImageGalleryId;

/// A persisted image gallery.
///
/// Galleries carry no data of their own beyond identity; images uploaded
/// through the editor reference the gallery by id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageGallery {
    id: ImageGalleryId,
    /// When the gallery was created
    created_at: DateTime<Utc>,
}

impl ImageGallery {
    /// Create a new, not yet stored gallery
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            id: ImageGalleryId::new(),
            created_at: now,
        }
    }

    /// Reconstruct from stored data (e.g., database)
    pub fn reconstruct(id: ImageGalleryId, created_at: DateTime<Utc>) -> Self {
        Self { id, created_at }
    }

    // --- Accessors ---

    pub fn id(&self) -> ImageGalleryId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
