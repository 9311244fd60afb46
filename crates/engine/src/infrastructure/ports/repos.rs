//! Repository port traits for database access.

use async_trait::async_trait;
use bootsy_domain::{ContainerKey, ImageGallery, ImageGalleryId};

use super::error::RepoError;

// =============================================================================
// Galleries
// =============================================================================

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageGalleryRepo: Send + Sync {
    /// Insert a fresh gallery and return it.
    async fn create(&self) -> Result<ImageGallery, RepoError>;
    async fn get(&self, id: ImageGalleryId) -> Result<Option<ImageGallery>, RepoError>;
}

// =============================================================================
// Containers
// =============================================================================

/// Storage for the gallery foreign key of saved containers.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContainerRepo: Send + Sync {
    async fn set_image_gallery(
        &self,
        container: &ContainerKey,
        gallery_id: ImageGalleryId,
    ) -> Result<(), RepoError>;
    async fn image_gallery_for(
        &self,
        container: &ContainerKey,
    ) -> Result<Option<ImageGalleryId>, RepoError>;
}
