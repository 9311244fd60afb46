//! Post entity - Rich-text article that anchors an image gallery

use serde::{Deserialize, Serialize};

use crate::{ContainerKey, DomainError, GalleryContainer, ImageGalleryId, PostId};

/// Container kind used in [`ContainerKey`]s for posts.
pub const POST_KIND: &str = "post";

/// A post whose body is edited with the rich-text editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    id: PostId,
    title: String,
    body: String,
    bootsy_image_gallery_id: Option<ImageGalleryId>,
    /// Whether the post has been saved; unsaved posts have no container key
    #[serde(default)]
    persisted: bool,
}

impl Post {
    /// Create a new, unsaved post
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Result<Self, DomainError> {
        let title = title.into();
        if title.trim().is_empty() {
            return Err(DomainError::validation("Post title cannot be empty"));
        }
        Ok(Self {
            id: PostId::new(),
            title,
            body: body.into(),
            bootsy_image_gallery_id: None,
            persisted: false,
        })
    }

    /// Create an empty draft, as rendered by a "new post" form
    pub fn draft() -> Self {
        Self {
            id: PostId::new(),
            title: String::new(),
            body: String::new(),
            bootsy_image_gallery_id: None,
            persisted: false,
        }
    }

    /// Reconstruct a saved post from stored data
    pub fn reconstruct(
        id: PostId,
        title: String,
        body: String,
        bootsy_image_gallery_id: Option<ImageGalleryId>,
    ) -> Self {
        Self {
            id,
            title,
            body,
            bootsy_image_gallery_id,
            persisted: true,
        }
    }

    // --- Accessors ---

    pub fn id(&self) -> PostId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn body(&self) -> &str {
        &self.body
    }

    // --- Builder-style modifiers ---

    pub fn with_image_gallery(mut self, id: ImageGalleryId) -> Self {
        self.bootsy_image_gallery_id = Some(id);
        self
    }
}

impl GalleryContainer for Post {
    fn image_gallery_id(&self) -> Option<ImageGalleryId> {
        self.bootsy_image_gallery_id
    }

    fn set_image_gallery_id(&mut self, id: ImageGalleryId) {
        self.bootsy_image_gallery_id = Some(id);
    }

    fn container_key(&self) -> Option<ContainerKey> {
        self.persisted.then(|| ContainerKey::new(POST_KIND, self.id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_post_requires_title() {
        let err = Post::new("   ", "body").unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn new_post_is_unsaved_container_without_gallery() {
        let post = Post::new("Hello", "<p>world</p>").unwrap();
        assert!(post.is_new_record());
        assert_eq!(post.image_gallery_id(), None);
    }

    #[test]
    fn saved_post_exposes_container_key() {
        let id = PostId::new();
        let post = Post::reconstruct(id, "Hello".into(), String::new(), None);

        assert!(!post.is_new_record());
        assert_eq!(
            post.container_key(),
            Some(ContainerKey::new(POST_KIND, id))
        );
    }

    #[test]
    fn setting_gallery_id_is_visible_through_capability() {
        let gallery = ImageGalleryId::new();
        let mut post = Post::draft();
        post.set_image_gallery_id(gallery);
        assert_eq!(post.image_gallery_id(), Some(gallery));
    }
}
