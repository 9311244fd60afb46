//! Gallery container capability.
//!
//! A container is any persisted entity that anchors an editor's image gallery
//! through a nullable gallery foreign key. Entity types opt in by implementing
//! [`GalleryContainer`]; the editor field never inspects concrete types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ImageGalleryId;

/// Identity of a persisted container row.
///
/// `kind` names the entity type (e.g. `"post"`), `id` its primary key in
/// string form. Only saved containers have a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContainerKey {
    pub kind: String,
    pub id: String,
}

impl ContainerKey {
    pub fn new(kind: impl Into<String>, id: impl ToString) -> Self {
        Self {
            kind: kind.into(),
            id: id.to_string(),
        }
    }
}

impl fmt::Display for ContainerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.kind, self.id)
    }
}

/// Entity holding a nullable image gallery identifier.
pub trait GalleryContainer: Send + Sync {
    fn image_gallery_id(&self) -> Option<ImageGalleryId>;

    fn set_image_gallery_id(&mut self, id: ImageGalleryId);

    /// Key of the saved row, `None` while the container is unsaved.
    fn container_key(&self) -> Option<ContainerKey>;

    fn is_new_record(&self) -> bool {
        self.container_key().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Note {
        gallery: Option<ImageGalleryId>,
        saved_as: Option<u64>,
    }

    impl GalleryContainer for Note {
        fn image_gallery_id(&self) -> Option<ImageGalleryId> {
            self.gallery
        }

        fn set_image_gallery_id(&mut self, id: ImageGalleryId) {
            self.gallery = Some(id);
        }

        fn container_key(&self) -> Option<ContainerKey> {
            self.saved_as.map(|id| ContainerKey::new("note", id))
        }
    }

    #[test]
    fn new_record_follows_container_key() {
        let unsaved = Note {
            gallery: None,
            saved_as: None,
        };
        let saved = Note {
            gallery: None,
            saved_as: Some(7),
        };

        assert!(unsaved.is_new_record());
        assert!(!saved.is_new_record());
        assert_eq!(
            saved.container_key().map(|k| k.to_string()).as_deref(),
            Some("note:7")
        );
    }
}
