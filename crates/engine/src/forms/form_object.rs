//! The entity a form template is bound to.

use bootsy_domain::{GalleryContainer, Post};

/// Entity bound to a form template.
pub trait FormObject: Send + Sync {
    /// Current value of `attribute` in form-field form.
    fn attribute_value(&self, attribute: &str) -> Option<String>;

    /// The entity as a gallery container, if it plays that role.
    fn as_gallery_container(&mut self) -> Option<&mut dyn GalleryContainer> {
        None
    }
}

impl FormObject for Post {
    fn attribute_value(&self, attribute: &str) -> Option<String> {
        match attribute {
            "id" => Some(self.id().to_string()),
            "title" => Some(self.title().to_string()),
            "body" => Some(self.body().to_string()),
            "bootsy_image_gallery_id" => self.image_gallery_id().map(|id| id.to_string()),
            _ => None,
        }
    }

    fn as_gallery_container(&mut self) -> Option<&mut dyn GalleryContainer> {
        Some(self)
    }
}
