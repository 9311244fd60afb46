pub mod container;
pub mod entities;
pub mod error;
pub mod ids;
pub mod value_objects;

pub use container::{ContainerKey, GalleryContainer};

pub use entities::{ImageGallery, Post, POST_KIND};

pub use error::DomainError;

// Re-export ID types
pub use ids::{ImageGalleryId, PostId};

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{resolve_editor_config, DataAttributes, EditorFeatures, BOOTSY_NAMESPACE};
