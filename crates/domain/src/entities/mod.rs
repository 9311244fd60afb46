//! Domain entities - Core business objects with identity

mod image_gallery;
mod post;

pub use image_gallery::ImageGallery;
pub use post::{Post, POST_KIND};
