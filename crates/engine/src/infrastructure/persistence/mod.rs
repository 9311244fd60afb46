//! SQLite persistence adapters.

mod container_repository;
mod database;
mod image_gallery_repository;

pub use container_repository::SqliteContainerRepo;
pub use database::SqliteDatabase;
pub use image_gallery_repository::SqliteImageGalleryRepo;
