//! Use cases - User story orchestration.
//!
//! Each module contains use cases for a specific domain area.

pub mod editor;

// Re-export main types
pub use editor::EditorUseCases;
