//! Bootsy Engine library.
//!
//! Renders rich-text editor form fields and manages the image galleries they
//! upload into.
//!
//! ## Structure
//!
//! - `forms/` - HTML tag builders and the form object seam
//! - `use_cases/` - Editor field rendering
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `api/` - HTTP entry points
//! - `app` - Application composition

pub mod api;
pub mod app;
pub mod forms;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
