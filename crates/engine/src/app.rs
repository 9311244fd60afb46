//! Application state and composition.

use std::sync::Arc;

use crate::infrastructure::{
    ports::{ContainerRepo, ImageGalleryRepo},
    settings::BootsySettings,
};
use crate::use_cases::editor::{EditorUseCases, RenderEditor};

/// Main application state.
///
/// Holds repositories, use cases and settings.
/// Passed to HTTP handlers via Axum state.
pub struct App {
    pub repositories: Repositories,
    pub use_cases: UseCases,
    pub settings: BootsySettings,
}

/// Container for all repository ports.
pub struct Repositories {
    pub image_gallery: Arc<dyn ImageGalleryRepo>,
    pub container: Arc<dyn ContainerRepo>,
}

/// Container for all use cases.
pub struct UseCases {
    pub editor: EditorUseCases,
}

impl App {
    pub fn new(
        settings: BootsySettings,
        image_gallery: Arc<dyn ImageGalleryRepo>,
        container: Arc<dyn ContainerRepo>,
    ) -> Self {
        let render = Arc::new(RenderEditor::new(
            image_gallery.clone(),
            container.clone(),
            settings.editor_options.clone(),
        ));

        Self {
            repositories: Repositories {
                image_gallery,
                container,
            },
            use_cases: UseCases {
                editor: EditorUseCases::new(render),
            },
            settings,
        }
    }
}
