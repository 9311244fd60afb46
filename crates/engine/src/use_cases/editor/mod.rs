//! Rich-text editor form field use cases.
//!
//! Renders a `<trix-editor>` bound to a model attribute and wires the
//! editor's image gallery into the surrounding form.

mod error;
mod input_id;
mod options;
mod render_editor;

use std::sync::Arc;

pub use error::EditorError;
pub use input_id::{InputIdSequence, INPUT_ID_PREFIX};
pub use options::{EditorField, EditorFieldOptions};
pub use render_editor::{RenderEditor, GALLERY_ID_DATA_KEY, GALLERY_ID_FIELD};

/// Container for editor use cases.
pub struct EditorUseCases {
    pub render: Arc<RenderEditor>,
}

impl EditorUseCases {
    pub fn new(render: Arc<RenderEditor>) -> Self {
        Self { render }
    }
}
