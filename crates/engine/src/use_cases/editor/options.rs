//! Inputs of an editor render: the bound field and per-call options.

use bootsy_domain::{DataAttributes, EditorFeatures, GalleryContainer};

use crate::forms::FormObject;

/// The form field an editor is rendered for.
///
/// `object` is the entity bound to the template; it supplies the hidden
/// field's current value and doubles as the gallery container when it has
/// that capability. `container` names a different entity as the container.
pub struct EditorField<'a> {
    object_name: &'a str,
    method: &'a str,
    object: Option<&'a mut dyn FormObject>,
    container: Option<&'a mut dyn GalleryContainer>,
}

impl<'a> EditorField<'a> {
    pub fn new(object_name: &'a str, method: &'a str) -> Self {
        Self {
            object_name,
            method,
            object: None,
            container: None,
        }
    }

    pub fn with_object(mut self, object: &'a mut dyn FormObject) -> Self {
        self.object = Some(object);
        self
    }

    pub fn with_container(mut self, container: &'a mut dyn GalleryContainer) -> Self {
        self.container = Some(container);
        self
    }

    pub fn object_name(&self) -> &'a str {
        self.object_name
    }

    pub fn method(&self) -> &'a str {
        self.method
    }

    /// Whether the upload feature is on for this render.
    ///
    /// An explicit `Some(false)` always disables it. Otherwise it is on when a
    /// container is given, or when none is given but the bound object is one.
    pub fn uploader_enabled(&mut self, requested: Option<bool>) -> bool {
        if requested == Some(false) {
            return false;
        }
        if self.container.is_some() {
            return true;
        }
        match self.object {
            Some(ref mut object) => object.as_gallery_container().is_some(),
            None => false,
        }
    }

    /// Explicit container, falling back to the bound object.
    pub fn container_mut(&mut self) -> Option<&mut dyn GalleryContainer> {
        match self.container.as_mut() {
            Some(container) => {
                let container: &mut dyn GalleryContainer = &mut **container;
                Some(container)
            }
            None => self
                .object
                .as_mut()
                .and_then(|object| object.as_gallery_container()),
        }
    }

    /// Current value of the bound attribute on the template object.
    pub fn current_value(&self) -> Option<String> {
        self.object
            .as_deref()
            .and_then(|object| object.attribute_value(self.method))
    }
}

/// Per-call editor options.
///
/// Every field is optional; the defaults render a plain editor whose upload
/// feature depends only on the container.
#[derive(Debug, Clone, Default)]
pub struct EditorFieldOptions {
    /// `Some(false)` disables uploads even when a container is present
    pub uploader: Option<bool>,
    /// Feature flag overrides layered over the configured defaults
    pub editor_options: EditorFeatures,
    pub class: Option<String>,
    pub placeholder: Option<String>,
    pub autofocus: Option<bool>,
    /// Explicit id for the hidden input; generated when absent
    pub id: Option<String>,
    pub data: DataAttributes,
}

impl EditorFieldOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_uploader(mut self, enabled: bool) -> Self {
        self.uploader = Some(enabled);
        self
    }

    pub fn with_editor_options(mut self, editor_options: EditorFeatures) -> Self {
        self.editor_options = editor_options;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub fn with_autofocus(mut self, autofocus: bool) -> Self {
        self.autofocus = Some(autofocus);
        self
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_data(mut self, data: DataAttributes) -> Self {
        self.data = data;
        self
    }
}
