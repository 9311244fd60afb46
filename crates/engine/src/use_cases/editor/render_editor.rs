//! Render editor use case.
//!
//! Produces the markup for one rich-text editor field:
//!
//! ```text
//! <trix-editor class=".." input="trix-editor-1" data-bootsy-*=".."></trix-editor>
//! <input type="hidden" name="post[body]" id="trix-editor-1" .. />
//! <input type="hidden" name="post[bootsy_image_gallery_id]" class="bootsy_image_gallery_id" .. />
//! ```
//!
//! The third tag only appears when uploads are enabled and the container has
//! not been saved yet, so the gallery id travels with the form submission.

use std::sync::Arc;

use bootsy_domain::{
    resolve_editor_config, DataAttributes, EditorFeatures, GalleryContainer, ImageGalleryId,
    BOOTSY_NAMESPACE,
};
use tracing::instrument;

use super::{EditorError, EditorField, EditorFieldOptions, InputIdSequence};
use crate::forms::{content_tag, hidden_field, HtmlAttributes, Markup};
use crate::infrastructure::ports::{ContainerRepo, ImageGalleryRepo};

/// Data attribute (without `data-`) carrying the gallery id.
pub const GALLERY_ID_DATA_KEY: &str = "bootsy-gallery_id";

/// Form attribute and CSS class of the gallery id hidden field.
pub const GALLERY_ID_FIELD: &str = "bootsy_image_gallery_id";

const EDITOR_TAG: &str = "trix-editor";

/// Render editor use case.
///
/// Orchestrates: uploader decision, lazy gallery creation, configuration
/// merge, tag rendering.
pub struct RenderEditor {
    galleries: Arc<dyn ImageGalleryRepo>,
    containers: Arc<dyn ContainerRepo>,
    defaults: EditorFeatures,
    input_ids: Arc<InputIdSequence>,
}

impl RenderEditor {
    pub fn new(
        galleries: Arc<dyn ImageGalleryRepo>,
        containers: Arc<dyn ContainerRepo>,
        defaults: EditorFeatures,
    ) -> Self {
        Self {
            galleries,
            containers,
            defaults,
            input_ids: Arc::new(InputIdSequence::new()),
        }
    }

    /// Share an id sequence with other renderers.
    pub fn with_input_ids(mut self, input_ids: Arc<InputIdSequence>) -> Self {
        self.input_ids = input_ids;
        self
    }

    /// Execute the render editor use case.
    ///
    /// # Returns
    /// * `Ok(Markup)` - editor tag followed by one or two hidden fields
    /// * `Err(EditorError)` - creating or linking the gallery failed
    #[instrument(
        skip_all,
        fields(object_name = field.object_name(), method = field.method())
    )]
    pub async fn execute(
        &self,
        mut field: EditorField<'_>,
        options: EditorFieldOptions,
    ) -> Result<Markup, EditorError> {
        let EditorFieldOptions {
            uploader,
            editor_options,
            class,
            placeholder,
            autofocus,
            id,
            data,
        } = options;

        let uploader = field.uploader_enabled(uploader);
        let mut data = data;
        let mut pending_gallery: Option<ImageGalleryId> = None;

        if uploader {
            if let Some(container) = field.container_mut() {
                let gallery_id = self.ensure_gallery(container).await?;
                data.deep_merge(
                    DataAttributes::new().with(GALLERY_ID_DATA_KEY, gallery_id.to_string()),
                );
                if container.is_new_record() {
                    pending_gallery = Some(gallery_id);
                }
            }
        }

        let config = resolve_editor_config(&self.defaults, &editor_options, uploader);
        data.deep_merge(DataAttributes::namespaced(BOOTSY_NAMESPACE, &config));

        let input_id = id.unwrap_or_else(|| self.input_ids.next_input_id());

        let mut attrs = HtmlAttributes::new();
        if let Some(class) = class {
            attrs.insert("class", class);
        }
        if let Some(placeholder) = placeholder {
            attrs.insert("placeholder", placeholder);
        }
        if let Some(autofocus) = autofocus {
            attrs.insert("autofocus", autofocus);
        }
        attrs.insert("input", input_id.clone());
        for (name, value) in data.html_pairs() {
            attrs.insert(name, value);
        }

        let current = field.current_value();
        let mut markup = content_tag(EDITOR_TAG, "", &attrs)
            + hidden_field(
                field.object_name(),
                field.method(),
                current.as_deref(),
                HtmlAttributes::new().with("id", input_id),
            );

        if let Some(gallery_id) = pending_gallery {
            markup.push(hidden_field(
                field.object_name(),
                GALLERY_ID_FIELD,
                Some(gallery_id.to_string().as_str()),
                HtmlAttributes::new().with("class", GALLERY_ID_FIELD),
            ));
        }

        Ok(markup)
    }

    /// Gallery id of `container`, attaching one if it has none.
    ///
    /// A saved container first adopts the gallery already linked to it in
    /// storage; only when there is none is a gallery created and the link
    /// persisted. The id is assigned in memory only once that write succeeded.
    /// Unsaved containers carry it in memory until the form is submitted.
    async fn ensure_gallery(
        &self,
        container: &mut dyn GalleryContainer,
    ) -> Result<ImageGalleryId, EditorError> {
        if let Some(existing) = container.image_gallery_id() {
            return Ok(existing);
        }

        let key = container.container_key();
        if let Some(key) = &key {
            if let Some(linked) = self.containers.image_gallery_for(key).await? {
                container.set_image_gallery_id(linked);
                tracing::debug!(gallery_id = %linked, container = %key, "Adopted stored gallery link");
                return Ok(linked);
            }
        }

        let gallery = self.galleries.create().await?;
        match &key {
            Some(key) => {
                self.containers
                    .set_image_gallery(key, gallery.id())
                    .await?;
                tracing::debug!(gallery_id = %gallery.id(), container = %key, "Attached new gallery to saved container");
            }
            None => {
                tracing::debug!(gallery_id = %gallery.id(), "Attached new gallery to unsaved container");
            }
        }
        container.set_image_gallery_id(gallery.id());

        Ok(gallery.id())
    }
}
