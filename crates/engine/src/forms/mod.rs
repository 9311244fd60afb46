//! HTML form building blocks.
//!
//! Small, allocation-friendly tag builders modelled on server-side form
//! helpers: a generic content tag, a model-bound hidden field, and the
//! [`FormObject`] seam through which templates expose their bound entity.

mod attributes;
mod form_object;
mod markup;
mod tags;

pub use attributes::{escape_html, AttrValue, HtmlAttributes};
pub use form_object::FormObject;
pub use markup::Markup;
pub use tags::{content_tag, field_id, field_name, hidden_field};
