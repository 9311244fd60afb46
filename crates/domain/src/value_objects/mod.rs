//! Value objects - Immutable objects defined by their attributes

mod data_attributes;
mod editor_features;

// Namespaced `data-*` attributes for client-side editor configuration
pub use data_attributes::{DataAttributes, BOOTSY_NAMESPACE};

// Editor feature flags and their precedence rules
pub use editor_features::{resolve_editor_config, EditorFeatures};
