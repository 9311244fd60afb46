//! Editor feature flags.
//!
//! The editor's behaviour is configured by a flat map of boolean feature
//! flags (`font_styles`, `link`, `uploader`, ...). Flags come from three
//! layers with a fixed precedence:
//!
//! 1. application defaults (configured once per process)
//! 2. per-field overrides passed when rendering an editor
//! 3. flags computed at render time (currently only `uploader`)
//!
//! Later layers win. Unknown flag names are carried through untouched so the
//! client-side editor can pick up new features without a server release.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Ordered set of named boolean feature flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EditorFeatures(BTreeMap<String, bool>);

impl EditorFeatures {
    pub const ALIGNMENT: &'static str = "alignment";
    pub const COLOR: &'static str = "color";
    pub const EMPHASIS: &'static str = "emphasis";
    pub const FONT_STYLES: &'static str = "font_styles";
    pub const HTML: &'static str = "html";
    pub const IMAGE: &'static str = "image";
    pub const LINK: &'static str = "link";
    pub const LISTS: &'static str = "lists";
    pub const UPLOADER: &'static str = "uploader";

    pub fn new() -> Self {
        Self::default()
    }

    /// Stock toolbar: everything on except raw HTML editing.
    pub fn classic() -> Self {
        Self::new()
            .with(Self::ALIGNMENT, true)
            .with(Self::COLOR, true)
            .with(Self::EMPHASIS, true)
            .with(Self::FONT_STYLES, true)
            .with(Self::HTML, false)
            .with(Self::IMAGE, true)
            .with(Self::LINK, true)
            .with(Self::LISTS, true)
            .with(Self::UPLOADER, true)
    }

    /// Parse a JSON object of flag name to boolean.
    pub fn from_json(json: &str) -> Result<Self, DomainError> {
        serde_json::from_str(json).map_err(|e| {
            DomainError::parse(format!(
                "editor options must be a JSON object of booleans: {}",
                e
            ))
        })
    }

    pub fn with(mut self, key: impl Into<String>, enabled: bool) -> Self {
        self.set(key, enabled);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, enabled: bool) {
        self.0.insert(key.into(), enabled);
    }

    pub fn get(&self, key: &str) -> Option<bool> {
        self.0.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.0.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Layer `overrides` on top of `self`; flags present in both take the
    /// override's value.
    pub fn merged_with(&self, overrides: &EditorFeatures) -> Self {
        let mut merged = self.clone();
        for (key, enabled) in overrides.iter() {
            merged.set(key, enabled);
        }
        merged
    }
}

/// Final editor configuration for one render: defaults, then caller
/// overrides, then the computed uploader flag.
pub fn resolve_editor_config(
    defaults: &EditorFeatures,
    overrides: &EditorFeatures,
    uploader: bool,
) -> EditorFeatures {
    defaults
        .merged_with(overrides)
        .with(EditorFeatures::UPLOADER, uploader)
}
