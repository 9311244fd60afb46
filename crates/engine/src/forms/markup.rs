//! Escaped HTML output of the tag builders.

use std::fmt;
use std::ops::Add;

/// Rendered, already-escaped HTML.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Markup(String);

impl Markup {
    /// Wrap a string that is already safe HTML.
    pub fn from_trusted(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn push(&mut self, other: Markup) {
        self.0.push_str(&other.0);
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Add for Markup {
    type Output = Markup;

    fn add(mut self, rhs: Markup) -> Markup {
        self.push(rhs);
        self
    }
}

impl fmt::Display for Markup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
