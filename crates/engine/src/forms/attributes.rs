//! Tag attributes and escaping.

use std::fmt::Write;

/// Attribute value: text, or a boolean attribute rendered as `name="name"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<bool> for AttrValue {
    fn from(value: bool) -> Self {
        Self::Flag(value)
    }
}

/// Insertion-ordered attribute list. Re-inserting a name replaces its value
/// in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlAttributes(Vec<(String, AttrValue)>);

impl HtmlAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<AttrValue>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.0.push((name, value)),
        }
    }

    /// Append every attribute of `other`, replacing same-named ones.
    pub fn extend(&mut self, other: HtmlAttributes) {
        for (name, value) in other.0 {
            self.insert(name, value);
        }
    }

    /// Render as ` name="value"` pairs (leading space included). False flags
    /// are omitted.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.0 {
            let name = escape_attribute_name(name);
            match value {
                AttrValue::Text(text) => {
                    let _ = write!(out, " {}=\"{}\"", name, escape_html(text));
                }
                AttrValue::Flag(true) => {
                    let _ = write!(out, " {}=\"{}\"", name, name);
                }
                AttrValue::Flag(false) => {}
            }
        }
        out
    }
}

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Make `name` safe as an attribute name: characters outside
/// `[A-Za-z0-9_:.-]` become `_`.
fn escape_attribute_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | ':' | '.' | '-' => c,
            _ => '_',
        })
        .collect()
}
