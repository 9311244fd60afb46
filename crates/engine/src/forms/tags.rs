//! Tag builders.

use super::{escape_html, HtmlAttributes, Markup};

/// `<name attrs>body</name>` with `body` escaped.
pub fn content_tag(name: &str, body: &str, attrs: &HtmlAttributes) -> Markup {
    Markup::from_trusted(format!(
        "<{name}{attrs}>{body}</{name}>",
        name = name,
        attrs = attrs.render(),
        body = escape_html(body)
    ))
}

/// Parameter name for `method` on `object_name`, e.g. `post[body]`.
pub fn field_name(object_name: &str, method: &str) -> String {
    if object_name.is_empty() {
        method.to_string()
    } else {
        format!("{}[{}]", object_name, method)
    }
}

/// Default DOM id for `method` on `object_name`, e.g. `post_body`.
///
/// Nested names like `blog[post]` collapse to `blog_post`; characters outside
/// `[-a-zA-Z0-9:.]` become underscores.
pub fn field_id(object_name: &str, method: &str) -> String {
    let object = sanitize(object_name);
    let method = sanitize(method.trim_end_matches('?'));
    if object.is_empty() {
        method
    } else {
        format!("{}_{}", object, method)
    }
}

fn sanitize(name: &str) -> String {
    let replaced: String = name
        .replace("][", "_")
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | ':' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    replaced.trim_end_matches('_').to_string()
}

/// Hidden input bound to `object_name[method]`.
///
/// `attrs` may override the default `id` and add attributes such as `class`;
/// `type`, `name`, `value` and `autocomplete` are always set here.
pub fn hidden_field(
    object_name: &str,
    method: &str,
    value: Option<&str>,
    attrs: HtmlAttributes,
) -> Markup {
    let mut all = HtmlAttributes::new()
        .with("type", "hidden")
        .with("name", field_name(object_name, method))
        .with("id", field_id(object_name, method));
    all.extend(attrs);
    all.insert("value", value.unwrap_or_default());
    all.insert("autocomplete", "off");

    Markup::from_trusted(format!("<input{} />", all.render()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_tag_escapes_body() {
        let attrs = HtmlAttributes::new().with("class", "note");
        let tag = content_tag("p", "1 < 2", &attrs);
        assert_eq!(tag.as_str(), r#"<p class="note">1 &lt; 2</p>"#);
    }

    #[test]
    fn empty_content_tag() {
        let tag = content_tag("trix-editor", "", &HtmlAttributes::new());
        assert_eq!(tag.as_str(), "<trix-editor></trix-editor>");
    }

    #[test]
    fn field_names_and_ids() {
        assert_eq!(field_name("post", "body"), "post[body]");
        assert_eq!(field_name("", "body"), "body");
        assert_eq!(field_id("post", "body"), "post_body");
        assert_eq!(field_id("blog[post]", "body"), "blog_post_body");
        assert_eq!(field_id("post", "published?"), "post_published");
    }

    #[test]
    fn hidden_field_uses_default_id_and_value() {
        let field = hidden_field("post", "body", Some("<p>Hi</p>"), HtmlAttributes::new());
        assert_eq!(
            field.as_str(),
            r#"<input type="hidden" name="post[body]" id="post_body" value="&lt;p&gt;Hi&lt;/p&gt;" autocomplete="off" />"#
        );
    }

    #[test]
    fn hidden_field_accepts_id_override_and_class() {
        let attrs = HtmlAttributes::new()
            .with("id", "trix-editor-3")
            .with("class", "rich");
        let field = hidden_field("post", "body", None, attrs);
        assert_eq!(
            field.as_str(),
            r#"<input type="hidden" name="post[body]" id="trix-editor-3" class="rich" value="" autocomplete="off" />"#
        );
    }
}
