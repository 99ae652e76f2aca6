use crate::error::{Result, XssError};
use crate::policy::SanitizerPolicy;
use html5ever::serialize::{SerializeOpts, TraversalScope, serialize};
use html5ever::tendril::TendrilSink;
use html5ever::{ParseOpts, QualName, local_name, namespace_url, ns, parse_fragment};
use markup5ever_rcdom::{Handle, NodeData, RcDom, SerializableHandle};
use std::collections::HashSet;

/// Allowlist HTML fragment sanitizer.
///
/// The input is parsed as the content of a `<body>` element. Elements whose
/// tag is not allowed are removed together with everything inside them;
/// allowed elements lose every attribute that is not allowed. Text is kept
/// as parsed.
#[derive(Debug, Clone)]
pub struct HtmlSanitizer {
    allowed_tags: HashSet<String>,
    allowed_attributes: HashSet<String>,
    strip_comments: bool,
}

impl HtmlSanitizer {
    /// Create a sanitizer with the default policy
    pub fn new() -> Self {
        Self::from_policy(&SanitizerPolicy::default())
    }

    /// Create a sanitizer from a policy
    pub fn from_policy(policy: &SanitizerPolicy) -> Self {
        Self {
            allowed_tags: policy
                .allowed_tags
                .iter()
                .map(|t| t.to_ascii_lowercase())
                .collect(),
            allowed_attributes: policy
                .allowed_attributes
                .iter()
                .map(|a| a.to_ascii_lowercase())
                .collect(),
            strip_comments: policy.strip_comments,
        }
    }

    /// Check whether a tag name is allowed
    pub fn allows_tag(&self, tag: &str) -> bool {
        self.allowed_tags.contains(&tag.to_ascii_lowercase())
    }

    /// Check whether an attribute name is allowed
    pub fn allows_attribute(&self, attribute: &str) -> bool {
        self.allowed_attributes
            .contains(&attribute.to_ascii_lowercase())
    }

    /// Sanitize an HTML fragment
    pub fn sanitize(&self, fragment: &str) -> Result<String> {
        let dom = parse_fragment(
            RcDom::default(),
            ParseOpts::default(),
            QualName::new(None, ns!(html), local_name!("body")),
            Vec::new(),
        )
        .one(fragment);

        let root = fragment_root(&dom).ok_or_else(|| {
            XssError::SanitizationFailed("parser produced no fragment root".to_string())
        })?;

        self.sanitize_children(&root);

        let mut out = Vec::with_capacity(fragment.len());
        let opts = SerializeOpts {
            traversal_scope: TraversalScope::ChildrenOnly(None),
            ..Default::default()
        };
        serialize(&mut out, &SerializableHandle::from(root), opts)?;

        Ok(String::from_utf8(out)?)
    }

    fn sanitize_children(&self, node: &Handle) {
        let children = node.children.take();
        let kept: Vec<Handle> = children
            .into_iter()
            .filter(|child| self.sanitize_node(child))
            .collect();
        *node.children.borrow_mut() = kept;
    }

    /// Returns false if the node must be removed.
    fn sanitize_node(&self, node: &Handle) -> bool {
        match &node.data {
            NodeData::Element {
                name,
                attrs,
                template_contents,
                ..
            } => {
                if !self.allows_tag(&name.local) {
                    return false;
                }

                attrs
                    .borrow_mut()
                    .retain(|attr| self.allows_attribute(&attr.name.local));

                if let Some(contents) = template_contents.borrow().as_ref() {
                    self.sanitize_children(contents);
                }
                self.sanitize_children(node);
                true
            }
            NodeData::Text { .. } => true,
            NodeData::Comment { .. } => !self.strip_comments,
            _ => false,
        }
    }
}

impl Default for HtmlSanitizer {
    fn default() -> Self {
        Self::new()
    }
}

/// The synthetic `<html>` element whose children are the parsed fragment.
fn fragment_root(dom: &RcDom) -> Option<Handle> {
    dom.document
        .children
        .borrow()
        .iter()
        .find(|child| matches!(child.data, NodeData::Element { .. }))
        .cloned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sanitizer(tags: &[&str], attributes: &[&str]) -> HtmlSanitizer {
        HtmlSanitizer::from_policy(&SanitizerPolicy::new(
            tags.iter().copied(),
            attributes.iter().copied(),
        ))
    }

    #[test]
    fn test_allowed_fragment_is_unchanged() {
        let s = sanitizer(&["p", "strong", "a"], &["class", "href"]);
        let html = r#"<p class="lead">Hello <strong>world</strong>, <a href="/de/">here</a></p>"#;
        assert_eq!(s.sanitize(html).unwrap(), html);
    }

    #[test]
    fn test_disallowed_tag_drops_subtree() {
        let s = sanitizer(&["p", "strong"], &[]);
        let html = "<div><p>inside <strong>bold</strong></p></div><p>after</p>";
        assert_eq!(s.sanitize(html).unwrap(), "<p>after</p>");
    }

    #[test]
    fn test_disallowed_attribute_is_removed() {
        let s = sanitizer(&["a"], &["href"]);
        let html = r#"<a href="/x" onclick="steal()" style="color:red">Go <b>now</b></a>"#;
        assert_eq!(s.sanitize(html).unwrap(), r#"<a href="/x">Go </a>"#);
    }

    #[test]
    fn test_script_is_removed_with_content() {
        let s = HtmlSanitizer::new();
        let clean = s.sanitize("ok<script>alert('XSS')</script>").unwrap();
        assert_eq!(clean, "ok");
    }

    #[test]
    fn test_names_are_case_insensitive() {
        let s = sanitizer(&["EM"], &["TITLE"]);
        let clean = s.sanitize(r#"<Em Title="t" ID="x">hi</Em>"#).unwrap();
        assert_eq!(clean, r#"<em title="t">hi</em>"#);
    }

    #[test]
    fn test_text_passes_through() {
        let s = sanitizer(&[], &[]);
        assert_eq!(s.sanitize("Tom &amp; Jerry").unwrap(), "Tom &amp; Jerry");
        assert_eq!(s.sanitize("plain text").unwrap(), "plain text");
        assert_eq!(s.sanitize("").unwrap(), "");
    }

    #[test]
    fn test_comments_stripped_by_default() {
        let s = HtmlSanitizer::new();
        assert_eq!(s.sanitize("a<!-- note -->b").unwrap(), "ab");

        let keep = HtmlSanitizer::from_policy(&SanitizerPolicy::default().with_strip_comments(false));
        assert_eq!(keep.sanitize("a<!-- note -->b").unwrap(), "a<!-- note -->b");
    }

    #[test]
    fn test_deeply_nested_disallowed_content_never_leaks() {
        let s = sanitizer(&["p", "em"], &[]);
        let html = "<p>keep <iframe><em>hidden</em></iframe><em>shown</em></p>";
        assert_eq!(s.sanitize(html).unwrap(), "<p>keep <em>shown</em></p>");
    }

    #[test]
    fn test_void_elements() {
        let s = sanitizer(&["br", "p"], &[]);
        assert_eq!(s.sanitize("<p>a<br>b</p>").unwrap(), "<p>a<br>b</p>");
    }
}
