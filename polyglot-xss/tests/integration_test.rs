//! Integration tests for polyglot-xss

use polyglot_xss::*;

fn sanitizer(tags: &[&str], attributes: &[&str]) -> HtmlSanitizer {
    HtmlSanitizer::from_policy(&SanitizerPolicy::new(
        tags.iter().copied(),
        attributes.iter().copied(),
    ))
}

#[test]
fn test_allowlisted_markup_is_identity() {
    let s = sanitizer(&["p", "em", "a", "ul", "li"], &["href", "title"]);
    let inputs = [
        "<p>One</p><p>Two</p>",
        r#"<ul><li><a href="/en/" title="English">English</a></li></ul>"#,
        "<p><em>nested <em>twice</em></em></p>",
        "just text",
    ];
    for html in inputs {
        assert_eq!(s.sanitize(html).unwrap(), html, "changed: {html}");
    }
}

#[test]
fn test_disallowed_wrapper_removes_everything_inside() {
    let s = sanitizer(&["p", "em"], &[]);
    let clean = s
        .sanitize("<section><p>one <em>two</em></p></section>")
        .unwrap();
    assert_eq!(clean, "");
}

#[test]
fn test_disallowed_attributes_removed_tag_kept() {
    let s = sanitizer(&["img", "p"], &["alt"]);
    let clean = s
        .sanitize(r#"<p style="x"><img src="x.png" alt="logo" onerror="alert(1)"></p>"#)
        .unwrap();
    assert_eq!(clean, r#"<p><img alt="logo"></p>"#);
}

#[test]
fn test_event_handlers_never_survive_default_policy() {
    let s = HtmlSanitizer::new();
    let clean = s
        .sanitize(r#"<a href="/x" onmouseover="steal()">link</a>"#)
        .unwrap();
    assert!(!clean.contains("onmouseover"));
    assert!(clean.contains(r#"href="/x""#));
}

#[test]
fn test_uppercase_policy_and_markup() {
    let s = sanitizer(&["STRONG"], &["Class"]);
    let clean = s.sanitize(r#"<STRONG CLASS="hl">x</STRONG>"#).unwrap();
    assert_eq!(clean, r#"<strong class="hl">x</strong>"#);
    assert!(s.allows_tag("strong"));
    assert!(s.allows_attribute("CLASS"));
}

#[test]
fn test_policy_deserializes_with_defaults() {
    let policy: SanitizerPolicy =
        serde_json::from_str(r#"{"allowed_tags": ["p"]}"#).unwrap();
    assert_eq!(policy.allowed_tags, vec!["p".to_string()]);
    assert!(policy.strip_comments);
    assert_eq!(
        policy.allowed_attributes,
        SanitizerPolicy::default().allowed_attributes
    );
}
