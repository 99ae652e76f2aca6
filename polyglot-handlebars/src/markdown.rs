//! Markdown to HTML conversion for catalog strings

use pulldown_cmark::{Options, Parser, html};

/// Catalog path of the text shown when a Markdown key is absent or empty.
pub const PLACEHOLDER_PATH: [&str; 2] = ["markdown", "placeholder"];

/// Placeholder used when the catalog has none.
pub const DEFAULT_PLACEHOLDER: &str = "Content not available";

/// Convert Markdown to HTML.
pub fn render_markdown(source: &str) -> String {
    let options = Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TABLES
        | Options::ENABLE_TASKLISTS
        | Options::ENABLE_FOOTNOTES;
    let parser = Parser::new_ext(source, options);

    let mut out = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}

/// Remove a single trailing line terminator.
///
/// `"a\n"` and `"a\r\n"` become `"a"`; `"a\n\n"` is left as is.
pub fn strip_single_trailing_newline(source: &str) -> &str {
    let trimmed = source
        .strip_suffix("\r\n")
        .or_else(|| source.strip_suffix('\n'));

    match trimmed {
        Some(rest) if !rest.ends_with('\n') && !rest.ends_with('\r') => rest,
        _ => source,
    }
}

/// Markdown shown in place of a missing entry.
pub fn placeholder_markdown(placeholder: Option<&str>) -> String {
    format!("*{}*", placeholder.unwrap_or(DEFAULT_PLACEHOLDER))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_paragraph_and_emphasis() {
        assert_eq!(render_markdown("Hello *world*"), "<p>Hello <em>world</em></p>\n");
    }

    #[test]
    fn test_render_list() {
        let html = render_markdown("- one\n- two");
        assert!(html.contains("<ul>"));
        assert!(html.contains("<li>one</li>"));
    }

    #[test]
    fn test_strip_single_trailing_newline() {
        assert_eq!(strip_single_trailing_newline("a\n"), "a");
        assert_eq!(strip_single_trailing_newline("a\r\n"), "a");
        assert_eq!(strip_single_trailing_newline("a"), "a");
        assert_eq!(strip_single_trailing_newline("a\n\n"), "a\n\n");
        assert_eq!(strip_single_trailing_newline("a\r\n\r\n"), "a\r\n\r\n");
        assert_eq!(strip_single_trailing_newline(""), "");
    }

    #[test]
    fn test_trailing_newline_does_not_change_output() {
        assert_eq!(
            render_markdown(strip_single_trailing_newline("# Title\n")),
            render_markdown("# Title")
        );
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(placeholder_markdown(None), "*Content not available*");
        assert_eq!(placeholder_markdown(Some("Bald verfügbar")), "*Bald verfügbar*");
        assert_eq!(
            render_markdown(&placeholder_markdown(None)),
            "<p><em>Content not available</em></p>\n"
        );
    }
}
