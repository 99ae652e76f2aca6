//! Built-in Handlebars helpers
//!
//! The catalog being rendered is the template's root data, so the
//! translation helpers read it through [`Context::data`].

use crate::markdown::{
    PLACEHOLDER_PATH, placeholder_markdown, render_markdown, strip_single_trailing_newline,
};
use handlebars::{
    Context, Handlebars, Helper, HelperDef, HelperResult, JsonTruthy, Output, RenderContext,
    RenderError, RenderErrorReason, handlebars_helper, html_escape,
};
use polyglot_log::debug;
use polyglot_xss::{HtmlSanitizer, SanitizerPolicy};
use serde_json::Value as Json;

handlebars_helper!(eq: |a: Json, b: Json| a == b);
handlebars_helper!(ne: |a: Json, b: Json| a != b);
handlebars_helper!(not: |v: Json| !v.is_truthy(false));

/// Register all built-in helpers
pub fn register_builtin_helpers(handlebars: &mut Handlebars<'_>, policy: &SanitizerPolicy) {
    handlebars.register_helper("eq", Box::new(eq));
    handlebars.register_helper("ne", Box::new(ne));
    handlebars.register_helper("not", Box::new(not));
    handlebars.register_helper("t", Box::new(TranslateHelper));
    handlebars.register_helper("sanitize", Box::new(SanitizeHelper::new(policy)));
    handlebars.register_helper("markdown", Box::new(MarkdownHelper));
}

/// Resolve a dotted key to a string leaf of the render data.
pub fn lookup_text<'a>(data: &'a Json, key: &str) -> Option<&'a str> {
    key.split('.')
        .try_fold(data, |node, segment| node.get(segment))?
        .as_str()
}

/// Resolve a key, falling back to the key itself.
fn translate<'a>(data: &'a Json, key: &'a str) -> &'a str {
    lookup_text(data, key).unwrap_or_else(|| {
        debug!(
            target: "polyglot::render",
            "[{}] no translation for '{}'",
            lookup_text(data, "locale.code").unwrap_or("?"),
            key
        );
        key
    })
}

fn key_param<'a>(h: &'a Helper<'_>, name: &'static str) -> Result<&'a str, RenderError> {
    let param = h
        .param(0)
        .ok_or(RenderErrorReason::ParamNotFoundForIndex(name, 0))?;
    param
        .value()
        .as_str()
        .ok_or_else(|| RenderErrorReason::InvalidParamType("string").into())
}

/// Translated text, HTML-escaped: `{{t "nav.home"}}`
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslateHelper;

impl HelperDef for TranslateHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let key = key_param(h, "t")?;
        out.write(&html_escape(translate(ctx.data(), key)))?;
        Ok(())
    }
}

/// Translated HTML passed through the allowlist sanitizer: `{{sanitize "intro"}}`
#[derive(Debug, Clone)]
pub struct SanitizeHelper {
    sanitizer: HtmlSanitizer,
}

impl SanitizeHelper {
    /// Create the helper with the given allowlist
    pub fn new(policy: &SanitizerPolicy) -> Self {
        Self {
            sanitizer: HtmlSanitizer::from_policy(policy),
        }
    }
}

impl HelperDef for SanitizeHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let key = key_param(h, "sanitize")?;
        let clean = self
            .sanitizer
            .sanitize(translate(ctx.data(), key))
            .map_err(|e| RenderErrorReason::Other(e.to_string()))?;
        out.write(&clean)?;
        Ok(())
    }
}

/// Translated Markdown rendered to HTML: `{{markdown "about.body"}}`
///
/// An absent or empty entry renders the catalog's `markdown.placeholder`
/// in emphasis instead.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownHelper;

impl HelperDef for MarkdownHelper {
    fn call<'reg: 'rc, 'rc>(
        &self,
        h: &Helper<'rc>,
        _: &'reg Handlebars<'reg>,
        ctx: &'rc Context,
        _: &mut RenderContext<'reg, 'rc>,
        out: &mut dyn Output,
    ) -> HelperResult {
        let key = key_param(h, "markdown")?;
        let data = ctx.data();

        let html = match lookup_text(data, key).filter(|text| !text.is_empty()) {
            Some(text) => render_markdown(strip_single_trailing_newline(text)),
            None => {
                let placeholder = PLACEHOLDER_PATH
                    .iter()
                    .try_fold(data, |node, segment| node.get(*segment))
                    .and_then(Json::as_str);
                debug!(
                    target: "polyglot::render",
                    "[{}] no markdown for '{}', using placeholder",
                    lookup_text(data, "locale.code").unwrap_or("?"),
                    key
                );
                render_markdown(&placeholder_markdown(placeholder))
            }
        };

        out.write(&html)?;
        Ok(())
    }
}
