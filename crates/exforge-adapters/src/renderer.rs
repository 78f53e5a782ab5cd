//! Strict template rendering.
//!
//! Two constructs, nothing else:
//!
//! - `{{key}}`: interpolate the context value for `key`.
//! - `{{#key}}...{{/key}}`: render the block only when the context value
//!   for `key` is non-empty. Keys inside a suppressed block are never
//!   resolved.
//!
//! Rendering is strict: a referenced key that was never assembled into
//! the context is a [`MissingContextKey`] error rather than a silent
//! empty substitution, so context-assembly bugs surface immediately.
//! It is also pure: same source + same context give byte-identical
//! output, with no timestamps or other hidden inputs.
//!
//! A `{{` that does not form a well-formed tag (bad key characters, no
//! closing `}}`) is passed through as literal text; template sources are
//! compiled in and covered by tests, so this only matters for text that
//! legitimately contains doubled braces.
//!
//! Block markers that sit on their own line swallow the newline that
//! follows them, so suppressed blocks do not leave blank lines behind.

use exforge_core::{
    application::{ApplicationError, ports::TemplateRenderer},
    domain::TemplateContext,
    error::ExforgeResult,
};
use tracing::trace;

/// Production renderer implementing the strict grammar above.
#[derive(Debug, Clone, Copy, Default)]
pub struct StrictRenderer;

impl StrictRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for StrictRenderer {
    fn render(
        &self,
        template_id: &str,
        source: &str,
        context: &TemplateContext,
    ) -> ExforgeResult<String> {
        trace!(template = template_id, "rendering");
        let mut out = String::with_capacity(source.len());
        render_into(template_id, source, context, &mut out)?;
        Ok(out)
    }
}

fn render_into(
    template_id: &str,
    mut rest: &str,
    ctx: &TemplateContext,
    out: &mut String,
) -> ExforgeResult<()> {
    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after_open = &rest[start + 2..];

        let Some(tag_end) = after_open.find("}}") else {
            // No closing braces anywhere: literal text from here on.
            out.push_str(&rest[start..]);
            return Ok(());
        };
        let tag = &after_open[..tag_end];
        let after_tag = &after_open[tag_end + 2..];

        if let Some(key) = tag.strip_prefix('#') {
            if !is_key(key) {
                out.push_str("{{");
                rest = after_open;
                continue;
            }
            let close = format!("{{{{/{key}}}}}");
            let Some(close_pos) = after_tag.find(close.as_str()) else {
                // Unclosed block: literal.
                out.push_str("{{");
                rest = after_open;
                continue;
            };

            let body = strip_leading_newline(&after_tag[..close_pos]);
            let value = lookup(template_id, ctx, key)?;
            if !value.is_empty() {
                render_into(template_id, body, ctx, out)?;
            }
            rest = strip_leading_newline(&after_tag[close_pos + close.len()..]);
        } else if is_key(tag) {
            out.push_str(lookup(template_id, ctx, tag)?);
            rest = after_tag;
        } else {
            // Not a tag (e.g. doubled braces in the source text).
            out.push_str("{{");
            rest = after_open;
        }
    }
    out.push_str(rest);
    Ok(())
}

fn lookup<'c>(
    template_id: &str,
    ctx: &'c TemplateContext,
    key: &str,
) -> ExforgeResult<&'c str> {
    ctx.get(key).ok_or_else(|| {
        ApplicationError::MissingContextKey {
            template: template_id.to_string(),
            key: key.to_string(),
        }
        .into()
    })
}

fn is_key(s: &str) -> bool {
    !s.is_empty()
        && s.chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
}

fn strip_leading_newline(s: &str) -> &str {
    s.strip_prefix('\n').unwrap_or(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use exforge_core::error::ExforgeError;

    fn render(source: &str, ctx: &TemplateContext) -> ExforgeResult<String> {
        StrictRenderer::new().render("test", source, ctx)
    }

    fn ctx() -> TemplateContext {
        TemplateContext::new()
            .with("app", "hello_world")
            .with("module", "HelloWorld")
            .with("umbrella", "")
    }

    #[test]
    fn interpolates_keys() {
        let out = render("defmodule {{module}} do # :{{app}}", &ctx()).unwrap();
        assert_eq!(out, "defmodule HelloWorld do # :hello_world");
    }

    #[test]
    fn missing_key_is_an_error_not_empty() {
        let err = render("hello {{nope}}", &ctx()).unwrap_err();
        assert_eq!(
            err,
            ExforgeError::Application(ApplicationError::MissingContextKey {
                template: "test".into(),
                key: "nope".into(),
            })
        );
    }

    #[test]
    fn falsy_conditional_block_disappears() {
        let out = render("a\n{{#umbrella}}\nhidden {{missing_key}}\n{{/umbrella}}\nb\n", &ctx())
            .unwrap();
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn truthy_conditional_block_renders_with_interpolation() {
        let ctx = ctx().with("umbrella", "true");
        let out = render("a\n{{#umbrella}}\nin {{module}}\n{{/umbrella}}\nb\n", &ctx).unwrap();
        assert_eq!(out, "a\nin HelloWorld\nb\n");
    }

    #[test]
    fn inline_conditional_keeps_surrounding_text() {
        let single = render("[:logger{{#umbrella}}, :cowboy{{/umbrella}}]", &ctx()).unwrap();
        assert_eq!(single, "[:logger]");

        let multi = ctx().with("umbrella", "yes");
        let both = render("[:logger{{#umbrella}}, :cowboy{{/umbrella}}]", &multi).unwrap();
        assert_eq!(both, "[:logger, :cowboy]");
    }

    #[test]
    fn conditional_key_itself_must_exist() {
        let err = render("{{#nope}}x{{/nope}}", &ctx()).unwrap_err();
        assert!(matches!(
            err,
            ExforgeError::Application(ApplicationError::MissingContextKey { .. })
        ));
    }

    #[test]
    fn rendering_is_deterministic() {
        let ctx = ctx().with("umbrella", "true").with("extra", "v");
        let source = "x {{module}} {{#umbrella}}{{extra}}{{/umbrella}} y";
        assert_eq!(render(source, &ctx).unwrap(), render(source, &ctx).unwrap());
    }

    #[test]
    fn single_braces_pass_through() {
        let out = render("{:cowboy, \"~> 1.0\"} and #{interp}", &ctx()).unwrap();
        assert_eq!(out, "{:cowboy, \"~> 1.0\"} and #{interp}");
    }

    #[test]
    fn spaced_module_tuple_renders() {
        // mix.exs writes `mod: { {{module}}, []}` to keep the tag parseable.
        let out = render("mod: { {{module}}, []}", &ctx()).unwrap();
        assert_eq!(out, "mod: { HelloWorld, []}");
    }

    #[test]
    fn malformed_tags_are_literal() {
        assert_eq!(render("a {{not a key}} b", &ctx()).unwrap(), "a {{not a key}} b");
        assert_eq!(render("trailing {{open", &ctx()).unwrap(), "trailing {{open");
    }
}
