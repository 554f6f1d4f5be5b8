//! Rendering of compile errors as annotated snippets.

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};

use crate::CompileError;
use crate::token::Span;

/// Renders `error` against the expression it came from.
///
/// Spanned errors get a primary annotation pointing at the offending
/// token; the rest fall back to a plain one-liner.
pub fn render_error(source: &str, error: &CompileError, colored: bool) -> String {
    let detail = error.to_string();
    let Some(span) = error.span() else {
        return format!("error: {detail}");
    };
    let span = clamp(span, source.len());

    let renderer = if colored {
        Renderer::styled()
    } else {
        Renderer::plain()
    };

    let report: Vec<Group> = vec![
        Level::ERROR
            .primary_title("invalid regular expression")
            .element(
                Snippet::source(source)
                    .line_start(1)
                    .annotation(AnnotationKind::Primary.span(span).label(&detail)),
            ),
    ];

    format!("{}", renderer.render(&report))
}

fn clamp(span: Span, limit: usize) -> Span {
    let start = span.start.min(limit);
    let end = span.end.min(limit).max(start);
    start..end
}
