//! Markdown to HTML rendering for Q&A bodies.

use pulldown_cmark::{html, Parser};

/// Render CommonMark `source` to an HTML fragment.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new(source);
    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}
