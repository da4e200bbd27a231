//! Markdown rendering for assistant replies and report text.

use pulldown_cmark::{html, Event, Options, Parser};

/// Render markdown (tables and strikethrough enabled) to an HTML string.
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_plain_paragraph() {
        let out = render_markdown("Sal is a hardwood.");
        assert_eq!(out.trim(), "<p>Sal is a hardwood.</p>");
    }

    #[test]
    fn renders_tables() {
        let out = render_markdown("| Species | Density |\n|---|---|\n| Teak | 655 |");
        assert!(out.contains("<table>"));
        assert!(out.contains("<td>Teak</td>"));
    }

    #[test]
    fn drops_raw_html_from_model_output() {
        let out = render_markdown("before <script>alert(1)</script> after");
        assert!(!out.contains("<script>"));
        assert!(out.contains("before"));
        assert!(out.contains("after"));
    }
}
