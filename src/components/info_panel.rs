//! Info Panel Body
//!
//! Markdown body of the simple panels (booking, reviews, nearby, ...).

use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Render panel markdown to HTML. Tables are used by the prices panel.
pub fn markdown_to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);

    let parser = Parser::new_ext(markdown, options);
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[component]
pub fn InfoPanelBody(
    /// Markdown content
    body: String,
) -> Element {
    let html_content = markdown_to_html(&body);

    rsx! {
        div {
            class: "panel-markdown",
            dangerous_inner_html: "{html_content}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lists_and_tables() {
        let html = markdown_to_html("- **Police:** 100\n\n| a | b |\n|---|---|\n| 1 | 2 |\n");
        assert!(html.contains("<li><strong>Police:</strong> 100</li>"));
        assert!(html.contains("<table>"));
    }
}
