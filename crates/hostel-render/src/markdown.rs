//! Markdown to HTML conversion.
//!
//! Page bodies are stored as markdown and converted once per request,
//! before template expansion. Conversion is a pure function of the
//! input text.

use pulldown_cmark::{Options, Parser, html};

/// Convert markdown to HTML with GitHub Flavored Markdown extensions.
pub fn to_html(markdown: &str) -> String {
    let options = Options::ENABLE_TABLES
        | Options::ENABLE_STRIKETHROUGH
        | Options::ENABLE_TASKLISTS;
    let parser = Parser::new_ext(markdown, options);
    let mut out = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut out, parser);
    out
}
