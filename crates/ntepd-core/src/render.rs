//! Markdown preview rendering
//!
//! The preview runs synchronously on every content edit; only the save is
//! debounced. Empty content renders the placeholder guidance through the
//! same markdown transform, so the preview never shows raw placeholder text.

use pulldown_cmark::{html, Event, Options, Parser};

use crate::draft::PLACEHOLDER_TEXT;

/// Render the editor preview for the current body text.
///
/// Whitespace-only input and the placeholder sentinel both render the
/// sentinel itself, so `render_preview("")` and
/// `render_preview(PLACEHOLDER_TEXT)` produce identical output.
#[must_use]
pub fn render_preview(text: &str) -> String {
    let source = if text.trim().is_empty() || text == PLACEHOLDER_TEXT {
        PLACEHOLDER_TEXT
    } else {
        text
    };
    markdown_to_html(source)
}

/// Convert markdown source to a sanitized HTML fragment.
///
/// Raw HTML events are demoted to text so the parser's writer escapes them;
/// everything the user types ends up entity-encoded rather than live markup.
#[must_use]
pub fn markdown_to_html(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(source, options).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });

    let mut output = String::new();
    html::push_html(&mut output, parser);
    output
}
