//! Model text to HTML fragment conversion.
//!
//! Only the handful of cues the model is prompted into producing are
//! recognised: `**bold**` spans become `<h3>` headings, `* ` and `1. ` lines
//! become `<li>` items grouped into one `<ul>` per run, and everything else is
//! paragraph text where a blank line starts a new `<p>` and a single newline
//! is a space. This is not a markdown parser.

pub mod classify;
pub mod render;

pub use classify::{Line, Segment, classify_line};
pub use render::{Renderer, escape_html};

/// Converts raw model output into an HTML fragment. Never fails.
#[must_use]
pub fn format_lesson_html(raw: &str) -> String {
    let mut renderer = Renderer::new();
    for line in raw.lines() {
        renderer.push(classify_line(line));
    }
    renderer.finish()
}
