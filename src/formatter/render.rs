//! Block renderer: turns classified lines into `h3`/`p`/`ul`/`li` markup.

use super::classify::{Line, Segment};

/// Escapes text for use as HTML element content.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            other => out.push(other),
        }
    }
    out
}

fn heading_html(text: &str) -> String {
    format!("<h3>{}</h3>", escape_html(text))
}

#[derive(Debug, Default)]
enum Open {
    #[default]
    Nothing,
    Paragraph(String),
    List(Vec<String>),
}

/// Streaming renderer. At most one paragraph or list is open at a time.
#[derive(Debug, Default)]
pub struct Renderer {
    out: String,
    open: Open,
}

impl Renderer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: Line) {
        match line {
            // Blank lines end paragraphs but not lists.
            Line::Blank => {
                if matches!(self.open, Open::Paragraph(_)) {
                    self.close();
                }
            }
            Line::StarItem(segments) | Line::DigitItem(segments) => self.push_item(&segments),
            Line::Heading(segments) | Line::Text(segments) => self.push_flow(segments),
        }
    }

    #[must_use]
    pub fn finish(mut self) -> String {
        self.close();
        self.out
    }

    fn push_item(&mut self, segments: &[Segment]) {
        if !matches!(self.open, Open::List(_)) {
            self.close();
            self.open = Open::List(Vec::new());
        }

        let item: String = segments
            .iter()
            .map(|segment| match segment {
                Segment::Text(text) => escape_html(text),
                Segment::Heading(text) => heading_html(text),
            })
            .collect();
        let item = item.trim();

        if let Open::List(items) = &mut self.open
            && !item.is_empty()
        {
            items.push(item.to_string());
        }
    }

    fn push_flow(&mut self, segments: Vec<Segment>) {
        if matches!(self.open, Open::List(_)) {
            self.close();
        }

        for segment in segments {
            match segment {
                Segment::Heading(text) => {
                    self.close();
                    self.out.push_str(&heading_html(&text));
                }
                Segment::Text(text) => self.append_text(&text),
            }
        }
    }

    fn append_text(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }

        if let Open::Paragraph(buf) = &mut self.open {
            if !buf.is_empty() {
                buf.push(' ');
            }
            buf.push_str(&escape_html(text));
        } else {
            self.open = Open::Paragraph(escape_html(text));
        }
    }

    fn close(&mut self) {
        match std::mem::take(&mut self.open) {
            Open::Nothing => {}
            Open::Paragraph(buf) => {
                if !buf.is_empty() {
                    self.out.push_str("<p>");
                    self.out.push_str(&buf);
                    self.out.push_str("</p>");
                }
            }
            Open::List(items) => {
                if !items.is_empty() {
                    self.out.push_str("<ul>");
                    for item in items {
                        self.out.push_str("<li>");
                        self.out.push_str(&item);
                        self.out.push_str("</li>");
                    }
                    self.out.push_str("</ul>");
                }
            }
        }
    }
}
