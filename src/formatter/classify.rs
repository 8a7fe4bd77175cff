//! Line classification for model output.
//!
//! Each raw line is first split into inline segments (plain text and `**bold**`
//! heading spans), then claimed by the first rule that applies, in order:
//! heading-led, star bullet, digit bullet, plain text.

use once_cell::sync::Lazy;
use regex::Regex;

static HEADING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.*?)\*\*").expect("static regex compile"));

static DIGIT_BULLET_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]\. ").expect("static regex compile"));

const STAR_BULLET: &str = "* ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Heading(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    /// Empty or whitespace only.
    Blank,
    /// Starts with a `**heading**` span.
    Heading(Vec<Segment>),
    /// `* item`
    StarItem(Vec<Segment>),
    /// `1. item`
    DigitItem(Vec<Segment>),
    Text(Vec<Segment>),
}

impl Line {
    #[must_use]
    pub fn is_list_item(&self) -> bool {
        matches!(self, Line::StarItem(_) | Line::DigitItem(_))
    }
}

/// Splits one line into text and heading segments. Empty headings are dropped.
#[must_use]
pub fn split_segments(line: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut last = 0;

    for caps in HEADING_RE.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            segments.push(Segment::Text(line[last..whole.start()].to_string()));
        }
        let heading = inner.as_str().trim();
        if !heading.is_empty() {
            segments.push(Segment::Heading(heading.to_string()));
        }
        last = whole.end();
    }

    if last < line.len() {
        segments.push(Segment::Text(line[last..].to_string()));
    }

    segments
}

#[must_use]
pub fn classify_line(raw: &str) -> Line {
    let line = raw.trim_start();
    if line.trim_end().is_empty() {
        return Line::Blank;
    }

    if HEADING_RE.find(line).is_some_and(|m| m.start() == 0) {
        return Line::Heading(split_segments(line));
    }

    if let Some(rest) = line.strip_prefix(STAR_BULLET) {
        return Line::StarItem(split_segments(rest));
    }

    if let Some(m) = DIGIT_BULLET_RE.find(line) {
        return Line::DigitItem(split_segments(&line[m.end()..]));
    }

    Line::Text(split_segments(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Segment {
        Segment::Text(s.to_string())
    }

    fn heading(s: &str) -> Segment {
        Segment::Heading(s.to_string())
    }

    #[test]
    fn splits_bold_spans_non_greedily() {
        assert_eq!(
            split_segments("a **b** c **d**"),
            vec![text("a "), heading("b"), text(" c "), heading("d")]
        );
    }

    #[test]
    fn unclosed_bold_stays_text() {
        assert_eq!(split_segments("**open only"), vec![text("**open only")]);
    }

    #[test]
    fn empty_heading_is_dropped() {
        assert_eq!(split_segments("x****y"), vec![text("x"), text("y")]);
    }

    #[test]
    fn blank_lines() {
        assert_eq!(classify_line(""), Line::Blank);
        assert_eq!(classify_line("   \t"), Line::Blank);
    }

    #[test]
    fn heading_claims_line_before_bullets() {
        assert_eq!(
            classify_line("**1. Definition**"),
            Line::Heading(vec![heading("1. Definition")])
        );
        assert_eq!(
            classify_line("  **Tips** for you"),
            Line::Heading(vec![heading("Tips"), text(" for you")])
        );
    }

    #[test]
    fn star_bullet_beats_digit_bullet() {
        assert_eq!(
            classify_line("* 1. nested looking"),
            Line::StarItem(vec![text("1. nested looking")])
        );
    }

    #[test]
    fn bullets_may_contain_headings() {
        assert_eq!(
            classify_line("  * **Tip:** count the parts"),
            Line::StarItem(vec![heading("Tip:"), text(" count the parts")])
        );
    }

    #[test]
    fn digit_bullets_take_a_single_digit() {
        assert_eq!(
            classify_line("3. third"),
            Line::DigitItem(vec![text("third")])
        );
        assert_eq!(
            classify_line("10. tenth"),
            Line::Text(vec![text("10. tenth")])
        );
        assert_eq!(classify_line("3.no space"), Line::Text(vec![text("3.no space")]));
    }

    #[test]
    fn non_ascii_digits_are_not_bullets() {
        assert_eq!(classify_line("３. third"), Line::Text(vec![text("３. third")]));
        assert_eq!(classify_line("٣. third"), Line::Text(vec![text("٣. third")]));
    }

    #[test]
    fn single_asterisk_emphasis_is_text() {
        assert_eq!(
            classify_line("*really* important"),
            Line::Text(vec![text("*really* important")])
        );
    }
}
