//! Message formatting: classify reply lines into display blocks.
//!
//! The backend's AI replies use a loose markdown subset (bullets, numbered
//! items, `Label:` headers, inline emphasis and code). [`format_message`]
//! turns a reply into [`DisplayBlock`]s; renderers in `core::render` and the
//! TUI decide how each block looks and handle escaping.

mod inline;

pub use inline::{InlineSpan, SpanRun, SpanStyle, format_inline};

use std::sync::LazyLock;

use regex::Regex;

/// Lines ending in `:` shorter than this (in characters) render as headers.
pub const HEADER_MAX_CHARS: usize = 100;

static BULLET_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[*\-•]\s+").expect("bullet prefix regex"));
static NUMBER_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([0-9]+)\.\s+(.+)").expect("number prefix regex"));

/// Marker shown in front of a list item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListMarker {
    Bullet,
    /// Digits as written in the reply (`"3"`, `"01"`).
    Number(String),
}

/// One rendered unit, derived from exactly one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayBlock {
    /// Blank-line spacer.
    Break,
    ListItem {
        marker: ListMarker,
        content: InlineSpan,
    },
    /// Verbatim line, inline markers are not expanded.
    Header { text: String },
    Text { content: InlineSpan },
}

/// Format a raw reply into display blocks, one per `\n`-separated line.
///
/// Never fails. An empty reply yields no blocks.
pub fn format_message(raw: &str) -> Vec<DisplayBlock> {
    if raw.is_empty() {
        return Vec::new();
    }
    raw.split('\n').map(classify_line).collect()
}

/// Classify a single line. Bullet and number prefixes are matched and
/// stripped on the trimmed line, so indented list items are kept.
fn classify_line(line: &str) -> DisplayBlock {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return DisplayBlock::Break;
    }

    if let Some(m) = BULLET_PREFIX.find(trimmed) {
        return DisplayBlock::ListItem {
            marker: ListMarker::Bullet,
            content: format_inline(&trimmed[m.end()..]),
        };
    }

    if let Some(caps) = NUMBER_PREFIX.captures(trimmed) {
        let digits = caps.get(1).map_or("", |m| m.as_str());
        let rest = caps.get(2).map_or("", |m| m.as_str());
        return DisplayBlock::ListItem {
            marker: ListMarker::Number(digits.to_string()),
            content: format_inline(rest),
        };
    }

    if trimmed.ends_with(':') && line.chars().count() < HEADER_MAX_CHARS {
        return DisplayBlock::Header {
            text: line.to_string(),
        };
    }

    DisplayBlock::Text {
        content: format_inline(line),
    }
}

#[cfg(test)]
mod tests;
