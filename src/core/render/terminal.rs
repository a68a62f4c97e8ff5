//! Plain or ANSI-styled text output for stdout (single prompt mode, `format`).

use std::borrow::Cow;

use crossterm::style::{Color, Stylize, style};

use crate::core::format::{DisplayBlock, InlineSpan, ListMarker};

/// Accent green (#98FB98), same as the TUI.
const ACCENT: Color = Color::Rgb {
    r: 152,
    g: 251,
    b: 152,
};

/// Drop control characters (C0, DEL, C1) except tab, so reply text cannot
/// emit escape sequences of its own.
pub fn strip_controls(text: &str) -> Cow<'_, str> {
    if text.chars().any(|c| c.is_control() && c != '\t') {
        Cow::Owned(
            text.chars()
                .filter(|&c| !c.is_control() || c == '\t')
                .collect(),
        )
    } else {
        Cow::Borrowed(text)
    }
}

fn push_span(span: &InlineSpan, styled: bool, out: &mut String) {
    for run in span.runs() {
        let text = strip_controls(&run.text);
        if !styled || run.style.is_plain() {
            out.push_str(&text);
            continue;
        }
        let mut content = style(&*text);
        if run.style.strong {
            content = content.bold();
        }
        if run.style.emphasis {
            content = content.italic();
        }
        if run.style.code {
            content = content.with(ACCENT);
        }
        out.push_str(&content.to_string());
    }
}

/// Render blocks one line each. With `styled` off the output has no escape codes.
pub fn render_terminal(blocks: &[DisplayBlock], styled: bool) -> String {
    let mut lines = Vec::with_capacity(blocks.len());
    for block in blocks {
        let mut line = String::new();
        match block {
            DisplayBlock::Break => {}
            DisplayBlock::ListItem { marker, content } => {
                let prefix = match marker {
                    ListMarker::Bullet => "• ".to_string(),
                    ListMarker::Number(n) => format!("{}. ", strip_controls(n)),
                };
                if styled {
                    line.push_str(&prefix.with(ACCENT).to_string());
                } else {
                    line.push_str(&prefix);
                }
                push_span(content, styled, &mut line);
            }
            DisplayBlock::Header { text } => {
                let text = strip_controls(text);
                if styled {
                    line.push_str(&(&*text).with(ACCENT).bold().to_string());
                } else {
                    line.push_str(&text);
                }
            }
            DisplayBlock::Text { content } => push_span(content, styled, &mut line),
        }
        lines.push(line);
    }
    lines.join("\n")
}
