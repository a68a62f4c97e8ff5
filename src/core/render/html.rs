//! HTML output for formatted messages (every text node escaped).

use crate::core::format::{DisplayBlock, InlineSpan, ListMarker, SpanRun};

/// Escape the five HTML-significant characters.
fn escape(s: &str, out: &mut String) {
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
}

fn push_run(run: &SpanRun, out: &mut String) {
    let s = run.style;
    if s.code {
        out.push_str("<code>");
    }
    if s.strong {
        out.push_str("<strong>");
    }
    if s.emphasis {
        out.push_str("<em>");
    }
    escape(&run.text, out);
    if s.emphasis {
        out.push_str("</em>");
    }
    if s.strong {
        out.push_str("</strong>");
    }
    if s.code {
        out.push_str("</code>");
    }
}

fn push_span(span: &InlineSpan, out: &mut String) {
    for run in span.runs() {
        push_run(run, out);
    }
}

/// Render blocks as an HTML fragment wrapped in `<div class="formatted-message">`.
pub fn render_html(blocks: &[DisplayBlock]) -> String {
    let mut out = String::from("<div class=\"formatted-message\">");
    for block in blocks {
        out.push('\n');
        match block {
            DisplayBlock::Break => out.push_str("<br>"),
            DisplayBlock::ListItem { marker, content } => {
                out.push_str("<div class=\"message-list-item\">");
                match marker {
                    ListMarker::Bullet => out.push_str("<span class=\"bullet\">•</span>"),
                    ListMarker::Number(n) => {
                        out.push_str("<span class=\"number\">");
                        escape(n, &mut out);
                        out.push_str(".</span>");
                    }
                }
                out.push_str("<span>");
                push_span(content, &mut out);
                out.push_str("</span></div>");
            }
            DisplayBlock::Header { text } => {
                out.push_str("<div class=\"message-header\">");
                escape(text, &mut out);
                out.push_str("</div>");
            }
            DisplayBlock::Text { content } => {
                out.push_str("<div class=\"message-text\">");
                push_span(content, &mut out);
                out.push_str("</div>");
            }
        }
    }
    out.push_str("\n</div>");
    out
}
