//! Display blocks to ratatui lines, wrapped to the history width.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use textwrap::core::display_width;

use crate::core::format::{DisplayBlock, InlineSpan, ListMarker, SpanStyle};
use crate::core::render::strip_controls;

use super::constants::{ACCENT, ACCENT_SECONDARY};

/// Map inline flags onto a base style.
fn run_style(base: Style, style: SpanStyle) -> Style {
    let mut s = base;
    if style.strong {
        s = s.add_modifier(Modifier::BOLD);
    }
    if style.emphasis {
        s = s.add_modifier(Modifier::ITALIC);
    }
    if style.code {
        s = s.fg(ACCENT_SECONDARY);
    }
    s
}

/// A word made of one or more styled pieces with no whitespace between them.
#[derive(Default)]
struct Word {
    pieces: Vec<(String, Style)>,
    width: usize,
    /// Whitespace came before this word.
    spaced: bool,
}

impl Word {
    fn push(&mut self, c: char, style: Style) {
        match self.pieces.last_mut() {
            Some((text, s)) if *s == style => text.push(c),
            _ => self.pieces.push((c.to_string(), style)),
        }
        self.width += display_width(c.encode_utf8(&mut [0; 4]));
    }
}

fn split_words(runs: &[(String, Style)]) -> Vec<Word> {
    let mut words = Vec::new();
    let mut current = Word::default();
    let mut pending_space = false;
    for (text, style) in runs {
        for c in text.chars() {
            if c.is_whitespace() {
                if !current.pieces.is_empty() {
                    words.push(std::mem::take(&mut current));
                }
                pending_space = true;
                continue;
            }
            if current.pieces.is_empty() {
                current.spaced = pending_space;
                pending_space = false;
            }
            current.push(c, *style);
        }
    }
    if !current.pieces.is_empty() {
        words.push(current);
    }
    words
}

/// Greedy word wrap over styled runs. Words wider than `width` are broken
/// at character boundaries. Always returns at least one (possibly empty) line.
pub(crate) fn wrap_runs(runs: &[(String, Style)], width: usize) -> Vec<Vec<Span<'static>>> {
    let width = width.max(1);
    let mut lines: Vec<Vec<Span<'static>>> = Vec::new();
    let mut line: Vec<Span<'static>> = Vec::new();
    let mut used = 0usize;

    for word in split_words(runs) {
        let gap = usize::from(word.spaced && used > 0);
        if used > 0 && used + gap + word.width > width {
            lines.push(std::mem::take(&mut line));
            used = 0;
        } else if gap == 1 {
            line.push(Span::raw(" "));
            used += 1;
        }
        if word.width <= width.saturating_sub(used) {
            used += word.width;
            line.extend(word.pieces.into_iter().map(|(t, s)| Span::styled(t, s)));
            continue;
        }
        // Too long for any line: hard break.
        for (text, style) in word.pieces {
            let mut chunk = String::new();
            for c in text.chars() {
                let w = display_width(c.encode_utf8(&mut [0; 4]));
                if used + w > width && used > 0 {
                    if !chunk.is_empty() {
                        line.push(Span::styled(std::mem::take(&mut chunk), style));
                    }
                    lines.push(std::mem::take(&mut line));
                    used = 0;
                }
                chunk.push(c);
                used += w;
            }
            if !chunk.is_empty() {
                line.push(Span::styled(chunk, style));
            }
        }
    }
    lines.push(line);
    lines
}

fn span_runs(span: &InlineSpan, base: Style) -> Vec<(String, Style)> {
    span.runs()
        .iter()
        .map(|r| (strip_controls(&r.text).into_owned(), run_style(base, r.style)))
        .collect()
}

/// Emit wrapped lines with `prefix` on the first and matching indent after.
fn push_prefixed(
    out: &mut Vec<Line<'static>>,
    prefix: Span<'static>,
    runs: &[(String, Style)],
    width: usize,
) {
    let indent = display_width(&prefix.content);
    let mut first = Some(prefix);
    for spans in wrap_runs(runs, width.saturating_sub(indent)) {
        let lead = first
            .take()
            .unwrap_or_else(|| Span::raw(" ".repeat(indent)));
        let mut all = Vec::with_capacity(spans.len() + 1);
        all.push(lead);
        all.extend(spans);
        out.push(Line::from(all));
    }
}

/// Render blocks to lines no wider than `width` columns, `base` applied to plain text.
pub(crate) fn block_lines(blocks: &[DisplayBlock], width: usize, base: Style) -> Vec<Line<'static>> {
    let mut out = Vec::new();
    for block in blocks {
        match block {
            DisplayBlock::Break => out.push(Line::default()),
            DisplayBlock::ListItem { marker, content } => {
                let prefix = match marker {
                    ListMarker::Bullet => "  • ".to_string(),
                    ListMarker::Number(n) => format!("  {}. ", strip_controls(n)),
                };
                let prefix = Span::styled(prefix, Style::default().fg(ACCENT));
                push_prefixed(&mut out, prefix, &span_runs(content, base), width);
            }
            DisplayBlock::Header { text } => {
                let style = base.fg(ACCENT).add_modifier(Modifier::BOLD);
                for spans in wrap_runs(&[(strip_controls(text).into_owned(), style)], width) {
                    out.push(Line::from(spans));
                }
            }
            DisplayBlock::Text { content } => {
                for spans in wrap_runs(&span_runs(content, base), width) {
                    out.push(Line::from(spans));
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format::format_message;

    fn text_of(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn plain(s: &str) -> Vec<(String, Style)> {
        vec![(s.to_string(), Style::default())]
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let lines = wrap_runs(&plain("one two three four"), 9);
        let texts: Vec<String> = lines
            .iter()
            .map(|l| l.iter().map(|s| s.content.as_ref()).collect())
            .collect();
        assert_eq!(texts, vec!["one two", "three", "four"]);
    }

    #[test]
    fn long_word_is_hard_broken() {
        let lines = wrap_runs(&plain("abcdefgh"), 3);
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn punctuation_stays_with_styled_word() {
        let bold = Style::default().add_modifier(Modifier::BOLD);
        let runs = vec![
            ("aaaa ".to_string(), Style::default()),
            ("bold".to_string(), bold),
            (",".to_string(), Style::default()),
        ];
        let lines = wrap_runs(&runs, 8);
        assert_eq!(lines.len(), 2);
        let second: String = lines[1].iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(second, "bold,");
        assert_eq!(lines[1][0].style, bold);
    }

    #[test]
    fn empty_input_gives_one_empty_line() {
        let lines = wrap_runs(&plain(""), 10);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].is_empty());
    }

    #[test]
    fn list_items_get_prefix_and_hanging_indent() {
        let blocks = format_message("- alpha beta gamma");
        let lines = block_lines(&blocks, 14, Style::default());
        assert_eq!(text_of(&lines[0]), "  • alpha beta");
        assert_eq!(text_of(&lines[1]), "    gamma");

        let blocks = format_message("12. first");
        let lines = block_lines(&blocks, 40, Style::default());
        assert_eq!(text_of(&lines[0]), "  12. first");
    }

    #[test]
    fn header_is_accent_bold() {
        let lines = block_lines(&format_message("Summary:"), 40, Style::default());
        let span = &lines[0].spans[0];
        assert_eq!(span.content, "Summary:");
        assert_eq!(span.style.fg, Some(ACCENT));
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn inline_styles_map_to_modifiers() {
        let lines = block_lines(&format_message("**b** *i* `c`"), 40, Style::default());
        let spans = &lines[0].spans;
        let find = |t: &str| spans.iter().find(|s| s.content == t).unwrap().style;
        assert!(find("b").add_modifier.contains(Modifier::BOLD));
        assert!(find("i").add_modifier.contains(Modifier::ITALIC));
        assert_eq!(find("c").fg, Some(ACCENT_SECONDARY));
    }

    #[test]
    fn control_characters_never_reach_spans() {
        let blocks = format_message("hi \u{1b}[2J **b\u{7}old**\nTitle\u{1b}]52;c;eA==\u{7}:");
        let lines = block_lines(&blocks, 80, Style::default());
        for line in &lines {
            for span in &line.spans {
                assert!(!span.content.chars().any(char::is_control), "{:?}", span.content);
            }
        }
        assert_eq!(text_of(&lines[0]), "hi [2J bold");
        assert_eq!(text_of(&lines[1]), "Title]52;c;eA==:");
    }

    #[test]
    fn breaks_become_empty_lines() {
        let lines = block_lines(&format_message("a\n\nb"), 40, Style::default());
        assert_eq!(lines.len(), 3);
        assert!(text_of(&lines[1]).is_empty());
    }
}
