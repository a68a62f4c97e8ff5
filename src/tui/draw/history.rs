//! Chat history: message blocks with labelled borders, typing indicator, scrollbar.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};

use crate::core::message::{ChatMessage, Role};

use super::super::app::{App, ScrollPosition};
use super::super::constants::ACCENT_SECONDARY;
use super::super::text::block_lines;
use super::header::spinner_frame;

/// Repeat a character to fill width (approximate; chars may have different display widths).
fn repeat_char(c: char, n: usize) -> String {
    std::iter::repeat_n(c, n).collect()
}

/// Add one message with a "┌─ Label HH:MM ──┐" top border and a bottom border.
fn add_message_block(lines: &mut Vec<Line<'static>>, msg: &ChatMessage, wrap_width: usize) {
    let (label, border_color) = match msg.role {
        Role::User => ("You", Color::DarkGray),
        Role::Assistant => ("Assistant", ACCENT_SECONDARY),
    };
    let border_style = Style::default().fg(border_color);
    let content_width = wrap_width.saturating_sub(4);

    let top_label = format!("┌─ {} {} ", label, msg.sent_at.format("%H:%M"));
    let top_trail_len = wrap_width.saturating_sub(top_label.chars().count() + 1);
    lines.push(Line::from(Span::styled(
        format!("{}{}┐", top_label, repeat_char('─', top_trail_len)),
        border_style,
    )));

    let body = if msg.loading {
        vec![Line::from(vec![
            Span::styled(
                format!("{} ", spinner_frame()),
                Style::default().fg(ACCENT_SECONDARY),
            ),
            Span::styled(
                msg.text.clone(),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])]
    } else {
        block_lines(&msg.blocks(), content_width, Style::default())
    };
    for line in body {
        let mut spans = vec![Span::styled("│ ", border_style)];
        spans.extend(line.spans);
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(Span::styled(
        format!("└{}┘", repeat_char('─', wrap_width.saturating_sub(2))),
        border_style,
    )));
    lines.push(Line::default());
}

pub(crate) fn draw_history(f: &mut Frame, app: &mut App, history_area: Rect) {
    let history_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(history_area);
    let text_area = history_chunks[0];
    let scrollbar_area = history_chunks[1];
    let wrap_width = text_area.width as usize;

    let mut lines: Vec<Line<'static>> = Vec::new();
    for msg in app.transcript.messages() {
        add_message_block(&mut lines, msg, wrap_width);
    }
    if app.busy {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {} ", spinner_frame()),
                Style::default().fg(ACCENT_SECONDARY),
            ),
            Span::styled(
                "Assistant is typing...",
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]));
    }

    let total_lines = lines.len();
    let visible = text_area.height as usize;
    let max_scroll = total_lines.saturating_sub(visible.max(1));
    app.last_max_scroll = max_scroll;
    let scroll_pos = match app.scroll {
        ScrollPosition::Line(n) => n.min(max_scroll),
        ScrollPosition::Bottom => max_scroll,
    };
    let end = (scroll_pos + visible).min(total_lines);
    let visible_lines: Vec<Line> = lines
        .into_iter()
        .skip(scroll_pos)
        .take(end - scroll_pos)
        .collect();

    f.render_widget(Paragraph::new(visible_lines), text_area);

    let mut scrollbar_state = ScrollbarState::default()
        .position(scroll_pos)
        .content_length(total_lines);
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_symbol("█")
        .thumb_style(Style::default().fg(ACCENT_SECONDARY))
        .track_symbol(Some("│"));
    f.render_stateful_widget(scrollbar, scrollbar_area, &mut scrollbar_state);
}
