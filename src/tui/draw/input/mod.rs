//! Input section: suggestion chips, input box, disclaimer, bottom bar.

mod bar;

pub(crate) use bar::draw as draw_bottom_bar;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::suggestions::suggested_questions;

use super::super::app::App;
use super::super::constants::{ACCENT, DISCLAIMER};

/// One line of chips: "1 📊 What is my overall attendance?  2 …", clipped by the widget.
fn suggestion_line(disabled: bool) -> Line<'static> {
    let (key_style, label_style) = if disabled {
        (Style::default().fg(Color::DarkGray), Style::default().fg(Color::DarkGray))
    } else {
        (Style::default().fg(ACCENT), Style::default().fg(Color::Gray))
    };
    let mut spans = Vec::new();
    for (i, label) in suggested_questions().iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{} ", i + 1), key_style));
        spans.push(Span::styled(label.clone(), label_style));
    }
    Line::from(spans)
}

pub(crate) fn draw_input_section(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(Paragraph::new(suggestion_line(app.busy)), chunks[0]);

    let border_color = if app.busy { Color::DarkGray } else { ACCENT };
    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner_width = chunks[1].width.saturating_sub(2) as usize;
    let content = if app.input.is_empty() {
        Line::from(Span::styled(
            "Ask about your attendance, marks, or performance...",
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        // Keep the end of long input visible.
        let count = app.input.chars().count();
        let shown: String = app
            .input
            .chars()
            .skip(count.saturating_sub(inner_width.saturating_sub(1)))
            .collect();
        Line::from(vec![
            Span::raw(shown),
            Span::styled("▌", Style::default().fg(ACCENT)),
        ])
    };
    f.render_widget(Paragraph::new(content).block(input_block), chunks[1]);

    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            DISCLAIMER,
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(ratatui::layout::Alignment::Center),
        chunks[2],
    );

    draw_bottom_bar(f, app, chunks[3]);
}
