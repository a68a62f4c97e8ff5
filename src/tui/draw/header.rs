//! Header: logo / spinner, title, signed-in user badge.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use std::time::Instant;

use super::super::app::App;
use super::super::constants::{LOGO_IDLE, LOGO_THINKING, TITLE};

/// Start time for the spinner animation phase.
pub(crate) static HEADER_START: std::sync::OnceLock<Instant> = std::sync::OnceLock::new();

/// Max width for the user badge; longer roll numbers are truncated with "…".
const BADGE_WIDTH: u16 = 24;

/// Current spinner frame, advancing every 80ms.
pub(crate) fn spinner_frame() -> &'static str {
    let start = HEADER_START.get_or_init(Instant::now);
    let phase = start.elapsed().as_millis() as usize;
    LOGO_THINKING[(phase / 80) % LOGO_THINKING.len()]
}

pub(crate) fn is_working(app: &App) -> bool {
    app.busy || app.transcript.is_loading()
}

fn badge_text(name: &str, initial: &str) -> String {
    let max_len = BADGE_WIDTH as usize - 5;
    let name = if name.chars().count() > max_len {
        let head: String = name.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", head)
    } else {
        name.to_string()
    };
    format!("{} [{}]", name, initial)
}

pub(crate) fn draw_header(f: &mut Frame, app: &mut App, area: Rect, accent: Color) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(0),
            Constraint::Length(BADGE_WIDTH),
        ])
        .split(area);

    let logo_symbol = if is_working(app) {
        spinner_frame()
    } else {
        LOGO_IDLE
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("{} ", logo_symbol),
            Style::default().fg(accent),
        ))),
        header_chunks[0],
    );

    let title = Line::from(Span::styled(
        TITLE,
        Style::default().fg(accent).add_modifier(Modifier::BOLD),
    ));
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), area);

    let mut badge = vec![Span::styled(
        badge_text(app.session.display_name(), &app.session.initial()),
        Style::default().fg(Color::DarkGray),
    )];
    if app.session.data_loaded() {
        badge.insert(0, Span::styled("● ", Style::default().fg(accent)));
    }
    f.render_widget(
        Paragraph::new(Line::from(badge)).alignment(Alignment::Right),
        header_chunks[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_truncates_long_names() {
        assert_eq!(badge_text("21CS042", "2"), "21CS042 [2]");
        let long = "X".repeat(40);
        let badge = badge_text(&long, "X");
        assert!(badge.contains('…'));
        assert!(badge.chars().count() <= BADGE_WIDTH as usize);
    }
}
