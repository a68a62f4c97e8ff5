//! Bottom bar: API host on left, shortcuts on right.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::super::super::app::{App, Screen};
use super::super::super::shortcuts::labels;

/// Draw the bottom bar with the backend host and keyboard shortcuts.
pub(crate) fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(1), Constraint::Min(60)])
        .split(area);

    let host = app.api_host.as_str();
    let max_len = chunks[0].width as usize;
    let host_display = if host.chars().count() > max_len && max_len > 2 {
        let head: String = host.chars().take(max_len - 1).collect();
        format!("{}…", head)
    } else {
        host.to_string()
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            host_display,
            Style::default().fg(Color::DarkGray),
        ))),
        chunks[0],
    );

    let shortcuts = match app.screen {
        Screen::Login => labels::login_bar(),
        Screen::Chat => labels::chat_bar(app.busy),
    };
    f.render_widget(
        Paragraph::new(shortcuts).alignment(Alignment::Right),
        chunks[1],
    );
}
