//! Login screen: centered form with roll number, masked password, error line.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::core::render::strip_controls;

use super::super::app::{App, LoginField};
use super::super::constants::{ACCENT, LOGO_IDLE, TITLE};
use super::header::spinner_frame;
use super::input::draw_bottom_bar;

const FORM_WIDTH: u16 = 48;

fn field(f: &mut Frame, area: Rect, title: &str, value: String, focused: bool) {
    let border = if focused { ACCENT } else { Color::DarkGray };
    let mut spans = vec![Span::raw(value)];
    if focused {
        spans.push(Span::styled("▌", Style::default().fg(ACCENT)));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", title))
        .border_style(Style::default().fg(border));
    f.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

pub(crate) fn draw_login(f: &mut Frame, app: &App, area: Rect) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    draw_bottom_bar(f, app, outer[1]);

    let [column] = Layout::horizontal([Constraint::Length(FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(outer[0]);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(2),
        ])
        .flex(Flex::Center)
        .split(column);

    let title = Line::from(vec![
        Span::styled(format!("{} ", LOGO_IDLE), Style::default().fg(ACCENT)),
        Span::styled(
            TITLE,
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(title).alignment(Alignment::Center), rows[0]);
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            "Sign in with your eCampus roll number",
            Style::default().fg(Color::DarkGray),
        )))
        .alignment(Alignment::Center),
        rows[1],
    );

    field(
        f,
        rows[2],
        "Roll number",
        app.login.roll_no.clone(),
        app.login.focus == LoginField::RollNo,
    );
    field(
        f,
        rows[3],
        "Password",
        "•".repeat(app.login.password.chars().count()),
        app.login.focus == LoginField::Password,
    );

    let status = if app.busy {
        Line::from(Span::styled(
            format!("{} Signing in...", spinner_frame()),
            Style::default().fg(ACCENT),
        ))
    } else if let Some(ref error) = app.login.error {
        Line::from(Span::styled(
            strip_controls(error).into_owned(),
            Style::default().fg(Color::Red),
        ))
    } else {
        Line::default()
    };
    f.render_widget(Paragraph::new(status).alignment(Alignment::Center), rows[4]);
}
