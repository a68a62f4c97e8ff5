//! TUI rendering: login form and chat layout.

mod header;
mod history;
mod input;
mod login;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use super::app::{App, Screen};
use super::constants::ACCENT;

/// Rows taken by the suggestion chips, input box, and disclaimer.
const INPUT_SECTION_HEIGHT: u16 = 7;

pub(super) fn draw(f: &mut Frame, app: &mut App, area: Rect) {
    match app.screen {
        Screen::Login => login::draw_login(f, app, area),
        Screen::Chat => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(2),
                    Constraint::Min(3),
                    Constraint::Length(INPUT_SECTION_HEIGHT),
                ])
                .split(area);
            header::draw_header(f, app, chunks[0], ACCENT);
            history::draw_history(f, app, chunks[1]);
            input::draw_input_section(f, app, chunks[2]);
        }
    }
}
