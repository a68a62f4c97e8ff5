//! Handler for the chat input (typing, send, scroll).

use crossterm::event::{KeyCode, KeyModifiers};

use super::super::app::App;
use super::super::constants;
use super::HandleResult;

pub(crate) fn handle_chat_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
) -> HandleResult {
    match key_code {
        KeyCode::Enter => app.submit_question().into(),
        KeyCode::Backspace => {
            app.input.pop();
            HandleResult::Continue
        }
        KeyCode::Up => {
            app.scroll_up(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        KeyCode::Down => {
            app.scroll_down(constants::SCROLL_LINES_SMALL);
            HandleResult::Continue
        }
        KeyCode::PageUp => {
            app.scroll_up(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        KeyCode::PageDown => {
            app.scroll_down(constants::SCROLL_LINES_PAGE);
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            // Ignore Alt/Ctrl+key: user likely intended a shortcut
            if key_modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
                return HandleResult::Continue;
            }
            app.input.push(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}
