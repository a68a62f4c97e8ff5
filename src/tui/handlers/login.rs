//! Login form keys.

use crossterm::event::{KeyCode, KeyModifiers};

use super::super::app::App;
use super::HandleResult;

pub(crate) fn handle_login_input(
    key_code: KeyCode,
    key_modifiers: KeyModifiers,
    app: &mut App,
) -> HandleResult {
    match key_code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.toggle_focus();
            HandleResult::Continue
        }
        KeyCode::Enter => app.submit_login().into(),
        KeyCode::Backspace => {
            app.login.focused_mut().pop();
            HandleResult::Continue
        }
        KeyCode::Char(c) => {
            if key_modifiers.intersects(KeyModifiers::ALT | KeyModifiers::CONTROL) {
                return HandleResult::Continue;
            }
            app.login.focused_mut().push(c);
            HandleResult::Continue
        }
        _ => HandleResult::Continue,
    }
}
