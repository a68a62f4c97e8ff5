//! Event handlers for the TUI: keyboard input per screen, background requests.

mod input;
mod login;
mod spawn;

pub use spawn::{Outcome, Request, spawn_request};

use crossterm::event::{KeyEvent, KeyEventKind};

use super::app::{App, Screen};
use super::shortcuts::Shortcut;

/// Result of handling an event.
#[derive(Debug, PartialEq, Eq)]
pub enum HandleResult {
    Continue,
    Break,
    /// Start this request in the background.
    Send(Request),
}

impl From<Option<Request>> for HandleResult {
    fn from(request: Option<Request>) -> Self {
        request.map_or(HandleResult::Continue, HandleResult::Send)
    }
}

/// Handle a key event. Returns HandleResult::Break to exit the main loop.
pub fn handle_key(key: KeyEvent, app: &mut App) -> HandleResult {
    if key.kind != KeyEventKind::Press {
        return HandleResult::Continue;
    }

    if let Some(shortcut) = Shortcut::match_key(&key) {
        return match (shortcut, app.screen) {
            (Shortcut::Quit, _) => HandleResult::Break,
            (Shortcut::Refresh, Screen::Chat) => app.refresh().into(),
            (Shortcut::SignOut, Screen::Chat) => app.sign_out().into(),
            (Shortcut::Suggestion(i), Screen::Chat) => {
                app.use_suggestion(i);
                HandleResult::Continue
            }
            _ => HandleResult::Continue,
        };
    }

    match app.screen {
        Screen::Login => login::handle_login_input(key.code, key.modifiers, app),
        Screen::Chat => input::handle_chat_input(key.code, key.modifiers, app),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::session::SessionStore;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            assert_eq!(handle_key(press(KeyCode::Char(c)), app), HandleResult::Continue);
        }
    }

    fn login_app() -> (tempfile::TempDir, App) {
        let dir = tempfile::tempdir().unwrap();
        let (app, _) = App::restore(SessionStore::new(Some(dir.path())));
        (dir, app)
    }

    #[test]
    fn esc_quits_from_any_screen() {
        let (_dir, mut app) = login_app();
        assert_eq!(handle_key(press(KeyCode::Esc), &mut app), HandleResult::Break);
    }

    #[test]
    fn login_form_typing_and_submit() {
        let (_dir, mut app) = login_app();
        type_str(&mut app, "21CS042");
        handle_key(press(KeyCode::Tab), &mut app);
        type_str(&mut app, "secret");
        handle_key(press(KeyCode::Backspace), &mut app);
        assert_eq!(app.login.roll_no, "21CS042");
        assert_eq!(app.login.password, "secre");

        match handle_key(press(KeyCode::Enter), &mut app) {
            HandleResult::Send(Request::Login { roll_no, password }) => {
                assert_eq!(roll_no, "21CS042");
                assert_eq!(password, "secre");
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn chat_shortcuts_ignored_on_login_screen() {
        let (_dir, mut app) = login_app();
        let ctrl_o = KeyEvent::new(KeyCode::Char('o'), KeyModifiers::CONTROL);
        assert_eq!(handle_key(ctrl_o, &mut app), HandleResult::Continue);
        let alt_1 = KeyEvent::new(KeyCode::Char('1'), KeyModifiers::ALT);
        assert_eq!(handle_key(alt_1, &mut app), HandleResult::Continue);
        assert!(app.login.roll_no.is_empty());
    }

    #[test]
    fn chat_enter_sends_question() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(Some(dir.path()));
        store.save("r1").unwrap();
        let (mut app, _) = App::restore(store);
        type_str(&mut app, "hi");
        assert!(matches!(
            handle_key(press(KeyCode::Enter), &mut app),
            HandleResult::Send(Request::Ask { .. })
        ));
        // Busy: a second question is refused.
        type_str(&mut app, "again");
        assert_eq!(handle_key(press(KeyCode::Enter), &mut app), HandleResult::Continue);
        assert_eq!(app.input, "again");
    }
}
