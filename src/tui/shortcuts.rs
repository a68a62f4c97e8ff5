//! Centralized keyboard shortcuts.
//!
//! | Action          | Keys                 |
//! |-----------------|----------------------|
//! | Send / sign in  | Enter                |
//! | Switch field    | Tab, Shift+Tab, ↑ ↓  |
//! | Suggestion N    | Alt+1 … Alt+9        |
//! | Refresh data    | Ctrl+R               |
//! | Sign out        | Ctrl+O               |
//! | Scroll          | ↑ ↓ PageUp PageDown  |
//! | Quit            | Esc, Ctrl+C          |

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Detected shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    Quit,
    /// Reload attendance and marks (Ctrl+R)
    Refresh,
    /// Sign out (Ctrl+O)
    SignOut,
    /// Put suggested question N (0-based) in the input (Alt+1..9)
    Suggestion(usize),
}

impl Shortcut {
    /// Returns the shortcut if the key matches.
    pub fn match_key(key: &KeyEvent) -> Option<Shortcut> {
        if key.kind != KeyEventKind::Press {
            return None;
        }
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        match key.code {
            KeyCode::Esc => Some(Shortcut::Quit),
            KeyCode::Char('c') if ctrl => Some(Shortcut::Quit),
            KeyCode::Char('r') if ctrl => Some(Shortcut::Refresh),
            KeyCode::Char('o') if ctrl => Some(Shortcut::SignOut),
            KeyCode::Char(c @ '1'..='9') if alt => {
                Some(Shortcut::Suggestion(c as usize - '1' as usize))
            }
            _ => None,
        }
    }
}

/// Shortcut labels for the bottom bar.
pub(crate) mod labels {
    pub fn login_bar() -> &'static str {
        "Tab switch field · Enter sign in · Esc quit"
    }

    pub fn chat_bar(busy: bool) -> &'static str {
        if busy {
            "Waiting for reply… · Ctrl+O sign out · Esc quit"
        } else {
            "Enter send · Alt+1‥9 suggestion · Ctrl+R refresh · Ctrl+O sign out · Esc quit"
        }
    }
}
