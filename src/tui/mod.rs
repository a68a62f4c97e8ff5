//! TUI (Text User Interface): login form and chat with the eCampus assistant.

mod app;
mod constants;
mod draw;
mod handlers;
mod shortcuts;
mod text;

use crossterm::event::{self, Event};
use crossterm::execute;
use std::io;
use std::sync::Arc;
use std::sync::mpsc;

use tokio::runtime::Runtime;

use crate::core::api::ApiClient;
use crate::core::config::Config;
use crate::core::session::SessionStore;

use app::App;
use draw::draw;
use handlers::{HandleResult, spawn_request};

/// Guard that restores terminal state on drop (including on panic).
struct TerminalGuard;

impl TerminalGuard {
    fn new() -> Self {
        Self
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        use crossterm::terminal::{LeaveAlternateScreen, disable_raw_mode};
        let _ = execute!(
            std::io::stdout(),
            crossterm::event::PopKeyboardEnhancementFlags
        );
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// Run the TUI loop. Uses a dedicated Tokio runtime for backend calls.
pub fn run(config: Config) -> io::Result<()> {
    use crossterm::terminal::{Clear, ClearType, EnterAlternateScreen, enable_raw_mode};
    use ratatui::Terminal;
    use ratatui::backend::CrosstermBackend;

    let client = ApiClient::new(&config).map_err(io::Error::other)?;
    let rt = Arc::new(
        Runtime::new().map_err(|e| io::Error::other(format!("Failed to create runtime: {}", e)))?,
    );

    let _guard = TerminalGuard::new();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    execute!(stdout, Clear(ClearType::All))?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Kitty keyboard protocol: Alt+digit as single event with modifier.
    let _ = execute!(
        io::stdout(),
        crossterm::event::PushKeyboardEnhancementFlags(
            crossterm::event::KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES
        )
    );

    let (tx, rx) = mpsc::channel();
    let (mut app, restored) = App::restore(SessionStore::new(config.config_dir.as_deref()));
    app.api_host = config.api_url.clone();
    if let Some(request) = restored {
        log::info!("Restored session, fetching data");
        spawn_request(&rt, &client, request, tx.clone());
    }

    loop {
        while let Ok(outcome) = rx.try_recv() {
            if let Some(next) = app.apply(outcome) {
                spawn_request(&rt, &client, next, tx.clone());
            }
        }

        terminal.draw(|f| draw(f, &mut app, f.area()))?;

        if event::poll(std::time::Duration::from_millis(
            constants::EVENT_POLL_TIMEOUT_MS,
        ))? && let Event::Key(key) = event::read()?
        {
            match handlers::handle_key(key, &mut app) {
                HandleResult::Continue => {}
                HandleResult::Break => break,
                HandleResult::Send(request) => {
                    spawn_request(&rt, &client, request, tx.clone())
                }
            }
        }
    }

    terminal.show_cursor()?;
    Ok(())
}
