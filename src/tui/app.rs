//! TUI application state: screens, login form, transcript, input, scroll.

use std::time::Duration;

use crate::core::assistant::{self, DataSummary, FETCHING, LoginError};
use crate::core::api::ApiError;
use crate::core::message::Transcript;
use crate::core::session::{SessionState, SessionStore};
use crate::core::suggestions::suggested_questions;

use super::constants::FETCH_AFTER_LOGIN_MS;
use super::handlers::{Outcome, Request};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Chat,
}

/// Which field of the login form has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    RollNo,
    Password,
}

#[derive(Debug, Default)]
pub struct LoginForm {
    pub roll_no: String,
    pub password: String,
    pub focus: LoginField,
    /// Last login failure, shown under the form.
    pub error: Option<String>,
}

impl LoginForm {
    pub(crate) fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::RollNo => &mut self.roll_no,
            LoginField::Password => &mut self.password,
        }
    }

    pub(crate) fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::RollNo => LoginField::Password,
            LoginField::Password => LoginField::RollNo,
        };
    }
}

/// Scroll position: either a specific line index, or "at bottom" (follow new content).
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ScrollPosition {
    Line(usize),
    Bottom,
}

impl Default for ScrollPosition {
    fn default() -> Self {
        Self::Bottom
    }
}

pub struct App {
    pub(crate) screen: Screen,
    pub(crate) login: LoginForm,
    pub(crate) session: SessionState,
    pub(crate) store: SessionStore,
    pub(crate) transcript: Transcript,
    /// User input in the chat field.
    pub(crate) input: String,
    pub(crate) scroll: ScrollPosition,
    /// Max scroll offset from last draw; used to convert Bottom into a line index.
    pub(crate) last_max_scroll: usize,
    /// True while a login or chat request is in flight.
    pub(crate) busy: bool,
    /// Backend host shown in the bottom bar.
    pub(crate) api_host: String,
    /// Bumped on every sign-in and sign-out; data and chat results carry
    /// the epoch they were requested in.
    pub(crate) epoch: u64,
}

impl App {
    /// Init from the persisted session. A restored session opens the chat
    /// screen with a greeting and returns the data fetch to start.
    pub fn restore(store: SessionStore) -> (Self, Option<Request>) {
        let session = SessionState::restore(&store);
        let mut app = Self {
            screen: Screen::Login,
            login: LoginForm::default(),
            session,
            store,
            transcript: Transcript::default(),
            input: String::new(),
            scroll: ScrollPosition::Bottom,
            last_max_scroll: 0,
            busy: false,
            api_host: String::new(),
            epoch: 0,
        };
        let request = app.session.roll_no().map(String::from).map(|roll_no| {
            app.screen = Screen::Chat;
            app.transcript.reset_with(assistant::GREETING);
            app.start_fetch(roll_no, Duration::ZERO)
        });
        (app, request)
    }

    /// Validate the form locally and build the login request.
    pub(crate) fn submit_login(&mut self) -> Option<Request> {
        if self.busy {
            return None;
        }
        let roll_no = self.login.roll_no.trim().to_string();
        if roll_no.is_empty() || self.login.password.trim().is_empty() {
            self.login.error = Some(LoginError::MissingCredentials.to_string());
            return None;
        }
        self.login.error = None;
        self.busy = true;
        Some(Request::Login {
            roll_no,
            password: self.login.password.clone(),
        })
    }

    /// Take the input as a question. Ignored when empty or a request is running.
    pub(crate) fn submit_question(&mut self) -> Option<Request> {
        if self.busy {
            return None;
        }
        let question = self.input.trim().to_string();
        if question.is_empty() {
            return None;
        }
        let roll_no = self.session.roll_no()?.to_string();
        self.input.clear();
        self.transcript.push_user(&question);
        self.busy = true;
        self.scroll = ScrollPosition::Bottom;
        Some(Request::Ask {
            epoch: self.epoch,
            roll_no,
            question,
        })
    }

    /// Reload data for the signed-in user (skipped while a fetch is running).
    pub(crate) fn refresh(&mut self) -> Option<Request> {
        if self.transcript.is_loading() {
            return None;
        }
        let roll_no = self.session.roll_no()?.to_string();
        Some(self.start_fetch(roll_no, Duration::ZERO))
    }

    fn start_fetch(&mut self, roll_no: String, delay: Duration) -> Request {
        self.transcript.push_loading(FETCHING);
        self.scroll = ScrollPosition::Bottom;
        Request::Data {
            epoch: self.epoch,
            roll_no,
            delay,
        }
    }

    /// Sign out locally right away; the returned request tells the backend.
    pub(crate) fn sign_out(&mut self) -> Option<Request> {
        let roll_no = self.session.roll_no().map(String::from);
        if let Err(e) =
            assistant::end_session(&mut self.session, &self.store, &mut self.transcript)
        {
            log::warn!("Sign-out: {}", e);
        }
        self.epoch += 1;
        self.screen = Screen::Login;
        self.login = LoginForm::default();
        self.input.clear();
        self.busy = false;
        self.scroll = ScrollPosition::Bottom;
        roll_no.map(|roll_no| Request::Logout { roll_no })
    }

    /// Put suggestion `index` in the input.
    pub(crate) fn use_suggestion(&mut self, index: usize) {
        if self.screen != Screen::Chat || self.busy {
            return;
        }
        if let Some(q) = suggested_questions().get(index) {
            self.input = q.clone();
        }
    }

    /// Apply a finished request. May return a follow-up request.
    pub(crate) fn apply(&mut self, outcome: Outcome) -> Option<Request> {
        match outcome {
            Outcome::Login(result) => self.apply_login(result),
            Outcome::Data { epoch, result } => {
                if epoch == self.epoch {
                    self.apply_data(result);
                } else {
                    log::debug!("Dropping stale data result (epoch {})", epoch);
                }
                None
            }
            Outcome::Reply { epoch, text } => {
                if epoch == self.epoch {
                    self.busy = false;
                    self.transcript.push_assistant(&text);
                    self.scroll = ScrollPosition::Bottom;
                } else {
                    log::debug!("Dropping stale reply (epoch {})", epoch);
                }
                None
            }
            Outcome::LoggedOut => None,
        }
    }

    fn apply_login(&mut self, result: Result<String, LoginError>) -> Option<Request> {
        self.busy = false;
        match result {
            Ok(roll_no) => {
                if let Err(e) = assistant::begin_session(
                    &mut self.session,
                    &self.store,
                    &mut self.transcript,
                    &roll_no,
                ) {
                    self.login.error = Some(e.to_string());
                    return None;
                }
                self.epoch += 1;
                self.login = LoginForm::default();
                self.screen = Screen::Chat;
                Some(self.start_fetch(roll_no, Duration::from_millis(FETCH_AFTER_LOGIN_MS)))
            }
            Err(e) => {
                self.login.error = Some(e.to_string());
                None
            }
        }
    }

    fn apply_data(&mut self, result: Result<DataSummary, ApiError>) {
        self.session.set_data_loaded(result.is_ok());
        self.transcript
            .resolve_loading(&assistant::data_message(&result));
        self.scroll = ScrollPosition::Bottom;
    }

    /// Scroll up by `lines`, leaving follow-bottom mode.
    pub(crate) fn scroll_up(&mut self, lines: usize) {
        let current = match self.scroll {
            ScrollPosition::Line(n) => n,
            ScrollPosition::Bottom => self.last_max_scroll,
        };
        self.scroll = ScrollPosition::Line(current.saturating_sub(lines));
    }

    /// Scroll down by `lines`; reaching the end re-enables follow-bottom.
    pub(crate) fn scroll_down(&mut self, lines: usize) {
        if let ScrollPosition::Line(n) = self.scroll {
            let next = n + lines;
            self.scroll = if next >= self.last_max_scroll {
                ScrollPosition::Bottom
            } else {
                ScrollPosition::Line(next)
            };
        }
    }
}
