//! Assistant flows: sign in, load data, ask, sign out.
//!
//! The `request_*` functions do the network half and can run on any thread;
//! `begin_session` / `end_session` apply results to the session state and
//! transcript. [`Assistant`] strings both halves together for the CLI.

use crate::core::api::{ApiClient, ApiError, ChatReply};
use crate::core::message::Transcript;
use crate::core::session::{SessionError, SessionState, SessionStore};

pub const GREETING: &str = "👋 Hello! I'm your eCampus AI Assistant.\n\nI can help you understand your attendance and marks. First, let me fetch your latest data...";
pub const FETCHING: &str = "Fetching your attendance and marks data...";
pub const FETCH_FAILED: &str = "⚠️ Could not fetch data. Please refresh and try again.";
pub const CHAT_FALLBACK: &str = "Sorry, I couldn't process that.";
pub const CHAT_FAILED: &str = "❌ Sorry, I encountered an error. Please try again.";

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("Roll number and password are required")]
    MissingCredentials,
    /// The backend refused the login; its message is shown as-is.
    #[error("{0}")]
    Rejected(String),
    #[error("Failed to connect to server. Please try again.")]
    Unreachable(#[source] ApiError),
    #[error("Login failed. Please try again.")]
    NoSuccess,
    #[error(transparent)]
    Session(#[from] SessionError),
}

#[derive(Debug, thiserror::Error)]
#[error("Not signed in. Run `ecampus-assistant login --roll-no <ROLL_NO>` first.")]
pub struct NotSignedIn;

/// Counts from the initial data fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataSummary {
    pub attendance: usize,
    pub marks: usize,
}

impl DataSummary {
    /// Human-readable status shown after a successful fetch.
    pub fn message(&self) -> String {
        let mut msg = String::from("✅ Data loaded successfully!\n\n");
        if self.attendance > 0 {
            msg.push_str(&format!("📊 Attendance: {} subjects\n", self.attendance));
        }
        if self.marks > 0 {
            msg.push_str(&format!("📝 Marks: {} records\n", self.marks));
        }
        msg.push_str("\nYou can now ask me anything about your academic performance!");
        msg
    }
}

/// Text for the transcript after a fetch: summary, or the single failure message.
pub fn data_message(result: &Result<DataSummary, ApiError>) -> String {
    match result {
        Ok(summary) => summary.message(),
        Err(_) => FETCH_FAILED.to_string(),
    }
}

/// Pick what to show for a chat reply: `error`, then `response`, then a fallback.
/// Empty strings count as absent.
pub fn reply_text(reply: &ChatReply) -> String {
    reply
        .error
        .as_deref()
        .filter(|s| !s.is_empty())
        .or(reply.response.as_deref().filter(|s| !s.is_empty()))
        .unwrap_or(CHAT_FALLBACK)
        .to_string()
}

/// Validate credentials and call `/api/login`. Returns the trimmed roll number.
pub async fn request_login(
    client: &ApiClient,
    roll_no: &str,
    password: &str,
) -> Result<String, LoginError> {
    let roll_no = roll_no.trim();
    if roll_no.is_empty() || password.trim().is_empty() {
        return Err(LoginError::MissingCredentials);
    }
    let reply = client.login(roll_no, password).await.map_err(|e| {
        log::warn!("Login request failed: {}", e);
        LoginError::Unreachable(e)
    })?;
    if let Some(error) = reply.error.filter(|e| !e.is_empty()) {
        return Err(LoginError::Rejected(error));
    }
    if !reply.success {
        return Err(LoginError::NoSuccess);
    }
    log::info!("Signed in as {}", roll_no);
    Ok(roll_no.to_string())
}

/// Fetch attendance and marks concurrently. Both must succeed; either
/// failure fails the whole fetch.
pub async fn request_data(client: &ApiClient, roll_no: &str) -> Result<DataSummary, ApiError> {
    let (attendance, marks) =
        tokio::try_join!(client.attendance(roll_no), client.marks(roll_no)).inspect_err(|e| {
            log::warn!("Data fetch failed: {}", e);
        })?;
    if let Some(ref e) = attendance.error {
        log::info!("Attendance reply carried an error: {}", e);
    }
    if let Some(ref e) = marks.error {
        log::info!("Marks reply carried an error: {}", e);
    }
    Ok(DataSummary {
        attendance: attendance.count(),
        marks: marks.count(),
    })
}

/// Ask the backend a question and return the text to show.
pub async fn request_reply(client: &ApiClient, roll_no: &str, question: &str) -> String {
    match client.chat(roll_no, question).await {
        Ok(reply) => reply_text(&reply),
        Err(e) => {
            log::warn!("Chat request failed: {}", e);
            CHAT_FAILED.to_string()
        }
    }
}

/// Tell the backend to drop the session. Failures are logged, never returned.
pub async fn request_logout(client: &ApiClient, roll_no: &str) {
    match client.logout(roll_no).await {
        Ok(reply) => log::debug!("Logout reply: {:?}", reply.message),
        Err(e) => log::warn!("Logout error: {}", e),
    }
}

/// Apply a successful login: persist, mark signed in, greet.
pub fn begin_session(
    state: &mut SessionState,
    store: &SessionStore,
    transcript: &mut Transcript,
    roll_no: &str,
) -> Result<(), SessionError> {
    state.sign_in(store, roll_no)?;
    transcript.reset_with(GREETING);
    Ok(())
}

/// Local sign-out: always resets state and transcript. The returned error
/// only reports a session file that could not be removed.
pub fn end_session(
    state: &mut SessionState,
    store: &SessionStore,
    transcript: &mut Transcript,
) -> Result<(), SessionError> {
    transcript.clear();
    state.sign_out(store)
}

/// Session, transcript, and client together, for non-interactive use.
pub struct Assistant {
    client: ApiClient,
    store: SessionStore,
    state: SessionState,
    transcript: Transcript,
}

impl Assistant {
    /// Init from the persisted session; greets when one is restored.
    pub fn restore(client: ApiClient, store: SessionStore) -> Self {
        let state = SessionState::restore(&store);
        let mut transcript = Transcript::default();
        if state.is_signed_in() {
            transcript.reset_with(GREETING);
        }
        Self {
            client,
            store,
            state,
            transcript,
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    fn roll_no(&self) -> Result<String, NotSignedIn> {
        self.state.roll_no().map(String::from).ok_or(NotSignedIn)
    }

    pub async fn login(&mut self, roll_no: &str, password: &str) -> Result<(), LoginError> {
        let roll_no = request_login(&self.client, roll_no, password).await?;
        begin_session(&mut self.state, &self.store, &mut self.transcript, &roll_no)?;
        Ok(())
    }

    /// Load attendance and marks; returns the status message that was added.
    pub async fn fetch_data(&mut self) -> Result<String, NotSignedIn> {
        let roll_no = self.roll_no()?;
        self.transcript.push_loading(FETCHING);
        let result = request_data(&self.client, &roll_no).await;
        self.state.set_data_loaded(result.is_ok());
        let message = data_message(&result);
        self.transcript.resolve_loading(&message);
        Ok(message)
    }

    /// Ask a question. An empty (after trimming) question is ignored and yields `None`.
    pub async fn ask(&mut self, question: &str) -> Result<Option<String>, NotSignedIn> {
        let roll_no = self.roll_no()?;
        let question = question.trim();
        if question.is_empty() {
            return Ok(None);
        }
        self.transcript.push_user(question);
        let reply = request_reply(&self.client, &roll_no, question).await;
        self.transcript.push_assistant(&reply);
        Ok(Some(reply))
    }

    /// Best-effort remote logout, then always sign out locally.
    pub async fn logout(&mut self) -> Result<(), SessionError> {
        if let Some(roll_no) = self.state.roll_no().map(String::from) {
            request_logout(&self.client, &roll_no).await;
        }
        end_session(&mut self.state, &self.store, &mut self.transcript)
    }
}

#[cfg(test)]
mod tests;
