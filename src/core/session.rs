//! Signed-in session: the persisted roll number and the state built on it.
//!
//! Only the roll number survives restarts; the backend keeps the portal
//! session keyed by it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const SESSION_FILE: &str = "session";

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No config directory available (set ECAMPUS_CONFIG_DIR)")]
    NoConfigDir,
    #[error("Failed to update session file: {0}")]
    Io(#[from] io::Error),
}

/// File-backed store for the signed-in roll number.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Store inside `dir` (usually the config directory). `None` disables persistence.
    pub fn new(dir: Option<&Path>) -> Self {
        Self {
            path: dir.map(|d| d.join(SESSION_FILE)),
        }
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the persisted roll number. Missing, empty, or unreadable file → `None`.
    pub fn load(&self) -> Option<String> {
        let path = self.path.as_ref()?;
        fs::read_to_string(path)
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// Persist the roll number. Creates the directory if needed.
    pub fn save(&self, roll_no: &str) -> Result<(), SessionError> {
        let path = self.path.as_ref().ok_or(SessionError::NoConfigDir)?;
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, roll_no)?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    /// Remove the persisted roll number. A missing file is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Client-side session state with explicit init ([`SessionState::restore`])
/// and teardown ([`SessionState::sign_out`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    roll_no: Option<String>,
    data_loaded: bool,
}

impl SessionState {
    /// Init: signed in iff a roll number was persisted.
    pub fn restore(store: &SessionStore) -> Self {
        let roll_no = store.load();
        if let Some(ref r) = roll_no {
            log::info!("Restored session for {}", r);
        }
        Self {
            roll_no,
            data_loaded: false,
        }
    }

    /// Persist `roll_no` and mark the session signed in.
    pub fn sign_in(&mut self, store: &SessionStore, roll_no: &str) -> Result<(), SessionError> {
        store.save(roll_no)?;
        self.roll_no = Some(roll_no.to_string());
        self.data_loaded = false;
        Ok(())
    }

    /// Teardown: forget the persisted roll number and reset every field.
    /// In-memory state is reset even if the file cannot be removed.
    pub fn sign_out(&mut self, store: &SessionStore) -> Result<(), SessionError> {
        *self = Self::default();
        store.clear()
    }

    pub fn roll_no(&self) -> Option<&str> {
        self.roll_no.as_deref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.roll_no.is_some()
    }

    pub fn data_loaded(&self) -> bool {
        self.data_loaded
    }

    pub fn set_data_loaded(&mut self, loaded: bool) {
        self.data_loaded = loaded;
    }

    /// Greeting name: the roll number up to the first `@`.
    pub fn display_name(&self) -> &str {
        self.roll_no
            .as_deref()
            .map(|r| r.split('@').next().unwrap_or(r))
            .unwrap_or("")
    }

    /// Avatar letter: first character of the roll number, uppercased.
    pub fn initial(&self) -> String {
        self.roll_no
            .as_deref()
            .and_then(|r| r.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
