//! Runs backend requests on background threads; results come back over a channel.

use std::sync::Arc;
use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::runtime::Runtime;

use crate::core::api::{ApiClient, ApiError};
use crate::core::assistant::{self, DataSummary, LoginError};

/// Work the event loop asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Login { roll_no: String, password: String },
    /// Load attendance and marks after `delay`.
    Data {
        epoch: u64,
        roll_no: String,
        delay: Duration,
    },
    Ask {
        epoch: u64,
        roll_no: String,
        question: String,
    },
    Logout { roll_no: String },
}

/// Result of a finished [`Request`]. `epoch` is the sign-in epoch the
/// request was started in; results from an older epoch are stale.
#[derive(Debug)]
pub enum Outcome {
    Login(Result<String, LoginError>),
    Data {
        epoch: u64,
        result: Result<DataSummary, ApiError>,
    },
    /// Text to show; failures are already folded into a message.
    Reply { epoch: u64, text: String },
    LoggedOut,
}

/// Start `request` on its own thread and send the outcome to `tx`.
pub fn spawn_request(rt: &Arc<Runtime>, client: &ApiClient, request: Request, tx: Sender<Outcome>) {
    let rt_clone = Arc::clone(rt);
    let client = client.clone();
    std::thread::spawn(move || {
        let outcome = rt_clone.block_on(async {
            match request {
                Request::Login { roll_no, password } => {
                    Outcome::Login(assistant::request_login(&client, &roll_no, &password).await)
                }
                Request::Data {
                    epoch,
                    roll_no,
                    delay,
                } => {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    Outcome::Data {
                        epoch,
                        result: assistant::request_data(&client, &roll_no).await,
                    }
                }
                Request::Ask {
                    epoch,
                    roll_no,
                    question,
                } => Outcome::Reply {
                    epoch,
                    text: assistant::request_reply(&client, &roll_no, &question).await,
                },
                Request::Logout { roll_no } => {
                    assistant::request_logout(&client, &roll_no).await;
                    Outcome::LoggedOut
                }
            }
        });
        // Receiver gone means the TUI already exited.
        let _ = tx.send(outcome);
    });
}
