//! Typed wrapper over the assistant backend's REST endpoints.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{
    AttendanceReply, ChatReply, HealthReply, LoginReply, LogoutReply, MarksReply, Record,
};
