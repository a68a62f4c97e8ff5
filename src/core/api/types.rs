//! Request bodies and reply shapes (camelCase on the wire).

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One attendance or marks row. Column names come from the portal tables.
pub type Record = serde_json::Map<String, Value>;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct LoginBody<'a> {
    pub roll_no: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct RollNoBody<'a> {
    pub roll_no: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(super) struct ChatBody<'a> {
    pub roll_no: &'a str,
    pub message: &'a str,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginReply {
    #[serde(default)]
    pub success: bool,
    pub roll_no: Option<String>,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceReply {
    #[serde(default)]
    pub success: bool,
    pub attendance: Option<Vec<Record>>,
    pub roll_no: Option<String>,
    pub error: Option<String>,
}

impl AttendanceReply {
    /// Number of subjects; 0 when the list is absent.
    pub fn count(&self) -> usize {
        self.attendance.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarksReply {
    #[serde(default)]
    pub success: bool,
    pub marks: Option<Vec<Record>>,
    pub roll_no: Option<String>,
    pub error: Option<String>,
}

impl MarksReply {
    pub fn count(&self) -> usize {
        self.marks.as_ref().map_or(0, Vec::len)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ChatReply {
    #[serde(default)]
    pub success: bool,
    pub response: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LogoutReply {
    #[serde(default)]
    pub success: bool,
    pub message: Option<String>,
    pub error: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct HealthReply {
    pub status: String,
    pub message: Option<String>,
}
