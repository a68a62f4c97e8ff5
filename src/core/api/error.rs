//! Errors from the REST client.

/// Failure to get a decodable reply. Replies that carry an `error` field are
/// not errors at this level; callers read the field.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("Request to /api/{endpoint} failed: {source}")]
    Transport {
        endpoint: &'static str,
        #[source]
        source: reqwest::Error,
    },
    #[error("Unexpected reply from /api/{endpoint} (HTTP {status}): {source}")]
    Decode {
        endpoint: &'static str,
        status: u16,
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// True for connect/timeout/IO failures, as opposed to a malformed reply.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport { .. } | ApiError::Client(_))
    }
}
