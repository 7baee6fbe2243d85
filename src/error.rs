use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP error! status: {status}")]
    Status { status: u16, body: String },

    #[error("Invalid JSON in response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Unexpected response: {0}")]
    Malformed(String),

    #[error("{0}")]
    Validation(String),
}

impl ClientError {
    /// Text suitable for a notification. Status errors carry the server's own
    /// message when it sent one.
    pub fn message(&self) -> String {
        match self {
            ClientError::Status { body, .. } if !body.trim().is_empty() => body.trim().to_string(),
            other => other.to_string(),
        }
    }
}
