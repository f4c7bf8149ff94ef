use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Transport(String),

    #[error("request timed out")]
    Timeout,

    #[error("unexpected http status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("{message}")]
    Api {
        code: i32,
        message: String,
        reload: bool,
    },

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn api(code: i32, message: impl Into<String>) -> Self {
        ClientError::Api {
            code,
            message: message.into(),
            reload: false,
        }
    }

    /// True when the backend flagged the session as invalidated and the
    /// caller must drop local credentials and log in again.
    pub fn requires_relogin(&self) -> bool {
        matches!(self, ClientError::Api { reload: true, .. })
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Transport(err.to_string())
        }
    }
}
