use serde::Serialize;

use crate::errors::ClientError;

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub status: String,
    pub message: String,
}

impl From<&ClientError> for ErrorResponse {
    fn from(err: &ClientError) -> Self {
        let status = match err {
            ClientError::Api { .. } => "fail",
            _ => "error",
        };

        ErrorResponse {
            status: status.to_string(),
            message: err.to_string(),
        }
    }
}
