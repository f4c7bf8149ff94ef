use thiserror::Error;

use crate::errors::ClientError;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("Storage error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Custom error: {0}")]
    Custom(String),
}
