use thiserror::Error;

use crate::constants::DimensionMismatch;

#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("embedding transport error: {message}")]
    Transport { message: String },

    #[error("malformed embedding response: {reason}")]
    InvalidResponse { reason: String },

    #[error(transparent)]
    DimensionMismatch(#[from] DimensionMismatch),
}

impl From<reqwest::Error> for EmbeddingError {
    fn from(err: reqwest::Error) -> Self {
        EmbeddingError::Transport {
            message: err.to_string(),
        }
    }
}
