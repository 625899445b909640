use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed with status {status}: {message}")]
    RequestFailed { status: u16, message: String },

    #[error("catalog transport error: {message}")]
    Transport { message: String },

    #[error("malformed catalog response: {reason}")]
    InvalidResponse { reason: String },
}

impl From<reqwest::Error> for CatalogError {
    fn from(err: reqwest::Error) -> Self {
        CatalogError::Transport {
            message: err.to_string(),
        }
    }
}
