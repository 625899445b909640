use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to connect to vector search at {url}: {message}")]
    ConnectionFailed { url: String, message: String },

    #[error("similarity search failed on collection {collection}: {message}")]
    SearchFailed { collection: String, message: String },
}
