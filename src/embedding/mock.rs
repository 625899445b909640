use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use crate::constants::{EMBED_DIM, validate_embedding_dim};

use super::{EmbeddingClient, EmbeddingError};

/// In-memory embedder returning a fixed vector, with the same dimension check
/// as the real client. Request texts are recorded so tests can assert what
/// actually reached the embedding boundary.
#[derive(Debug)]
pub struct MockEmbedder {
    vector: Vec<f32>,
    expected_dim: usize,
    calls: AtomicUsize,
    requests: RwLock<Vec<String>>,
}

impl Default for MockEmbedder {
    fn default() -> Self {
        Self::with_vector(vec![0.1; EMBED_DIM])
    }
}

impl MockEmbedder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the given vector for every request.
    pub fn with_vector(vector: Vec<f32>) -> Self {
        Self {
            vector,
            expected_dim: EMBED_DIM,
            calls: AtomicUsize::new(0),
            requests: RwLock::new(Vec::new()),
        }
    }

    /// Simulates a service that produces vectors of the wrong length.
    pub fn with_wrong_dim(actual: usize) -> Self {
        Self {
            vector: vec![0.0; actual],
            expected_dim: EMBED_DIM,
            calls: AtomicUsize::new(0),
            requests: RwLock::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Text of the most recent embedding request, if any.
    pub fn last_request(&self) -> Option<String> {
        self.requests.read().last().cloned()
    }
}

impl EmbeddingClient for MockEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.write().push(text.to_string());
        validate_embedding_dim(self.vector.len(), self.expected_dim)?;
        Ok(self.vector.clone())
    }
}
