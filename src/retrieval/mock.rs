use std::sync::atomic::{AtomicUsize, Ordering};

use parking_lot::RwLock;

use super::error::SearchError;
use super::{CandidateMatch, VectorSearch, sort_by_similarity};

/// In-memory search collaborator seeded with fixed matches.
#[derive(Debug, Default)]
pub struct MockVectorSearch {
    matches: RwLock<Vec<CandidateMatch>>,
    calls: AtomicUsize,
}

impl MockVectorSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the pool returned by every search.
    pub fn with_matches(matches: Vec<CandidateMatch>) -> Self {
        Self {
            matches: RwLock::new(matches),
            calls: AtomicUsize::new(0),
        }
    }

    /// Convenience seeding from `(id, similarity)` pairs.
    pub fn with_pairs(pairs: &[(&str, f32)]) -> Self {
        Self::with_matches(
            pairs
                .iter()
                .map(|(id, similarity)| CandidateMatch {
                    item_id: id.to_string(),
                    similarity: *similarity,
                })
                .collect(),
        )
    }

    /// Number of search calls issued so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl VectorSearch for MockVectorSearch {
    async fn search(
        &self,
        _vector: Vec<f32>,
        limit: u64,
        _brand_filter: Option<&str>,
    ) -> Result<Vec<CandidateMatch>, SearchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let mut matches = self.matches.read().clone();
        sort_by_similarity(&mut matches);
        matches.truncate(limit as usize);

        Ok(matches)
    }
}
