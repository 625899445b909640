//! Dense candidate retrieval.
//!
//! The similarity-search collaborator returns an ordered candidate pool of
//! `(item id, similarity)` pairs. Zero matches is not an error here; the
//! pipeline treats an empty pool as a terminal "no recommendation" condition.

pub mod error;
#[cfg(any(test, feature = "mock"))]
pub mod mock;
pub mod qdrant;

#[cfg(test)]
mod tests;

pub use error::SearchError;
#[cfg(any(test, feature = "mock"))]
pub use mock::MockVectorSearch;
pub use qdrant::QdrantSearch;

/// One similarity-search hit. Ephemeral: lives only within a single request.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateMatch {
    pub item_id: String,
    /// Cosine-like similarity in `[-1, 1]`.
    pub similarity: f32,
}

/// Minimal async interface used by the pipeline.
pub trait VectorSearch: Send + Sync {
    /// Returns up to `limit` matches for `vector`, most similar first.
    ///
    /// `brand_filter` narrows the search server-side when supported; the
    /// pipeline currently passes `None` and filters brands at the join step.
    fn search(
        &self,
        vector: Vec<f32>,
        limit: u64,
        brand_filter: Option<&str>,
    ) -> impl std::future::Future<Output = Result<Vec<CandidateMatch>, SearchError>> + Send;
}

/// Sorts matches descending by similarity, keeping the collaborator's native
/// order for ties.
pub fn sort_by_similarity(matches: &mut [CandidateMatch]) {
    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}
