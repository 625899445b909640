//! Cross-cutting, shared constants.
//!
//! Prefer deriving secondary values from these rather than repeating literals
//! so the pipeline modules cannot drift apart.

/// Default number of ranked items returned to the caller.
pub const DEFAULT_TOP_K: usize = 3;

/// Upper bound on the candidate pool returned by similarity search.
pub const CANDIDATE_POOL: u64 = 30;

/// Embedding model identifier sent to the embedding service.
pub const EMBED_MODEL: &str = "text-embedding-3-small";

/// Fixed embedding dimension. Any embedding of a different length is an
/// unrecoverable error for the request.
pub const EMBED_DIM: usize = 1536;

/// Default cross-encoder model identifier (documentation / config default).
pub const CE_MODEL: &str = "BAAI/bge-reranker-v2-m3";

/// Weight applied to the keyword bonus when combined with the cross-encoder
/// score: `final_score = ce_score + KW_BONUS_ALPHA * keyword_bonus`.
pub const KW_BONUS_ALPHA: f32 = 1.2;

/// Hard character cut applied to each side of a cross-encoder pair.
pub const CE_MAX_CHARS: usize = 1800;

/// Size of the head slice re-sorted by discount rate under event intent.
/// Fixed threshold; with fewer survivors the final-score order stands.
pub const EVENT_DISCOUNT_WINDOW: usize = 5;

/// Error returned when a runtime embedding dimension does not match [`EMBED_DIM`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionMismatch {
    pub expected: usize,
    pub actual: usize,
}

impl std::fmt::Display for DimensionMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "embedding dimension mismatch: expected {}, got {}",
            self.expected, self.actual
        )
    }
}

impl std::error::Error for DimensionMismatch {}

/// Validates that a produced embedding has the expected dimension.
///
/// Use at module boundaries so mismatches surface immediately instead of as
/// garbage similarity scores deep in the pipeline.
pub fn validate_embedding_dim(actual: usize, expected: usize) -> Result<(), DimensionMismatch> {
    if actual != expected {
        return Err(DimensionMismatch { expected, actual });
    }
    Ok(())
}
