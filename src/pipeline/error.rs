use thiserror::Error;

use crate::catalog::CatalogError;
use crate::embedding::EmbeddingError;
use crate::reranker::RerankerError;
use crate::retrieval::SearchError;

/// Failure of one of the pipeline's external collaborators.
///
/// Reported skip conditions (missing profile, empty pool, empty join) are not
/// errors; they resolve to an explicit no-recommendation result instead.
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("embedding stage failed: {0}")]
    Embedding(#[from] EmbeddingError),

    #[error("retrieval stage failed: {0}")]
    Search(#[from] SearchError),

    #[error("catalog stage failed: {0}")]
    Catalog(#[from] CatalogError),

    #[error("rerank stage failed: {0}")]
    Reranker(#[from] RerankerError),
}
