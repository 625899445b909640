//! Glowrank library crate (used by the API layer and integration tests).
//!
//! Hybrid retrieval-rerank-score recommendation pipeline: a structured user
//! profile becomes a canonical query text, which drives dense retrieval over
//! a vector store; surviving candidates are joined with catalog records,
//! reranked by a cross-encoder, boosted by a rule-based keyword bonus, and
//! ordered by a request intent before the top-K cut.
//!
//! # Public API Surface
//!
//! ## Pipeline
//! - [`Recommender`] - End-to-end request pipeline over pluggable collaborators
//! - [`Recommendation`], [`SkipReason`] - Terminal output shapes
//! - [`Intent`] - Closed intent enumeration (regular / event / weather)
//!
//! ## Collaborator Contracts
//! - [`EmbeddingClient`] / [`OpenAiEmbedder`] - Dense embedding
//! - [`VectorSearch`] / [`QdrantSearch`] - Similarity retrieval
//! - [`CatalogStore`] / [`PostgrestCatalog`] - Profile, record, and content access
//!
//! ## Scoring
//! - [`Reranker`], [`SharedReranker`] - Cross-encoder (lazily-initialized singleton)
//! - [`keyword_bonus`], [`combine_scores`] - Lexical bonus and score combination
//!
//! ## Constants
//! Pool sizes, model identifiers, and scoring weights live in [`constants`];
//! prefer deriving from them over repeating literals.
//!
//! ## Test/Mock Support
//! Mock collaborators are available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod embedding;
pub mod lexicon;
pub mod pipeline;
pub mod profile;
pub mod query;
pub mod reranker;
pub mod retrieval;
pub mod scoring;

pub use catalog::{CatalogError, CatalogStore, ItemRecord, PostgrestCatalog};
#[cfg(any(test, feature = "mock"))]
pub use catalog::MockCatalog;

pub use config::{Config, ConfigError};
pub use constants::{
    CANDIDATE_POOL, CE_MAX_CHARS, CE_MODEL, DEFAULT_TOP_K, DimensionMismatch, EMBED_DIM,
    EMBED_MODEL, EVENT_DISCOUNT_WINDOW, KW_BONUS_ALPHA, validate_embedding_dim,
};

pub use embedding::{EmbeddingClient, EmbeddingError, OpenAiEmbedder};
#[cfg(any(test, feature = "mock"))]
pub use embedding::MockEmbedder;

pub use lexicon::{Season, expand_keywords, normalize_token, season_keywords};
pub use pipeline::{RecommendError, Recommendation, Recommender, SkipReason};
pub use profile::Profile;
pub use query::{build_query_text, truncate_for_ce};
pub use reranker::{MAX_SEQ_LEN, Reranker, RerankerConfig, RerankerError, SharedReranker};

pub use retrieval::{CandidateMatch, QdrantSearch, SearchError, VectorSearch};
#[cfg(any(test, feature = "mock"))]
pub use retrieval::MockVectorSearch;

pub use scoring::{
    BonusDetail, Intent, ScoredCandidate, apply_intent_order, combine_scores, keyword_bonus,
    select_top_k,
};
