//! Keyword bonus scoring, score combination, and intent-conditioned ordering.

pub mod bonus;
pub mod policy;
pub mod types;


pub use bonus::keyword_bonus;
pub use policy::{Intent, apply_intent_order, combine_scores, select_top_k};
pub use types::{BonusDetail, ScoredCandidate};
