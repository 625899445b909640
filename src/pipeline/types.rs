use serde::Serialize;

use crate::scoring::ScoredCandidate;

/// Why a request resolved to no recommendation.
///
/// These are reported conditions, terminal for the request but never fatal to
/// the process.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// No profile exists for the requested user.
    ProfileNotFound { user_id: String },
    /// Similarity search returned zero matches.
    EmptyCandidatePool,
    /// No records survived the detail join. `filtered` distinguishes a brand
    /// allow-list emptying the set from the store holding no records at all.
    NoRecordsAfterFilter { filtered: bool },
    /// Every joined record lacked content text.
    NoContentAvailable,
    /// An unexpected failure was caught at the pipeline boundary.
    Internal { message: String },
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::ProfileNotFound { user_id } => {
                write!(f, "no profile found for user {user_id}")
            }
            SkipReason::EmptyCandidatePool => write!(f, "similarity search returned no candidates"),
            SkipReason::NoRecordsAfterFilter { filtered: true } => {
                write!(f, "brand allow-list excluded every candidate")
            }
            SkipReason::NoRecordsAfterFilter { filtered: false } => {
                write!(f, "no records found for the candidate pool")
            }
            SkipReason::NoContentAvailable => write!(f, "no candidate had content text"),
            SkipReason::Internal { message } => write!(f, "pipeline failure: {message}"),
        }
    }
}

/// Terminal pipeline output.
///
/// A request either produces a full result or an explicit absence; there is
/// no partial-result shape.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Recommendation {
    /// Exactly one record, produced when the caller asked for `top_k = 1`.
    Single(Box<ScoredCandidate>),
    /// Ordered list, most relevant first, at most `top_k` entries.
    Ranked(Vec<ScoredCandidate>),
    /// Explicit no-recommendation signal.
    None { skip: SkipReason },
}

impl Recommendation {
    pub fn none(skip: SkipReason) -> Self {
        Recommendation::None { skip }
    }

    /// Returns the ranked candidates, if any were produced.
    pub fn candidates(&self) -> &[ScoredCandidate] {
        match self {
            Recommendation::Single(one) => std::slice::from_ref(one),
            Recommendation::Ranked(list) => list,
            Recommendation::None { .. } => &[],
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Recommendation::None { .. })
    }
}
