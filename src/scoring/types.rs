use serde::Serialize;

/// Match detail accompanying a keyword bonus score.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BonusDetail {
    /// Terms found in the candidate corpus, in search order.
    pub matched: Vec<String>,
    /// Weighted hit sum (priority hits count double).
    pub hit_weight: f32,
    /// Size of the combined search-term list.
    pub total_terms: usize,
    /// Number of matched terms that carried priority weight.
    pub priority_hits: usize,
}

/// Terminal per-candidate representation returned to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    pub item_id: String,
    pub brand: Option<String>,
    pub name: String,
    pub category_major: Option<String>,
    pub category_middle: Option<String>,
    pub category_small: Option<String>,
    pub price_final: Option<f64>,
    pub discount_rate: Option<f64>,
    pub review_score: Option<f64>,
    pub review_count: Option<i64>,

    /// Cross-encoder relevance score (model-native range).
    pub ce_score: f32,
    /// Bounded lexical-match bonus in `[0, 1]`.
    pub keyword_bonus: f32,
    pub bonus_detail: BonusDetail,
    /// `ce_score + α · keyword_bonus`.
    pub final_score: f32,
    /// Similarity from first-stage retrieval.
    pub similarity: f32,
}
