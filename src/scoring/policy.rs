use std::cmp::Ordering;

use tracing::debug;

use crate::constants::EVENT_DISCOUNT_WINDOW;

use super::types::ScoredCandidate;

/// Request-level intent selecting auxiliary keyword sources and the ordering
/// policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Intent {
    /// Relevance-only ordering.
    #[default]
    Regular,
    /// Promotional: prefer the best deal among the most relevant handful.
    Event,
    /// Seasonal: adds season keywords to the bonus inputs; ordering is
    /// relevance-only like regular.
    Weather,
}

impl Intent {
    /// Parses the wire representation; anything unrecognized is regular.
    pub fn parse(value: &str) -> Self {
        match value {
            "event" => Intent::Event,
            "weather" => Intent::Weather,
            _ => Intent::Regular,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::Regular => "regular",
            Intent::Event => "event",
            Intent::Weather => "weather",
        }
    }
}

impl std::fmt::Display for Intent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Combines a cross-encoder score and keyword bonus into the final score.
pub fn combine_scores(ce_score: f32, keyword_bonus: f32, alpha: f32) -> f32 {
    ce_score + alpha * keyword_bonus
}

fn sort_by_final_score(candidates: &mut [ScoredCandidate]) {
    candidates.sort_by(|a, b| {
        b.final_score
            .partial_cmp(&a.final_score)
            .unwrap_or(Ordering::Equal)
    });
}

/// Applies the intent's ordering policy in place.
///
/// Regular and weather order by final score alone. Event orders by final
/// score, then re-sorts the top slice (when at least
/// [`EVENT_DISCOUNT_WINDOW`] candidates survive) descending by discount rate,
/// leaving the remainder untouched: pick the most relevant handful, then
/// prefer the best deal among them.
pub fn apply_intent_order(candidates: &mut [ScoredCandidate], intent: Intent) {
    sort_by_final_score(candidates);

    if intent == Intent::Event && candidates.len() >= EVENT_DISCOUNT_WINDOW {
        let head = &mut candidates[..EVENT_DISCOUNT_WINDOW];
        head.sort_by(|a, b| {
            let a_discount = a.discount_rate.unwrap_or(0.0);
            let b_discount = b.discount_rate.unwrap_or(0.0);
            b_discount.partial_cmp(&a_discount).unwrap_or(Ordering::Equal)
        });

        debug!(
            top_discount = candidates[0].discount_rate.unwrap_or(0.0),
            "Event intent: discount-first head ordering applied"
        );
    }
}

/// Truncates the ordered list to the requested count.
pub fn select_top_k(mut candidates: Vec<ScoredCandidate>, top_k: usize) -> Vec<ScoredCandidate> {
    candidates.truncate(top_k);
    candidates
}
