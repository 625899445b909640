use crate::lexicon::{season_priority_keywords, Season};

use super::types::BonusDetail;

/// Computes the bounded lexical-match bonus for one candidate.
///
/// Deterministic and pure: operates only on already-fetched text. The search
/// terms are the union of expanded user keywords, profile concerns, and (under
/// seasonal intent) the season's keyword list. A term hits when it appears
/// verbatim in the corpus or when its spacing-stripped form appears in the
/// spacing-stripped corpus, which tolerates formatting drift between
/// user-entered and catalog-entered text.
///
/// When a priority keyword set is active (a season is given), a hit whose term
/// has a substring relation with any priority entry counts double, and the
/// attainable maximum becomes `terms × 2`. The result is clamped to `[0, 1]`.
pub fn keyword_bonus(
    user_keywords: &[String],
    content: &str,
    item_keywords: &[String],
    concerns: &[String],
    season_keywords: &[String],
    season: Option<Season>,
) -> (f32, BonusDetail) {
    let mut terms: Vec<&str> = Vec::new();
    for source in [user_keywords, concerns, season_keywords] {
        terms.extend(source.iter().map(|k| k.trim()).filter(|k| !k.is_empty()));
    }

    if terms.is_empty() {
        return (0.0, BonusDetail::default());
    }

    let mut corpus = content.to_lowercase();
    if !item_keywords.is_empty() {
        corpus.push(' ');
        corpus.push_str(
            &item_keywords
                .iter()
                .map(|k| k.to_lowercase())
                .collect::<Vec<_>>()
                .join(" "),
        );
    }
    let corpus_stripped: String = corpus.chars().filter(|c| *c != ' ').collect();

    let priority: Vec<String> = season
        .map(|s| {
            season_priority_keywords(s)
                .iter()
                .map(|k| k.to_lowercase())
                .collect()
        })
        .unwrap_or_default();

    let mut hit_weight = 0.0f32;
    let mut matched = Vec::new();
    let mut priority_hits = 0usize;

    for term in &terms {
        let lower = term.to_lowercase();
        let stripped: String = lower.chars().filter(|c| *c != ' ').collect();

        if corpus.contains(&lower) || corpus_stripped.contains(&stripped) {
            matched.push(term.to_string());

            let is_priority = priority.iter().any(|pk| pk.contains(&lower) || lower.contains(pk));
            if is_priority {
                hit_weight += 2.0;
                priority_hits += 1;
            } else {
                hit_weight += 1.0;
            }
        }
    }

    let max_attainable = if priority.is_empty() {
        terms.len() as f32
    } else {
        terms.len() as f32 * 2.0
    };
    let score = (hit_weight / max_attainable.max(1.0)).clamp(0.0, 1.0);

    (
        score,
        BonusDetail {
            matched,
            hit_weight,
            total_terms: terms.len(),
            priority_hits,
        },
    )
}
