//! Canonical query text construction.
//!
//! One text representation per request, used both for embedding and as the
//! query side of every cross-encoder pair. Construction is total: missing
//! fields render as explicit "no information" markers so the template shape
//! is identical across requests.

#[cfg(test)]
mod tests;

use crate::lexicon::{concern_gloss, skin_type_gloss, tone_label, with_gloss};
use crate::profile::Profile;

/// Renders the five fixed sections: priority keywords, skin type, concerns,
/// tone, and a closing keyword re-emphasis. Never fails.
pub fn build_query_text(profile: &Profile) -> String {
    let skin_types = with_gloss(&profile.skin_types, skin_type_gloss);
    let concerns = with_gloss(&profile.concerns, concern_gloss);
    let keywords = &profile.keywords;

    let tone_kr = profile
        .tone
        .as_deref()
        .map(|t| tone_label(t).unwrap_or(t).to_string());

    let lines = [
        "스킨케어 제품 추천 쿼리 (키워드 최우선)".to_string(),
        String::new(),
        "[중요 키워드 TOP - 최우선 반영]".to_string(),
        if keywords.is_empty() {
            "- (없음)".to_string()
        } else {
            format!("- {}", keywords.join(", "))
        },
        "※ 위 키워드와 직접적으로 연결되는 효능/특징/제품 키워드가 포함된 제품을 최우선으로 평가한다."
            .to_string(),
        String::new(),
        "[피부타입]".to_string(),
        if skin_types.is_empty() {
            "- 정보 없음".to_string()
        } else {
            format!("- {}", skin_types.join(", "))
        },
        String::new(),
        "[피부고민]".to_string(),
        if concerns.is_empty() {
            "- 정보 없음".to_string()
        } else {
            format!("- {}", concerns.join(", "))
        },
        String::new(),
        "[추구 톤]".to_string(),
        match &tone_kr {
            Some(tone) => format!("- {tone}"),
            None => "- 정보 없음".to_string(),
        },
        String::new(),
        "[평가 기준 재강조]".to_string(),
        if keywords.is_empty() {
            "- 키워드 기반 우선 추천".to_string()
        } else {
            format!("- 핵심 키워드({})와 연관성이 높은 제품을 우선 추천", keywords.join(", "))
        },
    ];

    lines.join("\n")
}

/// Hard character cut applied to each side of a cross-encoder pair.
/// No sentence-boundary awareness; latency bounding only.
pub fn truncate_for_ce(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
