use super::*;
use crate::profile::Profile;

const SECTION_MARKERS: [&str; 5] = [
    "[중요 키워드 TOP - 최우선 반영]",
    "[피부타입]",
    "[피부고민]",
    "[추구 톤]",
    "[평가 기준 재강조]",
];

fn full_profile() -> Profile {
    Profile {
        user_id: "u-1".to_string(),
        skin_types: vec!["Dry".to_string()],
        concerns: vec!["Pores".to_string(), "Acne".to_string()],
        keywords: vec!["soothing".to_string(), "glow".to_string()],
        tone: Some("Cool_Summer".to_string()),
    }
}

fn assert_sections_in_order(text: &str) {
    let mut last = 0;
    for marker in SECTION_MARKERS {
        let pos = text[last..]
            .find(marker)
            .unwrap_or_else(|| panic!("missing section {marker}"));
        last += pos;
    }
}

#[test]
fn test_all_sections_present_in_fixed_order() {
    let text = build_query_text(&full_profile());
    assert_sections_in_order(&text);
}

#[test]
fn test_construction_total_on_empty_profile() {
    let text = build_query_text(&Profile::default());
    assert_sections_in_order(&text);
    assert!(text.contains("- (없음)"));
    assert!(text.contains("- 정보 없음"));
    assert!(text.contains("- 키워드 기반 우선 추천"));
}

#[test]
fn test_glosses_rendered_beside_tags() {
    let text = build_query_text(&full_profile());
    assert!(text.contains("Dry(건성)"));
    assert!(text.contains("Pores(모공)"));
    assert!(text.contains("쿨톤 여름"));
}

#[test]
fn test_keywords_lead_and_close() {
    let text = build_query_text(&full_profile());
    assert!(text.contains("- soothing, glow"));
    assert!(text.contains("핵심 키워드(soothing, glow)"));
}

#[test]
fn test_unmapped_tone_passes_through() {
    let profile = Profile {
        tone: Some("Custom_Tone".to_string()),
        ..Profile::default()
    };
    assert!(build_query_text(&profile).contains("- Custom_Tone"));
}

#[test]
fn test_deterministic_for_same_profile() {
    let profile = full_profile();
    assert_eq!(build_query_text(&profile), build_query_text(&profile));
}

#[test]
fn test_truncate_for_ce_hard_cut() {
    assert_eq!(truncate_for_ce("abcdef", 3), "abc");
    assert_eq!(truncate_for_ce("ab", 3), "ab");
    // Multi-byte safe: cuts on character boundaries.
    assert_eq!(truncate_for_ce("보습보습", 2), "보습");
}
