use super::*;
use serde_json::json;

#[test]
fn test_normalize_list_native_array() {
    let v = json!(["Dry", " Oily ", ""]);
    assert_eq!(normalize_list(&v), vec!["Dry", "Oily"]);
}

#[test]
fn test_normalize_list_braced_string() {
    let v = json!("{\"Pores\",\"Acne\"}");
    assert_eq!(normalize_list(&v), vec!["Pores", "Acne"]);
}

#[test]
fn test_normalize_list_plain_comma_string() {
    let v = json!("soothing, moisturizing");
    assert_eq!(normalize_list(&v), vec!["soothing", "moisturizing"]);
}

#[test]
fn test_normalize_list_bare_scalar() {
    assert_eq!(normalize_list(&json!("Sensitive")), vec!["Sensitive"]);
    assert_eq!(normalize_list(&json!(42)), vec!["42"]);
}

#[test]
fn test_normalize_list_null() {
    assert!(normalize_list(&Value::Null).is_empty());
}

#[test]
fn test_normalize_list_array_with_numbers() {
    let v = json!([1, "two", null]);
    assert_eq!(normalize_list(&v), vec!["1", "two"]);
}

#[test]
fn test_profile_from_row_list_fields() {
    let row = json!({
        "user_id": "u-1",
        "skin_type": ["Dry"],
        "skin_concerns": "{Pores,Acne}",
        "keywords": ["soothing", "glow"],
        "preferred_tone": "Cool_Summer"
    });
    let profile = Profile::from_row(&row).unwrap();
    assert_eq!(profile.user_id, "u-1");
    assert_eq!(profile.skin_types, vec!["Dry"]);
    assert_eq!(profile.concerns, vec!["Pores", "Acne"]);
    assert_eq!(profile.keywords, vec!["soothing", "glow"]);
    assert_eq!(profile.tone.as_deref(), Some("Cool_Summer"));
}

#[test]
fn test_profile_tone_list_takes_first() {
    let row = json!({
        "user_id": "u-2",
        "preferred_tone": ["Warm_Spring", "Neutral"]
    });
    let profile = Profile::from_row(&row).unwrap();
    assert_eq!(profile.tone.as_deref(), Some("Warm_Spring"));
}

#[test]
fn test_profile_missing_fields_default_empty() {
    let row = json!({ "user_id": "u-3" });
    let profile = Profile::from_row(&row).unwrap();
    assert!(profile.skin_types.is_empty());
    assert!(profile.concerns.is_empty());
    assert!(profile.keywords.is_empty());
    assert!(profile.tone.is_none());
}

#[test]
fn test_profile_tone_empty_list_is_none() {
    let row = json!({ "user_id": "u-4", "preferred_tone": [] });
    let profile = Profile::from_row(&row).unwrap();
    assert!(profile.tone.is_none());
}
