use super::*;

#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.openai_base_url, DEFAULT_OPENAI_BASE_URL);
    assert_eq!(config.qdrant_url, DEFAULT_QDRANT_URL);
    assert_eq!(config.collection, DEFAULT_COLLECTION_NAME);
    assert_eq!(config.candidate_pool, CANDIDATE_POOL);
    assert_eq!(config.kw_alpha, KW_BONUS_ALPHA);
    assert!(config.reranker_path.is_none());
}

#[test]
fn test_validate_default_ok() {
    assert!(Config::default().validate().is_ok());
}

#[test]
fn test_validate_rejects_zero_pool() {
    let config = Config {
        candidate_pool: 0,
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::InvalidValue { .. })
    ));
}

#[test]
fn test_validate_rejects_missing_reranker_path() {
    let config = Config {
        reranker_path: Some(std::path::PathBuf::from("/definitely/not/a/real/path")),
        ..Config::default()
    };
    assert!(matches!(
        config.validate(),
        Err(ConfigError::PathNotFound { .. })
    ));
}
