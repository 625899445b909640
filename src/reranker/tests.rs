use super::*;

#[test]
fn test_stub_loads_without_model_files() {
    let reranker = Reranker::stub().unwrap();
    assert!(!reranker.is_model_loaded());
}

#[test]
fn test_invalid_config_rejected() {
    let config = RerankerConfig {
        model_dir: Some(std::path::PathBuf::new()),
    };
    assert!(matches!(
        Reranker::load(config),
        Err(RerankerError::InvalidConfig { .. })
    ));
}

#[test]
fn test_missing_model_dir_fails() {
    let config = RerankerConfig::new("/definitely/not/a/real/model/dir");
    assert!(matches!(
        Reranker::load(config),
        Err(RerankerError::ModelLoadFailed { .. })
    ));
}

#[test]
fn test_score_pairs_empty_batch() {
    let reranker = Reranker::stub().unwrap();
    assert!(reranker.score_pairs("query", &[]).unwrap().is_empty());
}

#[test]
fn test_score_pairs_order_and_determinism() {
    let reranker = Reranker::stub().unwrap();
    let query = "hydrating cream for dry skin";
    let candidates = ["hydrating cream with ceramide for dry skin", "sun lotion"];

    let first = reranker.score_pairs(query, &candidates).unwrap();
    let second = reranker.score_pairs(query, &candidates).unwrap();

    assert_eq!(first.len(), 2);
    assert_eq!(first, second);
    // Strong lexical overlap must beat an unrelated candidate in stub mode.
    assert!(first[0] > first[1]);
}

#[tokio::test]
async fn test_shared_reranker_initializes_once() {
    let shared = SharedReranker::new(RerankerConfig::stub());
    assert!(!shared.is_initialized());

    let a = shared.get().await.unwrap();
    assert!(shared.is_initialized());

    let b = shared.get().await.unwrap();
    assert!(std::sync::Arc::ptr_eq(&a, &b));
}

#[tokio::test]
async fn test_shared_reranker_concurrent_first_use() {
    let shared = std::sync::Arc::new(SharedReranker::new(RerankerConfig::stub()));

    let tasks: Vec<_> = (0..8)
        .map(|_| {
            let shared = shared.clone();
            tokio::spawn(async move { shared.get().await.unwrap() })
        })
        .collect();

    let mut handles = Vec::new();
    for task in tasks {
        handles.push(task.await.unwrap());
    }

    for handle in &handles[1..] {
        assert!(std::sync::Arc::ptr_eq(&handles[0], handle));
    }
}

#[tokio::test]
async fn test_shared_reranker_preloaded() {
    let shared = SharedReranker::preloaded(Reranker::stub().unwrap());
    assert!(shared.is_initialized());
    assert!(!shared.get().await.unwrap().is_model_loaded());
}
