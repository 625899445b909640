use crate::catalog::{ItemRecord, MockCatalog};
use crate::embedding::MockEmbedder;
use crate::profile::Profile;
use crate::reranker::{Reranker, SharedReranker};
use crate::retrieval::MockVectorSearch;
use crate::scoring::Intent;

use super::types::{Recommendation, SkipReason};
use super::Recommender;

fn profile(user_id: &str, keywords: &[&str]) -> Profile {
    Profile {
        user_id: user_id.to_string(),
        skin_types: vec!["dry".to_string()],
        concerns: vec!["수분부족".to_string()],
        keywords: keywords.iter().map(|k| k.to_string()).collect(),
        tone: None,
    }
}

fn record(item_id: &str, brand: &str) -> ItemRecord {
    ItemRecord {
        item_id: item_id.to_string(),
        brand: Some(brand.to_string()),
        name: format!("product {item_id}"),
        ..Default::default()
    }
}

fn recommender(
    embedder: MockEmbedder,
    search: MockVectorSearch,
    catalog: MockCatalog,
) -> Recommender<MockEmbedder, MockVectorSearch, MockCatalog> {
    let reranker = SharedReranker::preloaded(Reranker::stub().unwrap());
    Recommender::new(embedder, search, catalog, reranker)
}

#[tokio::test]
async fn test_profile_not_found_skips_before_embedding() {
    let rec = recommender(
        MockEmbedder::new(),
        MockVectorSearch::new(),
        MockCatalog::new(),
    );

    let result = rec
        .recommend("missing-user", None, 3, Intent::Regular)
        .await
        .unwrap();

    assert_eq!(
        result.candidates().len(),
        0,
        "missing profile must yield no candidates"
    );
    match result {
        Recommendation::None { skip } => assert_eq!(
            skip,
            SkipReason::ProfileNotFound {
                user_id: "missing-user".to_string()
            }
        ),
        other => panic!("expected skip, got {other:?}"),
    }
    assert_eq!(rec.embedder.call_count(), 0);
    assert_eq!(rec.search.call_count(), 0);
}

#[tokio::test]
async fn test_query_text_uses_raw_keywords_only() {
    let catalog = MockCatalog::new();
    catalog.insert_profile(Profile {
        user_id: "u1".to_string(),
        keywords: vec!["moisturizing".to_string()],
        ..Default::default()
    });
    // Content holds only the Korean synonym, never the raw keyword.
    catalog.insert_record(record("p1", "brandA"));
    catalog.insert_content("p1", "보습 크림");

    let rec = recommender(
        MockEmbedder::new(),
        MockVectorSearch::with_pairs(&[("p1", 0.9)]),
        catalog,
    );

    let result = rec.recommend("u1", None, 1, Intent::Regular).await.unwrap();

    // The embedded text carries the profile keyword as entered; synonym
    // expansion must not leak into it.
    let embedded = rec.embedder.last_request().unwrap();
    assert!(embedded.contains("moisturizing"));
    assert!(
        !embedded.contains("보습"),
        "synonyms must not appear in the query text"
    );

    // The expansion still reaches the bonus scorer: the content matches only
    // through the synonym family.
    match result {
        Recommendation::Single(one) => {
            assert!(one.keyword_bonus > 0.0);
            assert!(one.bonus_detail.matched.contains(&"보습".to_string()));
        }
        other => panic!("expected single record, got {other:?}"),
    }
}

#[tokio::test]
async fn test_dimension_mismatch_skips_all_downstream_calls() {
    let catalog = MockCatalog::new();
    catalog.insert_profile(profile("u1", &["보습"]));

    let reranker = SharedReranker::preloaded(Reranker::stub().unwrap());
    let rec = Recommender::new(
        MockEmbedder::with_wrong_dim(768),
        MockVectorSearch::with_pairs(&[("p1", 0.9)]),
        catalog,
        reranker,
    );

    let result = rec.recommend("u1", None, 3, Intent::Regular).await;

    assert!(result.is_err());
    assert_eq!(rec.search.call_count(), 0, "retrieval must never be reached");
    assert_eq!(rec.catalog.record_call_count(), 0);
    assert_eq!(rec.catalog.content_call_count(), 0);
}

#[tokio::test]
async fn test_empty_pool_skips_before_catalog_calls() {
    let catalog = MockCatalog::new();
    catalog.insert_profile(profile("u1", &["보습"]));

    let rec = recommender(MockEmbedder::new(), MockVectorSearch::new(), catalog);

    let result = rec.recommend("u1", None, 3, Intent::Regular).await.unwrap();

    match result {
        Recommendation::None { skip } => assert_eq!(skip, SkipReason::EmptyCandidatePool),
        other => panic!("expected skip, got {other:?}"),
    }
    assert_eq!(rec.embedder.call_count(), 1);
    assert_eq!(rec.search.call_count(), 1);
    assert_eq!(rec.catalog.record_call_count(), 0);
    assert_eq!(rec.catalog.content_call_count(), 0);
}

#[tokio::test]
async fn test_no_content_skips_after_join() {
    let catalog = MockCatalog::new();
    catalog.insert_profile(profile("u1", &["보습"]));
    catalog.insert_record(record("p1", "brandA"));

    let rec = recommender(
        MockEmbedder::new(),
        MockVectorSearch::with_pairs(&[("p1", 0.9)]),
        catalog,
    );

    let result = rec.recommend("u1", None, 3, Intent::Regular).await.unwrap();

    match result {
        Recommendation::None { skip } => assert_eq!(skip, SkipReason::NoContentAvailable),
        other => panic!("expected skip, got {other:?}"),
    }
    assert_eq!(rec.catalog.content_call_count(), 1);
}

#[tokio::test]
async fn test_single_result_for_top_k_one() {
    let catalog = MockCatalog::new();
    catalog.insert_profile(profile("u1", &["보습"]));
    catalog.insert_record(record("p1", "brandA"));
    catalog.insert_record(record("p2", "brandB"));
    catalog.insert_content("p1", "보습 크림");
    catalog.insert_content("p2", "선크림");

    let rec = recommender(
        MockEmbedder::new(),
        MockVectorSearch::with_pairs(&[("p1", 0.9), ("p2", 0.8)]),
        catalog,
    );

    let result = rec.recommend("u1", None, 1, Intent::Regular).await.unwrap();

    match result {
        Recommendation::Single(one) => assert!(!one.item_id.is_empty()),
        other => panic!("expected single record, got {other:?}"),
    }
}

#[test]
fn test_skip_reason_display_distinguishes_filtering() {
    let filtered = SkipReason::NoRecordsAfterFilter { filtered: true };
    let unfiltered = SkipReason::NoRecordsAfterFilter { filtered: false };
    assert_ne!(filtered.to_string(), unfiltered.to_string());
    assert!(filtered.to_string().contains("allow-list"));
}

#[test]
fn test_recommendation_candidates_view() {
    let none = Recommendation::none(SkipReason::EmptyCandidatePool);
    assert!(none.is_none());
    assert!(none.candidates().is_empty());

    let ranked = Recommendation::Ranked(Vec::new());
    assert!(!ranked.is_none());
}
