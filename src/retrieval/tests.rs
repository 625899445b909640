use super::mock::MockVectorSearch;
use super::*;

#[test]
fn test_sort_by_similarity_descending() {
    let mut matches = vec![
        CandidateMatch {
            item_id: "a".to_string(),
            similarity: 0.2,
        },
        CandidateMatch {
            item_id: "b".to_string(),
            similarity: 0.9,
        },
        CandidateMatch {
            item_id: "c".to_string(),
            similarity: 0.5,
        },
    ];
    sort_by_similarity(&mut matches);
    let ids: Vec<&str> = matches.iter().map(|m| m.item_id.as_str()).collect();
    assert_eq!(ids, ["b", "c", "a"]);
}

#[test]
fn test_sort_keeps_native_order_for_ties() {
    let mut matches = vec![
        CandidateMatch {
            item_id: "first".to_string(),
            similarity: 0.5,
        },
        CandidateMatch {
            item_id: "second".to_string(),
            similarity: 0.5,
        },
    ];
    sort_by_similarity(&mut matches);
    assert_eq!(matches[0].item_id, "first");
    assert_eq!(matches[1].item_id, "second");
}

#[tokio::test]
async fn test_mock_search_truncates_to_limit() {
    let search = MockVectorSearch::with_pairs(&[("a", 0.1), ("b", 0.9), ("c", 0.5)]);
    let matches = search.search(vec![0.0; 4], 2, None).await.unwrap();
    assert_eq!(matches.len(), 2);
    assert_eq!(matches[0].item_id, "b");
    assert_eq!(matches[1].item_id, "c");
    assert_eq!(search.call_count(), 1);
}

#[tokio::test]
async fn test_mock_search_empty_pool() {
    let search = MockVectorSearch::new();
    let matches = search.search(vec![0.0; 4], 30, None).await.unwrap();
    assert!(matches.is_empty());
}
