use super::mock::MockEmbedder;
use super::*;
use crate::constants::DimensionMismatch;

#[tokio::test]
async fn test_mock_embedder_returns_fixed_vector() {
    let embedder = MockEmbedder::with_vector(vec![0.5; EMBED_DIM]);
    let vector = embedder.embed("query text").await.unwrap();
    assert_eq!(vector.len(), EMBED_DIM);
    assert_eq!(vector[0], 0.5);
    assert_eq!(embedder.call_count(), 1);
}

#[tokio::test]
async fn test_mock_embedder_wrong_dim_fails() {
    let embedder = MockEmbedder::with_wrong_dim(768);
    let err = embedder.embed("query text").await.unwrap_err();
    assert!(matches!(
        err,
        EmbeddingError::DimensionMismatch(DimensionMismatch {
            expected: EMBED_DIM,
            actual: 768
        })
    ));
}

#[test]
fn test_openai_embedder_defaults() {
    let embedder = OpenAiEmbedder::new("https://api.openai.com/v1", "key");
    assert_eq!(embedder.dim(), EMBED_DIM);
}

#[test]
fn test_request_payload_shape() {
    let request = EmbeddingRequest {
        model: EMBED_MODEL,
        input: ["hello"],
        encoding_format: "float",
    };
    let json = serde_json::to_value(&request).unwrap();
    assert_eq!(json["model"], EMBED_MODEL);
    assert_eq!(json["input"][0], "hello");
    assert_eq!(json["encoding_format"], "float");
}

#[test]
fn test_response_parsing() {
    let body = r#"{"data":[{"embedding":[0.1,0.2,0.3]}],"model":"text-embedding-3-small"}"#;
    let parsed: EmbeddingResponse = serde_json::from_str(body).unwrap();
    assert_eq!(parsed.data[0].embedding, vec![0.1, 0.2, 0.3]);
}
