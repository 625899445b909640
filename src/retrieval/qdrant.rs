use qdrant_client::Qdrant;
use qdrant_client::qdrant::point_id::PointIdOptions;
use qdrant_client::qdrant::{Condition, Filter, ScoredPoint, SearchPointsBuilder};

use super::error::SearchError;
use super::{CandidateMatch, VectorSearch, sort_by_similarity};

/// Qdrant-backed similarity search over the item vector collection.
#[derive(Clone)]
pub struct QdrantSearch {
    client: Qdrant,
    url: String,
    collection: String,
}

impl QdrantSearch {
    /// Creates a client for `url` searching `collection`.
    pub fn new(url: &str, collection: impl Into<String>) -> Result<Self, SearchError> {
        let client = Qdrant::from_url(url)
            .build()
            .map_err(|e| SearchError::ConnectionFailed {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        Ok(Self {
            client,
            url: url.to_string(),
            collection: collection.into(),
        })
    }

    /// Returns the configured URL.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Performs a basic health check request.
    pub async fn health_check(&self) -> Result<(), SearchError> {
        self.client
            .health_check()
            .await
            .map_err(|e| SearchError::ConnectionFailed {
                url: self.url.clone(),
                message: e.to_string(),
            })?;
        Ok(())
    }

    fn match_from_scored_point(point: ScoredPoint) -> Option<CandidateMatch> {
        let similarity = point.score;

        // Prefer the item id payload field; fall back to the point id.
        if let Some(id) = point.payload.get("item_id").and_then(|v| v.as_str()) {
            return Some(CandidateMatch {
                item_id: id.to_string(),
                similarity,
            });
        }

        let item_id = match point.id.and_then(|pid| pid.point_id_options) {
            Some(PointIdOptions::Num(n)) => n.to_string(),
            Some(PointIdOptions::Uuid(u)) => u,
            None => return None,
        };

        Some(CandidateMatch {
            item_id,
            similarity,
        })
    }
}

impl VectorSearch for QdrantSearch {
    async fn search(
        &self,
        vector: Vec<f32>,
        limit: u64,
        brand_filter: Option<&str>,
    ) -> Result<Vec<CandidateMatch>, SearchError> {
        let mut builder =
            SearchPointsBuilder::new(&self.collection, vector, limit).with_payload(true);

        if let Some(brand) = brand_filter {
            let filter = Filter::must([Condition::matches("brand", brand.to_string())]);
            builder = builder.filter(filter);
        }

        let response =
            self.client
                .search_points(builder)
                .await
                .map_err(|e| SearchError::SearchFailed {
                    collection: self.collection.clone(),
                    message: e.to_string(),
                })?;

        let mut matches: Vec<CandidateMatch> = response
            .result
            .into_iter()
            .filter_map(Self::match_from_scored_point)
            .collect();

        sort_by_similarity(&mut matches);

        Ok(matches)
    }
}
