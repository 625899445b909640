//! End-to-end recommendation pipeline.
//!
//! One request flows profile -> canonical query text -> embedding ->
//! similarity search -> detail join -> cross-encoder rerank + keyword bonus
//! -> intent ordering -> top-K. Synonym expansion derives from the profile
//! in parallel and feeds only the keyword bonus, never the query text. Reported skip conditions
//! resolve to an explicit [`Recommendation::None`]; collaborator failures
//! propagate as [`RecommendError`] and are converted to the same absence at
//! the outermost boundary.

pub mod error;
pub mod types;

#[cfg(test)]
mod tests;

pub use error::RecommendError;
pub use types::{Recommendation, SkipReason};

use std::collections::HashMap;

use tracing::{debug, error, info};

use crate::catalog::{CatalogStore, PostgrestCatalog};
use crate::config::Config;
use crate::constants::{CANDIDATE_POOL, CE_MAX_CHARS, KW_BONUS_ALPHA};
use crate::embedding::{EmbeddingClient, OpenAiEmbedder};
use crate::lexicon::{Season, expand_keywords, season_keywords};
use crate::query::{build_query_text, truncate_for_ce};
use crate::reranker::{RerankerConfig, SharedReranker};
use crate::retrieval::{QdrantSearch, SearchError, VectorSearch, sort_by_similarity};
use crate::scoring::{
    Intent, ScoredCandidate, apply_intent_order, combine_scores, keyword_bonus, select_top_k,
};

/// Request-scoped recommendation pipeline over pluggable collaborators.
pub struct Recommender<E, V, C> {
    embedder: E,
    search: V,
    catalog: C,
    reranker: SharedReranker,
    candidate_pool: u64,
    alpha: f32,
}

impl<E, V, C> std::fmt::Debug for Recommender<E, V, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("candidate_pool", &self.candidate_pool)
            .field("alpha", &self.alpha)
            .field("reranker", &self.reranker)
            .finish()
    }
}

impl Recommender<OpenAiEmbedder, QdrantSearch, PostgrestCatalog> {
    /// Wires the production collaborators from configuration.
    ///
    /// The reranker handle starts empty; the model loads on the first
    /// request that reaches the rerank stage.
    pub fn from_config(config: &Config) -> Result<Self, SearchError> {
        let embedder = OpenAiEmbedder::new(&config.openai_base_url, &config.openai_api_key);
        let search = QdrantSearch::new(&config.qdrant_url, &config.collection)?;
        let catalog = PostgrestCatalog::new(&config.postgrest_url, &config.postgrest_key);
        let reranker = SharedReranker::new(RerankerConfig {
            model_dir: config.reranker_path.clone(),
        });

        Ok(Self::new(embedder, search, catalog, reranker)
            .with_candidate_pool(config.candidate_pool)
            .with_alpha(config.kw_alpha))
    }
}

impl<E, V, C> Recommender<E, V, C>
where
    E: EmbeddingClient,
    V: VectorSearch,
    C: CatalogStore,
{
    pub fn new(embedder: E, search: V, catalog: C, reranker: SharedReranker) -> Self {
        Self {
            embedder,
            search,
            catalog,
            reranker,
            candidate_pool: CANDIDATE_POOL,
            alpha: KW_BONUS_ALPHA,
        }
    }

    /// Overrides the candidate pool bound.
    pub fn with_candidate_pool(mut self, pool: u64) -> Self {
        self.candidate_pool = pool;
        self
    }

    /// Overrides the keyword bonus weight.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    /// Runs the full pipeline for one user.
    ///
    /// Returns `Recommendation::None` for reported skip conditions (missing
    /// profile, empty pool, empty join, no content); collaborator failures
    /// surface as `Err`.
    pub async fn recommend(
        &self,
        user_id: &str,
        target_brands: Option<&[String]>,
        top_k: usize,
        intent: Intent,
    ) -> Result<Recommendation, RecommendError> {
        info!(user_id, %intent, top_k, "Starting recommendation request");

        let Some(profile) = self.catalog.fetch_profile(user_id).await? else {
            info!(user_id, "Profile not found, skipping request");
            return Ok(Recommendation::none(SkipReason::ProfileNotFound {
                user_id: user_id.to_string(),
            }));
        };

        // The expanded set feeds only the lexical bonus; the query text (and
        // with it the embedding and every cross-encoder pair) carries the raw
        // profile keywords.
        let expanded = expand_keywords(&profile.keywords);

        let (season, season_terms) = match intent {
            Intent::Weather => {
                let season = Season::current();
                let terms: Vec<String> = season_keywords(season)
                    .iter()
                    .map(|k| k.to_string())
                    .collect();
                debug!(%season, terms = terms.len(), "Seasonal keywords active");
                (Some(season), terms)
            }
            _ => (None, Vec::new()),
        };

        let query_text = build_query_text(&profile);
        let embedding = self.embedder.embed(&query_text).await?;

        let mut matches = self
            .search
            .search(embedding, self.candidate_pool, None)
            .await?;
        if matches.is_empty() {
            info!(user_id, "Empty candidate pool, skipping request");
            return Ok(Recommendation::none(SkipReason::EmptyCandidatePool));
        }
        sort_by_similarity(&mut matches);

        let ids: Vec<String> = matches.iter().map(|m| m.item_id.clone()).collect();
        let similarity: HashMap<&str, f32> = matches
            .iter()
            .map(|m| (m.item_id.as_str(), m.similarity))
            .collect();

        let records = self.catalog.fetch_records(&ids, target_brands).await?;
        if records.is_empty() {
            let filtered = target_brands.is_some_and(|brands| !brands.is_empty());
            info!(user_id, filtered, "No records after join, skipping request");
            return Ok(Recommendation::none(SkipReason::NoRecordsAfterFilter {
                filtered,
            }));
        }

        let record_ids: Vec<String> = records.iter().map(|r| r.item_id.clone()).collect();
        let content = self.catalog.fetch_content(&record_ids).await?;

        // Content is mandatory for the pairwise comparison; records without
        // it are dropped before reranking.
        let survivors: Vec<_> = records
            .into_iter()
            .filter(|r| content.contains_key(&r.item_id))
            .collect();
        if survivors.is_empty() {
            info!(user_id, "No candidate content available, skipping request");
            return Ok(Recommendation::none(SkipReason::NoContentAvailable));
        }

        debug!(
            pool = ids.len(),
            survivors = survivors.len(),
            "Candidates joined, reranking"
        );

        let query_side = truncate_for_ce(&query_text, CE_MAX_CHARS);
        let candidate_sides: Vec<&str> = survivors
            .iter()
            .map(|r| truncate_for_ce(&content[&r.item_id], CE_MAX_CHARS))
            .collect();

        let reranker = self.reranker.get().await?;
        let ce_scores = reranker.score_pairs(query_side, &candidate_sides)?;

        let mut scored: Vec<ScoredCandidate> = survivors
            .into_iter()
            .zip(ce_scores)
            .map(|(record, ce_score)| {
                let (bonus, detail) = keyword_bonus(
                    &expanded,
                    &content[&record.item_id],
                    &record.keywords,
                    &profile.concerns,
                    &season_terms,
                    season,
                );
                ScoredCandidate {
                    final_score: combine_scores(ce_score, bonus, self.alpha),
                    similarity: similarity
                        .get(record.item_id.as_str())
                        .copied()
                        .unwrap_or(0.0),
                    item_id: record.item_id,
                    brand: record.brand,
                    name: record.name,
                    category_major: record.category_major,
                    category_middle: record.category_middle,
                    category_small: record.category_small,
                    price_final: record.price_final,
                    discount_rate: record.discount_rate,
                    review_score: record.review_score,
                    review_count: record.review_count,
                    ce_score,
                    keyword_bonus: bonus,
                    bonus_detail: detail,
                }
            })
            .collect();

        apply_intent_order(&mut scored, intent);
        let mut top = select_top_k(scored, top_k);

        info!(
            user_id,
            returned = top.len(),
            top_score = top.first().map(|c| c.final_score).unwrap_or(0.0),
            "Recommendation request complete"
        );

        if top_k == 1 {
            // A surviving candidate is guaranteed at this point.
            let first = top.swap_remove(0);
            Ok(Recommendation::Single(Box::new(first)))
        } else {
            Ok(Recommendation::Ranked(top))
        }
    }

    /// Outermost boundary: any collaborator failure is logged and converted
    /// to an explicit no-recommendation result. The caller never sees an
    /// error from this entry point.
    pub async fn recommend_or_none(
        &self,
        user_id: &str,
        target_brands: Option<&[String]>,
        top_k: usize,
        intent: Intent,
    ) -> Recommendation {
        match self.recommend(user_id, target_brands, top_k, intent).await {
            Ok(result) => result,
            Err(err) => {
                error!(user_id, %intent, error = %err, "Recommendation pipeline failed");
                Recommendation::none(SkipReason::Internal {
                    message: err.to_string(),
                })
            }
        }
    }
}
