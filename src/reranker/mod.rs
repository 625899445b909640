//! Cross-encoder reranking.
//!
//! The pairwise relevance model is expensive to initialize, so one instance
//! is created per process (see [`SharedReranker`]) and reused across
//! requests. Scoring is a single batched inference call per request; the
//! batch is never parallelized.

pub mod config;
pub mod device;
pub mod error;
mod model;
pub mod shared;

#[cfg(test)]
mod tests;

pub use config::{MAX_SEQ_LEN, RerankerConfig};
pub use error::RerankerError;
pub use shared::SharedReranker;

use std::io;
use std::path::Path;

use candle_core::Tensor;
use tokenizers::{PaddingParams, Tokenizer, TruncationParams};
use tracing::{debug, info};

use device::select_device;
use model::CrossEncoderModel;

/// Pairwise relevance scorer over `(query, candidate content)` pairs.
pub struct Reranker {
    device: candle_core::Device,
    config: RerankerConfig,
    model_loaded: bool,
    model: Option<CrossEncoderModel>,
    tokenizer: Option<Tokenizer>,
}

impl std::fmt::Debug for Reranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reranker")
            .field("device", &format!("{:?}", self.device))
            .field("config", &self.config)
            .field("model_loaded", &self.model_loaded)
            .finish()
    }
}

impl Reranker {
    /// Loads the cross-encoder, or constructs a stub scorer when no model
    /// directory is configured.
    pub fn load(config: RerankerConfig) -> Result<Self, RerankerError> {
        if let Err(msg) = config.validate() {
            return Err(RerankerError::InvalidConfig { reason: msg });
        }

        let device = select_device()?;
        debug!(?device, "Selected compute device for cross-encoder");

        let Some(ref model_dir) = config.model_dir else {
            info!("No cross-encoder model path configured, operating in stub mode");
            return Ok(Self {
                device,
                config,
                model_loaded: false,
                model: None,
                tokenizer: None,
            });
        };

        for required in ["config.json", "model.safetensors"] {
            if !model_dir.join(required).exists() {
                return Err(RerankerError::ModelLoadFailed {
                    reason: format!("missing {required} in {}", model_dir.display()),
                });
            }
        }

        info!(model_dir = %model_dir.display(), "Loading cross-encoder model");

        let model = CrossEncoderModel::load(model_dir, &device).map_err(|e| {
            RerankerError::ModelLoadFailed {
                reason: format!("failed to load BERT model: {e}"),
            }
        })?;

        let tokenizer = load_pair_tokenizer(model_dir, MAX_SEQ_LEN).map_err(|e| {
            RerankerError::ModelLoadFailed {
                reason: format!("failed to load tokenizer: {e}"),
            }
        })?;

        info!("Cross-encoder model loaded successfully");

        Ok(Self {
            device,
            config,
            model_loaded: true,
            model: Some(model),
            tokenizer: Some(tokenizer),
        })
    }

    /// Stub scorer (no model files required).
    pub fn stub() -> Result<Self, RerankerError> {
        Self::load(RerankerConfig::stub())
    }

    pub fn is_model_loaded(&self) -> bool {
        self.model_loaded
    }

    pub fn config(&self) -> &RerankerConfig {
        &self.config
    }

    pub fn device(&self) -> &candle_core::Device {
        &self.device
    }

    /// Scores each `(query, candidate)` pair, returning one relevance score
    /// per candidate in input order. Scores carry whatever range the model
    /// naturally produces; no normalization is applied.
    ///
    /// All pairs go through one padded batch and one forward pass.
    pub fn score_pairs(
        &self,
        query: &str,
        candidates: &[&str],
    ) -> Result<Vec<f32>, RerankerError> {
        if candidates.is_empty() {
            return Ok(Vec::new());
        }

        debug!(
            query_len = query.len(),
            num_candidates = candidates.len(),
            model_loaded = self.model_loaded,
            "Scoring query-candidate pairs"
        );

        let (Some(model), Some(tokenizer)) = (&self.model, &self.tokenizer) else {
            return Ok(candidates
                .iter()
                .map(|candidate| self.compute_placeholder_score(query, candidate))
                .collect());
        };

        let inputs: Vec<(String, String)> = candidates
            .iter()
            .map(|candidate| (query.to_string(), candidate.to_string()))
            .collect();

        let encodings = tokenizer.encode_batch(inputs, true).map_err(|e| {
            RerankerError::TokenizationFailed {
                reason: e.to_string(),
            }
        })?;

        // Padding is configured to batch-longest, so every encoding shares
        // one sequence length.
        let batch = encodings.len();
        let seq_len = encodings[0].get_ids().len();

        let mut ids = Vec::with_capacity(batch * seq_len);
        let mut type_ids = Vec::with_capacity(batch * seq_len);
        let mut mask = Vec::with_capacity(batch * seq_len);
        for encoding in &encodings {
            ids.extend_from_slice(encoding.get_ids());
            type_ids.extend_from_slice(encoding.get_type_ids());
            mask.extend_from_slice(encoding.get_attention_mask());
        }

        let input_ids = Tensor::from_vec(ids, (batch, seq_len), &self.device)?;
        let token_type_ids = Tensor::from_vec(type_ids, (batch, seq_len), &self.device)?;
        let attention_mask = Tensor::from_vec(mask, (batch, seq_len), &self.device)?;

        let logits = model
            .forward(&input_ids, &token_type_ids, Some(&attention_mask))
            .map_err(|e| RerankerError::InferenceFailed {
                reason: e.to_string(),
            })?;

        let scores = logits.flatten_all()?.to_vec1::<f32>()?;

        debug!(
            top_score = scores.iter().cloned().fold(f32::NEG_INFINITY, f32::max),
            "Cross-encoder batch complete"
        );

        Ok(scores)
    }

    // Deterministic stand-in for model inference: stop-word-filtered word
    // overlap squashed through a sigmoid. Only used in stub mode.
    fn compute_placeholder_score(&self, query: &str, candidate: &str) -> f32 {
        use std::collections::HashSet;

        let stop_words: HashSet<&str> = [
            "a", "an", "the", "is", "are", "was", "were", "be", "been", "being", "have", "has",
            "had", "do", "does", "did", "will", "would", "could", "should", "may", "might", "must",
            "shall", "can", "to", "of", "in", "for", "on", "with", "at", "by", "from", "as",
            "into", "and", "but", "if", "or", "this", "that", "these", "those", "it", "its",
        ]
        .into_iter()
        .collect();

        let query_lower = query.to_lowercase();
        let query_words: HashSet<&str> = query_lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty() && !stop_words.contains(w))
            .collect();

        let candidate_lower = candidate.to_lowercase();
        let candidate_words: HashSet<&str> = candidate_lower
            .split(|c: char| !c.is_alphanumeric())
            .filter(|w| !w.is_empty() && !stop_words.contains(w))
            .collect();

        if query_words.is_empty() {
            let len_ratio = (query.len().min(candidate.len()) as f32)
                / (query.len().max(candidate.len()).max(1) as f32);
            return len_ratio * 0.3;
        }

        let matches = query_words.intersection(&candidate_words).count();
        let recall = matches as f32 / query_words.len() as f32;

        let union = query_words.union(&candidate_words).count();
        let jaccard = if union > 0 {
            matches as f32 / union as f32
        } else {
            0.0
        };

        let base_score = 0.6 * recall + 0.4 * jaccard;

        let normalized = 1.0 / (1.0 + (-8.0 * (base_score - 0.5)).exp());

        normalized.clamp(0.0, 1.0)
    }
}

/// Loads `tokenizer.json` from a model directory with truncation to `max_len`
/// and batch-longest padding, as cross-encoder pair input requires.
fn load_pair_tokenizer(model_dir: &Path, max_len: usize) -> io::Result<Tokenizer> {
    let tokenizer_path = model_dir.join("tokenizer.json");
    let mut tokenizer = Tokenizer::from_file(&tokenizer_path).map_err(io::Error::other)?;

    let truncation = TruncationParams {
        max_length: max_len,
        ..Default::default()
    };
    tokenizer
        .with_truncation(Some(truncation))
        .map_err(|e| io::Error::other(format!("Failed to configure truncation: {e}")))?;

    tokenizer.with_padding(Some(PaddingParams::default()));

    Ok(tokenizer)
}
