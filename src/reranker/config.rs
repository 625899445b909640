use std::path::PathBuf;

/// Maximum token sequence length for one query/content pair.
pub const MAX_SEQ_LEN: usize = 512;

/// Cross-encoder configuration.
///
/// Without a `model_dir` the reranker runs in stub mode: a deterministic
/// lexical-overlap score stands in for model inference, which keeps tests and
/// local development model-free.
#[derive(Debug, Clone, Default)]
pub struct RerankerConfig {
    /// Directory holding `config.json`, `model.safetensors` and
    /// `tokenizer.json` for a BERT-style sequence classification model.
    pub model_dir: Option<PathBuf>,
}

impl RerankerConfig {
    pub fn new<P: Into<PathBuf>>(model_dir: P) -> Self {
        Self {
            model_dir: Some(model_dir.into()),
        }
    }

    pub fn stub() -> Self {
        Self { model_dir: None }
    }

    pub fn validate(&self) -> Result<(), String> {
        if let Some(ref path) = self.model_dir
            && path.as_os_str().is_empty()
        {
            return Err("model_dir cannot be empty when provided".to_string());
        }
        Ok(())
    }

    pub fn from_env() -> Self {
        let model_dir = std::env::var("GLOWRANK_RERANKER_PATH")
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        Self { model_dir }
    }
}
