//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `GLOWRANK_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::path::PathBuf;

use crate::constants::{CANDIDATE_POOL, KW_BONUS_ALPHA};

/// Default embedding service base URL when `GLOWRANK_OPENAI_BASE_URL` is not set.
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default Qdrant URL used when `GLOWRANK_QDRANT_URL` is not set.
pub const DEFAULT_QDRANT_URL: &str = "http://localhost:6334";

/// Default item vector collection name.
pub const DEFAULT_COLLECTION_NAME: &str = "items";

/// Pipeline configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `GLOWRANK_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Embedding service base URL. Default: `https://api.openai.com/v1`.
    pub openai_base_url: String,

    /// Embedding service API key.
    pub openai_api_key: String,

    /// Qdrant endpoint URL. Default: `http://localhost:6334`.
    pub qdrant_url: String,

    /// Item vector collection name. Default: `items`.
    pub collection: String,

    /// PostgREST base URL for the record/profile store.
    pub postgrest_url: String,

    /// PostgREST API key.
    pub postgrest_key: String,

    /// Path to the cross-encoder model directory (BERT + tokenizer).
    /// When unset the reranker runs in stub mode.
    pub reranker_path: Option<PathBuf>,

    /// Candidate pool bound for similarity search. Default: `30`.
    pub candidate_pool: u64,

    /// Keyword bonus weight α. Default: `1.2`.
    pub kw_alpha: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            openai_api_key: String::new(),
            qdrant_url: DEFAULT_QDRANT_URL.to_string(),
            collection: DEFAULT_COLLECTION_NAME.to_string(),
            postgrest_url: String::new(),
            postgrest_key: String::new(),
            reranker_path: None,
            candidate_pool: CANDIDATE_POOL,
            kw_alpha: KW_BONUS_ALPHA,
        }
    }
}

impl Config {
    const ENV_OPENAI_BASE_URL: &'static str = "GLOWRANK_OPENAI_BASE_URL";
    const ENV_OPENAI_API_KEY: &'static str = "GLOWRANK_OPENAI_API_KEY";
    const ENV_QDRANT_URL: &'static str = "GLOWRANK_QDRANT_URL";
    const ENV_COLLECTION: &'static str = "GLOWRANK_COLLECTION";
    const ENV_POSTGREST_URL: &'static str = "GLOWRANK_POSTGREST_URL";
    const ENV_POSTGREST_KEY: &'static str = "GLOWRANK_POSTGREST_KEY";
    const ENV_RERANKER_PATH: &'static str = "GLOWRANK_RERANKER_PATH";
    const ENV_CANDIDATE_POOL: &'static str = "GLOWRANK_CANDIDATE_POOL";
    const ENV_KW_ALPHA: &'static str = "GLOWRANK_KW_ALPHA";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        Ok(Self {
            openai_base_url: Self::parse_string_from_env(
                Self::ENV_OPENAI_BASE_URL,
                defaults.openai_base_url,
            ),
            openai_api_key: Self::parse_string_from_env(
                Self::ENV_OPENAI_API_KEY,
                defaults.openai_api_key,
            ),
            qdrant_url: Self::parse_string_from_env(Self::ENV_QDRANT_URL, defaults.qdrant_url),
            collection: Self::parse_string_from_env(Self::ENV_COLLECTION, defaults.collection),
            postgrest_url: Self::parse_string_from_env(
                Self::ENV_POSTGREST_URL,
                defaults.postgrest_url,
            ),
            postgrest_key: Self::parse_string_from_env(
                Self::ENV_POSTGREST_KEY,
                defaults.postgrest_key,
            ),
            reranker_path: Self::parse_optional_path_from_env(Self::ENV_RERANKER_PATH),
            candidate_pool: Self::parse_u64_from_env(
                Self::ENV_CANDIDATE_POOL,
                defaults.candidate_pool,
            )?,
            kw_alpha: Self::parse_f32_from_env(Self::ENV_KW_ALPHA, defaults.kw_alpha)?,
        })
    }

    /// Validates paths and basic invariants (does not touch the network).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.reranker_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        if self.candidate_pool == 0 {
            return Err(ConfigError::InvalidValue {
                var: Self::ENV_CANDIDATE_POOL.to_string(),
                value: "0".to_string(),
            });
        }

        Ok(())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> Result<u64, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                value,
            }),
            Err(_) => Ok(default),
        }
    }

    fn parse_f32_from_env(var_name: &str, default: f32) -> Result<f32, ConfigError> {
        match env::var(var_name) {
            Ok(value) => value.parse().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                value,
            }),
            Err(_) => Ok(default),
        }
    }
}
