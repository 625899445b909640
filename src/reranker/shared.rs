use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::info;

use super::config::RerankerConfig;
use super::error::RerankerError;
use super::Reranker;

/// Lazily-initialized, thread-safe handle to the process-wide cross-encoder.
///
/// Model loading happens at most once, on first use; racing first users all
/// wait on the same initialization. After that the cached instance is shared
/// read-only.
pub struct SharedReranker {
    cell: OnceCell<Arc<Reranker>>,
    config: RerankerConfig,
}

impl std::fmt::Debug for SharedReranker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SharedReranker")
            .field("initialized", &self.cell.initialized())
            .field("config", &self.config)
            .finish()
    }
}

impl SharedReranker {
    /// Creates an empty handle; the model loads on first [`get`](Self::get).
    pub fn new(config: RerankerConfig) -> Self {
        Self {
            cell: OnceCell::new(),
            config,
        }
    }

    /// Creates a handle around an already-loaded instance (tests, warm start).
    pub fn preloaded(reranker: Reranker) -> Self {
        let config = reranker.config().clone();
        Self {
            cell: OnceCell::new_with(Some(Arc::new(reranker))),
            config,
        }
    }

    /// Returns the shared instance, loading it on first call.
    pub async fn get(&self) -> Result<Arc<Reranker>, RerankerError> {
        self.cell
            .get_or_try_init(|| async {
                info!("Initializing shared cross-encoder instance");
                let config = self.config.clone();
                // Model loading is blocking (file IO + weight mapping).
                let reranker = tokio::task::spawn_blocking(move || Reranker::load(config))
                    .await
                    .map_err(|e| RerankerError::ModelLoadFailed {
                        reason: format!("model load task failed: {e}"),
                    })??;
                Ok(Arc::new(reranker))
            })
            .await
            .cloned()
    }

    /// Returns `true` once the underlying model has been initialized.
    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }
}
