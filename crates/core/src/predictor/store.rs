//! One-time loading of the predictor artifact.
//!
//! [`PredictorStore`] owns the loaded pipeline for the lifetime of the
//! process. The artifact is read at most once successfully; afterwards every
//! caller shares the same read-only instance. A failed load is not
//! remembered, so the next caller tries again (once) and picks up a repaired
//! artifact without a restart.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio::sync::OnceCell;

use super::{LinearPipeline, Predictor};
use crate::error::CoreError;

/// Default artifact location, relative to the working directory.
pub const DEFAULT_MODEL_PATH: &str = "ml_models/complete_pipeline.json";

pub struct PredictorStore {
    path: PathBuf,
    predictor: OnceCell<Arc<dyn Predictor>>,
}

impl fmt::Debug for PredictorStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PredictorStore")
            .field("path", &self.path)
            .field("loaded", &self.is_loaded())
            .finish()
    }
}

impl PredictorStore {
    /// A store that loads from `path` on first use.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            predictor: OnceCell::new(),
        }
    }

    /// A store that already holds a predictor and never touches disk.
    pub fn with_predictor(predictor: Arc<dyn Predictor>) -> Self {
        Self {
            path: PathBuf::new(),
            predictor: OnceCell::new_with(Some(predictor)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_loaded(&self) -> bool {
        self.predictor.initialized()
    }

    /// The loaded predictor, loading it first if needed.
    ///
    /// Concurrent first callers wait on a single load.
    pub async fn get(&self) -> Result<Arc<dyn Predictor>, CoreError> {
        self.predictor
            .get_or_try_init(|| load_predictor(&self.path))
            .await
            .cloned()
    }

    /// Load eagerly, typically at startup.
    pub async fn preload(&self) -> Result<(), CoreError> {
        self.get().await.map(|_| ())
    }
}

/// Read and parse a pipeline artifact from disk.
pub async fn load_predictor(path: &Path) -> Result<Arc<dyn Predictor>, CoreError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(CoreError::PredictorUnavailable(format!(
                "Pipeline not found: {}",
                path.display()
            )));
        }
        Err(e) => {
            return Err(CoreError::PredictorUnavailable(format!(
                "Failed to read pipeline {}: {e}",
                path.display()
            )));
        }
    };

    let pipeline = LinearPipeline::from_json(&bytes)?;
    tracing::info!(
        path = %path.display(),
        numeric_terms = pipeline.numeric.len(),
        categorical_terms = pipeline.categorical.len(),
        "Loaded regression pipeline"
    );
    Ok(Arc::new(pipeline))
}
