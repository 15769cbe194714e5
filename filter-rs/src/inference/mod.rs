//! Inference service
//!
//! Two-state service: Uninitialized until an explicit `load()` pulls both
//! fitted artifacts from the store, Ready afterwards. The loaded pair is
//! immutable and shared read-only across concurrent requests; `predict`
//! takes only a read guard and per-call local data. A failed prediction
//! leaves the service Ready.

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::info;

use crate::classifier::{FittedClassifier, FittedVectorizer, Label};
use crate::error::{FilterError, Result};
use crate::store::ArtifactStore;

/// Structured result of one prediction
#[derive(Debug, Clone, Serialize)]
pub struct Prediction {
    pub label: Label,
}

/// The fitted pair, replaced atomically as a unit
struct LoadedModel {
    vectorizer: FittedVectorizer,
    classifier: FittedClassifier,
}

/// Serves predictions against artifacts loaded from a store
pub struct InferenceService<S: ArtifactStore> {
    store: S,
    vectorizer_name: String,
    classifier_name: String,
    model: RwLock<Option<LoadedModel>>,
}

impl<S: ArtifactStore> InferenceService<S> {
    pub fn new(
        store: S,
        vectorizer_name: impl Into<String>,
        classifier_name: impl Into<String>,
    ) -> Self {
        Self {
            store,
            vectorizer_name: vectorizer_name.into(),
            classifier_name: classifier_name.into(),
            model: RwLock::new(None),
        }
    }

    /// Load both artifacts and transition to Ready.
    ///
    /// Fails with `ModelNotReady` naming the cause when either artifact is
    /// absent, undecodable, or the pair is dimensionally inconsistent; the
    /// service keeps its previous state in that case.
    pub async fn load(&self) -> Result<()> {
        let vectorizer: FittedVectorizer = self
            .store
            .load_json(&self.vectorizer_name)
            .map_err(|e| {
                FilterError::ModelNotReady(format!("loading {}: {e}", self.vectorizer_name))
            })?;
        let classifier: FittedClassifier = self
            .store
            .load_json(&self.classifier_name)
            .map_err(|e| {
                FilterError::ModelNotReady(format!("loading {}: {e}", self.classifier_name))
            })?;

        // A classifier is only valid with the vectorizer that produced its
        // training features
        if classifier.dimension() != vectorizer.vocabulary_size() {
            return Err(FilterError::ModelNotReady(format!(
                "classifier dimension {} does not match vocabulary size {}",
                classifier.dimension(),
                vectorizer.vocabulary_size()
            )));
        }

        info!(
            vocabulary = vectorizer.vocabulary_size(),
            vectorizer = %self.vectorizer_name,
            classifier = %self.classifier_name,
            "model loaded"
        );

        let mut guard = self.model.write().await;
        *guard = Some(LoadedModel {
            vectorizer,
            classifier,
        });
        Ok(())
    }

    /// Whether the service has transitioned to Ready
    pub async fn is_ready(&self) -> bool {
        self.model.read().await.is_some()
    }

    /// Classify one message body.
    ///
    /// Fails with `ModelNotReady` before `load()` and `InvalidInput` on a
    /// blank body; otherwise a pure function of the loaded artifacts.
    pub async fn predict(&self, text: &str) -> Result<Prediction> {
        if text.trim().is_empty() {
            return Err(FilterError::InvalidInput(
                "empty message body".to_string(),
            ));
        }

        let guard = self.model.read().await;
        let model = guard.as_ref().ok_or_else(|| {
            FilterError::ModelNotReady("no artifacts loaded; call load() first".to_string())
        })?;

        let features = model.vectorizer.transform_one(text);
        let label = model.classifier.predict_one(&features);
        Ok(Prediction { label })
    }
}
