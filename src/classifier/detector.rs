//! Emotion detection adapter and the shared classifier handle.

use super::{EmotionClassifier, KeywordClassifier, RemoteClassifier, select_top};
use crate::config::{ClassifierBackend, ClassifierConfig};
use crate::emotion::EmotionLabel;
use crate::error::Result;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::OnceCell;
use tracing::{info, warn};

/// Constructor run at most once by [`SharedClassifier`].
pub type ClassifierFactory = Box<dyn Fn() -> Result<Arc<dyn EmotionClassifier>> + Send + Sync>;

/// Build the backend selected in `config`.
///
/// # Errors
///
/// Currently infallible for the built-in backends; the signature leaves room
/// for backends that load a model.
pub fn build_classifier(config: &ClassifierConfig) -> Result<Arc<dyn EmotionClassifier>> {
    let classifier: Arc<dyn EmotionClassifier> = match config.backend {
        ClassifierBackend::Keyword => Arc::new(KeywordClassifier::new()),
        ClassifierBackend::Remote => Arc::new(RemoteClassifier::new(config)),
    };
    info!(backend = classifier.name(), "emotion classifier ready");
    Ok(classifier)
}

/// Process-wide classifier handle, built lazily on first use.
///
/// Concurrent first callers wait on the same initialisation; the factory
/// runs at most once per successful init. A failed init is retried on the
/// next call.
pub struct SharedClassifier {
    cell: OnceCell<Arc<dyn EmotionClassifier>>,
    factory: ClassifierFactory,
}

impl SharedClassifier {
    pub fn new(factory: ClassifierFactory) -> Self {
        Self {
            cell: OnceCell::new(),
            factory,
        }
    }

    /// Handle whose factory builds the backend named in `config`.
    pub fn from_config(config: ClassifierConfig) -> Self {
        Self::new(Box::new(move || build_classifier(&config)))
    }

    /// Handle around an already constructed classifier.
    pub fn ready(classifier: Arc<dyn EmotionClassifier>) -> Self {
        Self::new(Box::new(move || -> Result<Arc<dyn EmotionClassifier>> {
            Ok(Arc::clone(&classifier))
        }))
    }

    pub fn is_initialized(&self) -> bool {
        self.cell.initialized()
    }

    /// The shared classifier, initialising it if needed.
    ///
    /// # Errors
    ///
    /// Propagates the factory error when initialisation fails.
    pub async fn get(&self) -> Result<Arc<dyn EmotionClassifier>> {
        self.cell
            .get_or_try_init(|| async { (self.factory)() })
            .await
            .map(Arc::clone)
    }
}

/// Reduces a classifier's output to a single [`EmotionLabel`].
///
/// Never fails: empty text, classifier errors, timeouts and empty
/// distributions all yield `neutral`.
#[derive(Clone)]
pub struct EmotionDetector {
    shared: Arc<SharedClassifier>,
    timeout: Duration,
}

impl EmotionDetector {
    pub fn new(shared: Arc<SharedClassifier>, timeout: Duration) -> Self {
        Self { shared, timeout }
    }

    /// Detector over the backend described by `config`.
    pub fn from_config(config: &ClassifierConfig) -> Self {
        Self::new(
            Arc::new(SharedClassifier::from_config(config.clone())),
            Duration::from_millis(config.timeout_ms),
        )
    }

    pub fn shared(&self) -> &Arc<SharedClassifier> {
        &self.shared
    }

    /// Detect the dominant emotion of `text`.
    pub async fn classify(&self, text: &str) -> EmotionLabel {
        if text.trim().is_empty() {
            return EmotionLabel::neutral();
        }

        let classifier = match self.shared.get().await {
            Ok(c) => c,
            Err(e) => {
                warn!(error = %e, "emotion classifier unavailable; using neutral");
                return EmotionLabel::neutral();
            }
        };

        match tokio::time::timeout(self.timeout, classifier.scores(text)).await {
            Ok(Ok(scores)) => select_top(&scores).unwrap_or_else(|| {
                warn!(backend = classifier.name(), "empty emotion distribution; using neutral");
                EmotionLabel::neutral()
            }),
            Ok(Err(e)) => {
                warn!(backend = classifier.name(), error = %e, "emotion classification failed; using neutral");
                EmotionLabel::neutral()
            }
            Err(_) => {
                warn!(
                    backend = classifier.name(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "emotion classification timed out; using neutral"
                );
                EmotionLabel::neutral()
            }
        }
    }
}
