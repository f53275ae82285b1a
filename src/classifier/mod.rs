//! Emotion classification.
//!
//! The classifier itself is an external capability behind the
//! [`EmotionClassifier`] trait. Callers go through [`EmotionDetector`], which
//! reduces the score distribution to one lower-cased label and turns every
//! failure into `neutral`.
//!
//! Backends:
//! - [`KeywordClassifier`]: offline keyword density over the seven stock labels.
//! - [`RemoteClassifier`]: hosted text-classification model over HTTP.

mod detector;
mod keyword;
mod remote;

pub use detector::{ClassifierFactory, EmotionDetector, SharedClassifier, build_classifier};
pub use keyword::KeywordClassifier;
pub use remote::RemoteClassifier;

use crate::emotion::EmotionLabel;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One entry of a classifier's output distribution.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmotionScore {
    pub label: String,
    pub score: f32,
}

impl EmotionScore {
    pub fn new(label: &str, score: f32) -> Self {
        Self {
            label: label.to_owned(),
            score,
        }
    }
}

/// Emotion classifier contract. Implementations must hold no per-request
/// mutable state; one instance serves every session.
#[async_trait]
pub trait EmotionClassifier: Send + Sync {
    /// Stable backend identifier for logs (e.g. `keyword`, `remote`).
    fn name(&self) -> &'static str;

    /// Score distribution over the backend's label vocabulary.
    async fn scores(&self, text: &str) -> Result<Vec<EmotionScore>>;
}

/// Pick the highest-scoring label, lower-cased.
///
/// Exact ties go to the earliest entry. Returns `None` for an empty
/// distribution. NaN scores never win.
pub fn select_top(scores: &[EmotionScore]) -> Option<EmotionLabel> {
    let mut best: Option<&EmotionScore> = None;
    for entry in scores {
        if entry.score.is_nan() {
            continue;
        }
        if best.is_none_or(|b| entry.score > b.score) {
            best = Some(entry);
        }
    }
    best.map(|b| EmotionLabel::new(&b.label))
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn picks_maximum_and_lowercases() {
        let scores = vec![
            EmotionScore::new("Neutral", 0.2),
            EmotionScore::new("JOY", 0.7),
            EmotionScore::new("sadness", 0.1),
        ];
        assert_eq!(select_top(&scores).unwrap().as_str(), "joy");
    }

    #[test]
    fn exact_tie_goes_to_first() {
        let scores = vec![
            EmotionScore::new("fear", 0.4),
            EmotionScore::new("anger", 0.4),
            EmotionScore::new("joy", 0.2),
        ];
        assert_eq!(select_top(&scores).unwrap().as_str(), "fear");
    }

    #[test]
    fn empty_distribution_has_no_label() {
        assert!(select_top(&[]).is_none());
    }

    #[test]
    fn nan_never_wins() {
        let scores = vec![
            EmotionScore::new("anger", f32::NAN),
            EmotionScore::new("joy", 0.1),
        ];
        assert_eq!(select_top(&scores).unwrap().as_str(), "joy");
    }
}
