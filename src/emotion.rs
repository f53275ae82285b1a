//! Emotion labels as produced by the classifier.
//!
//! The classifier's vocabulary is open: the stock model emits
//! `anger, disgust, fear, joy, neutral, sadness, surprise`, other models use
//! `happy`, `sad`, `angry` and friends. [`EmotionLabel`] therefore keeps the
//! raw lower-cased label and only collapses synonyms when an empathy prefix
//! is looked up (see [`EmotionLabel::empathy`]). Unknown labels are valid
//! values; they simply carry no empathy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Label the classifier falls back to when it cannot decide.
pub const NEUTRAL: &str = "neutral";

/// Lower-cased emotion label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmotionLabel(String);

impl EmotionLabel {
    /// Normalise a raw classifier label (trimmed, lower-cased).
    pub fn new(raw: &str) -> Self {
        Self(raw.trim().to_lowercase())
    }

    /// The `neutral` label used for every classifier fallback.
    pub fn neutral() -> Self {
        Self(NEUTRAL.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Empathy class this label maps to, if any.
    pub fn empathy(&self) -> Option<Empathy> {
        match self.0.as_str() {
            "happy" | "joy" => Some(Empathy::Happy),
            "sad" | "sadness" => Some(Empathy::Sad),
            "angry" | "anger" => Some(Empathy::Angry),
            "confused" => Some(Empathy::Confused),
            "fear" => Some(Empathy::Fear),
            _ => None,
        }
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmotionLabel {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

/// Emotions that have an empathy prefix in at least one template revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Empathy {
    Happy,
    Sad,
    Angry,
    Confused,
    Fear,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn labels_are_lowercased() {
        assert_eq!(EmotionLabel::new("  Joy ").as_str(), "joy");
    }

    #[test]
    fn synonyms_share_an_empathy_class() {
        assert_eq!(EmotionLabel::new("happy").empathy(), Some(Empathy::Happy));
        assert_eq!(EmotionLabel::new("joy").empathy(), Some(Empathy::Happy));
        assert_eq!(EmotionLabel::new("sadness").empathy(), Some(Empathy::Sad));
        assert_eq!(EmotionLabel::new("ANGER").empathy(), Some(Empathy::Angry));
    }

    #[test]
    fn unknown_labels_have_no_empathy() {
        for raw in ["neutral", "surprise", "disgust", "bored", ""] {
            assert_eq!(EmotionLabel::new(raw).empathy(), None, "{raw}");
        }
    }
}
