//! Offline keyword classifier.
//!
//! Splits the lower-cased text into words and counts per-label keyword hits,
//! reporting each label's share of the hits. Keywords match whole words (or
//! whole word runs for phrases like "sick of"), so "unhappy" is not "happy". With no hits the whole mass goes to `neutral`.
//! Labels follow the stock model's vocabulary so downstream tables and
//! colours behave the same with either backend.

use super::{EmotionClassifier, EmotionScore};
use crate::emotion::NEUTRAL;
use crate::error::Result;
use async_trait::async_trait;

// ── Keyword tables ──────────────────────────────────────────────────────

/// (label, keywords), in the stock model's label order.
const EMOTION_TABLE: &[(&str, &[&str])] = &[
    (
        "anger",
        &[
            "angry",
            "furious",
            "annoyed",
            "hate",
            "upset",
            "frustrated",
            "irritated",
            "ridiculous",
            "worst",
            "unacceptable",
        ],
    ),
    (
        "disgust",
        &["disgusting", "gross", "yuck", "nasty", "sick of", "revolting"],
    ),
    (
        "fear",
        &[
            "scared",
            "afraid",
            "fear",
            "worried",
            "anxious",
            "nervous",
            "terrified",
            "panic",
        ],
    ),
    (
        "joy",
        &[
            "happy",
            "glad",
            "great",
            "awesome",
            "love",
            "thank",
            "thanks",
            "wonderful",
            "excited",
            "yay",
            "😊",
        ],
    ),
    (NEUTRAL, &[]),
    (
        "sadness",
        &[
            "sad",
            "unhappy",
            "depressed",
            "lonely",
            "heartbroken",
            "crying",
            "miserable",
            "grief",
        ],
    ),
    (
        "surprise",
        &["wow", "surprised", "unexpected", "shocked", "no way", "omg"],
    ),
];

/// Keyword-density emotion classifier. Stateless and free to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordClassifier;

impl KeywordClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous scoring used by the async trait method.
    pub fn score_text(text: &str) -> Vec<EmotionScore> {
        let lower = text.to_lowercase();
        let words = words(&lower);
        let hits: Vec<usize> = EMOTION_TABLE
            .iter()
            .map(|(_, keywords)| {
                keywords
                    .iter()
                    .filter(|kw| keyword_matches(&words, &lower, kw))
                    .count()
            })
            .collect();
        let total: usize = hits.iter().sum();

        EMOTION_TABLE
            .iter()
            .zip(hits)
            .map(|(&(label, _), count)| {
                let score = if total == 0 {
                    if label == NEUTRAL { 1.0 } else { 0.0 }
                } else {
                    count as f32 / total as f32
                };
                EmotionScore::new(label, score)
            })
            .collect()
    }
}

/// Alphanumeric runs of `text`, in order.
fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect()
}

/// Whether `keyword` occurs as a whole word run in `words`. Keywords with no
/// alphanumeric content (emoji) fall back to a plain substring check.
fn keyword_matches(words: &[&str], lower: &str, keyword: &str) -> bool {
    let needle = self::words(keyword);
    if needle.is_empty() {
        return lower.contains(keyword);
    }
    words.windows(needle.len()).any(|run| run == needle.as_slice())
}

#[async_trait]
impl EmotionClassifier for KeywordClassifier {
    fn name(&self) -> &'static str {
        "keyword"
    }

    async fn scores(&self, text: &str) -> Result<Vec<EmotionScore>> {
        Ok(Self::score_text(text))
    }
}
