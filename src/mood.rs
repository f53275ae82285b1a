//! Mood timeline: a read-only projection of a session's mood history.

use crate::emotion::EmotionLabel;
use serde::Serialize;
use std::fmt;

/// Fixed plot colour per emotion label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodColor {
    Green,
    Blue,
    Red,
    Orange,
    Purple,
    Brown,
    Yellow,
    Gray,
}

impl MoodColor {
    /// Colour for a raw label. Synonyms are *not* merged here: `happy` and
    /// `joy` plot in different colours.
    pub fn for_label(label: &EmotionLabel) -> Self {
        match label.as_str() {
            "happy" => Self::Green,
            "sad" | "sadness" => Self::Blue,
            "angry" | "anger" => Self::Red,
            "fear" => Self::Orange,
            "surprise" => Self::Purple,
            "disgust" => Self::Brown,
            "joy" => Self::Yellow,
            _ => Self::Gray,
        }
    }

    /// CSS colour keyword.
    pub fn css_name(self) -> &'static str {
        match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Red => "red",
            Self::Orange => "orange",
            Self::Purple => "purple",
            Self::Brown => "brown",
            Self::Yellow => "yellow",
            Self::Gray => "gray",
        }
    }
}

impl fmt::Display for MoodColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_name())
    }
}

/// One plotted point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodPoint {
    /// Zero-based user-turn index.
    pub index: usize,
    pub label: EmotionLabel,
    pub color: MoodColor,
}

/// Project `history` into plot points, preserving order.
pub fn timeline(history: &[EmotionLabel]) -> Vec<MoodPoint> {
    history
        .iter()
        .enumerate()
        .map(|(index, label)| MoodPoint {
            index,
            label: label.clone(),
            color: MoodColor::for_label(label),
        })
        .collect()
}
