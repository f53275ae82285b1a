//! Per-conversation state: the turn log and the mood history.
//!
//! A [`Session`] is an explicit value owned by whoever drives the
//! conversation. Both sequences are append-only; [`Session::reset`] is the
//! only way to shrink them and clears them together.

use crate::emotion::EmotionLabel;
use crate::language::LanguageKey;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// One entry of the conversation log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub text: String,
    /// Reply language for assistant turns; `None` for user turns.
    pub language: Option<LanguageKey>,
}

/// Conversation log plus the emotion of every user turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    id: Uuid,
    started_at: DateTime<Utc>,
    turns: Vec<Turn>,
    /// One label per user turn, in user-turn order.
    mood: Vec<EmotionLabel>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            started_at: Utc::now(),
            turns: Vec::new(),
            mood: Vec::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// Append a user turn and its detected emotion.
    pub fn record_user(&mut self, text: &str, emotion: EmotionLabel) {
        self.turns.push(Turn {
            role: Role::User,
            text: text.to_owned(),
            language: None,
        });
        self.mood.push(emotion);
    }

    /// Append an assistant reply in `language`. Returns its turn index.
    pub fn record_assistant(&mut self, text: &str, language: LanguageKey) -> usize {
        self.turns.push(Turn {
            role: Role::Assistant,
            text: text.to_owned(),
            language: Some(language),
        });
        self.turns.len() - 1
    }

    /// Turns in display order.
    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn turn(&self, index: usize) -> Option<&Turn> {
        self.turns.get(index)
    }

    /// Emotion labels indexed by user-turn order.
    pub fn mood_history(&self) -> &[EmotionLabel] {
        &self.mood
    }

    /// Index and value of the most recent assistant turn.
    pub fn last_assistant_turn(&self) -> Option<(usize, &Turn)> {
        self.turns
            .iter()
            .enumerate()
            .rev()
            .find(|(_, t)| t.role == Role::Assistant)
    }

    /// Log index of the `number`-th reply, counting from 1. Reply `n` answers
    /// user turn `n` and sits at mood-history position `n - 1`.
    pub fn reply_index(&self, number: usize) -> Option<usize> {
        let nth = number.checked_sub(1)?;
        self.turns
            .iter()
            .enumerate()
            .filter(|(_, t)| t.role == Role::Assistant)
            .nth(nth)
            .map(|(index, _)| index)
    }

    pub fn user_turn_count(&self) -> usize {
        self.mood.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Drop all turns and mood entries. The session id is kept.
    pub fn reset(&mut self) {
        self.turns.clear();
        self.mood.clear();
    }
}
