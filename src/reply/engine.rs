//! Emotion-conditioned reply selection.

use super::table::{ReplyTable, TemplateRevision};
use crate::emotion::EmotionLabel;
use crate::error::Result;
use crate::intent::{IntentCategory, classify_intent};
use crate::language::LanguageKey;
use tracing::debug;

/// A composed reply and how it was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub intent: IntentCategory,
    /// Empathy prefix, `""` when the emotion has none.
    pub prefix: String,
    pub core: String,
    /// `prefix` immediately followed by `core`.
    pub text: String,
}

/// Pure reply generator over a validated [`ReplyTable`].
///
/// Output depends only on the three inputs and the table, so identical calls
/// always produce identical strings.
#[derive(Debug, Clone)]
pub struct ReplyEngine {
    table: ReplyTable,
}

impl ReplyEngine {
    /// Wrap `table` after checking it is complete.
    ///
    /// # Errors
    ///
    /// Returns a config error if a covered language misses a core message.
    pub fn new(table: ReplyTable) -> Result<Self> {
        table.validate()?;
        Ok(Self { table })
    }

    /// Engine over one of the compiled-in template revisions.
    ///
    /// # Errors
    ///
    /// Only fails if the compiled-in tables are themselves incomplete.
    pub fn for_revision(revision: TemplateRevision) -> Result<Self> {
        Self::new(ReplyTable::for_revision(revision))
    }

    pub fn table(&self) -> &ReplyTable {
        &self.table
    }

    /// Languages this engine can reply in.
    pub fn languages(&self) -> &[LanguageKey] {
        self.table.languages()
    }

    /// Compose a reply, keeping the intermediate choices.
    pub fn compose(
        &self,
        utterance: &str,
        emotion: &EmotionLabel,
        language: LanguageKey,
    ) -> Reply {
        let intent = classify_intent(utterance);
        let prefix = self.table.empathy_prefix(emotion, language);
        let core = self.table.core_message(intent, language);
        debug!(%intent, %emotion, %language, empathy = !prefix.is_empty(), "reply composed");
        Reply {
            intent,
            prefix: prefix.to_owned(),
            core: core.to_owned(),
            text: format!("{prefix}{core}"),
        }
    }

    /// Reply text for `utterance` given its detected emotion and the reply
    /// language.
    pub fn generate_reply(
        &self,
        utterance: &str,
        emotion: &EmotionLabel,
        language: LanguageKey,
    ) -> String {
        self.compose(utterance, emotion, language).text
    }
}
