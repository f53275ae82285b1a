//! Reply template tables and their completeness check.

use super::templates::{CORE_MESSAGES, EMPATHY_EXTENDED, EMPATHY_MINIMAL};
use crate::emotion::{EmotionLabel, Empathy};
use crate::error::{EmotivaError, Result};
use crate::intent::IntentCategory;
use crate::language::LanguageKey;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

/// Which built-in template set to load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateRevision {
    /// English and Hindi only; empathy for happy, sad, angry, confused.
    Minimal,
    /// Full language selector; empathy for happy, sad, angry, fear.
    #[default]
    Extended,
}

impl TemplateRevision {
    /// Languages the revision offers in its selector.
    pub fn languages(self) -> &'static [LanguageKey] {
        match self {
            Self::Minimal => &[LanguageKey::English, LanguageKey::Hindi],
            Self::Extended => &LanguageKey::ALL,
        }
    }
}

/// Static knowledge base: core messages per (intent, language) and empathy
/// prefixes per (emotion, language).
///
/// Lookups never fail. A language outside [`languages`](Self::languages)
/// gets the English core message and no prefix; an emotion without an entry
/// gets no prefix. A *covered* language missing a core message is a
/// configuration defect reported by [`validate`](Self::validate).
#[derive(Debug, Clone)]
pub struct ReplyTable {
    languages: Vec<LanguageKey>,
    core: HashMap<(IntentCategory, LanguageKey), String>,
    empathy: HashMap<(Empathy, LanguageKey), String>,
}

impl ReplyTable {
    /// Empty table covering `languages`. Populate with
    /// [`insert_core`](Self::insert_core) / [`insert_empathy`](Self::insert_empathy).
    pub fn new(languages: impl Into<Vec<LanguageKey>>) -> Self {
        Self {
            languages: languages.into(),
            core: HashMap::new(),
            empathy: HashMap::new(),
        }
    }

    /// Build one of the compiled-in revisions.
    pub fn for_revision(revision: TemplateRevision) -> Self {
        let mut table = Self::new(revision.languages());
        for &(intent, language, text) in CORE_MESSAGES {
            if revision.languages().contains(&language) {
                table.insert_core(intent, language, text);
            }
        }
        let empathy = match revision {
            TemplateRevision::Minimal => EMPATHY_MINIMAL,
            TemplateRevision::Extended => EMPATHY_EXTENDED,
        };
        for &(emotion, language, text) in empathy {
            table.insert_empathy(emotion, language, text);
        }
        table
    }

    pub fn insert_core(&mut self, intent: IntentCategory, language: LanguageKey, text: &str) {
        self.core.insert((intent, language), text.to_owned());
    }

    pub fn insert_empathy(&mut self, emotion: Empathy, language: LanguageKey, text: &str) {
        self.empathy.insert((emotion, language), text.to_owned());
    }

    /// Languages this table offers, in selector order.
    pub fn languages(&self) -> &[LanguageKey] {
        &self.languages
    }

    pub fn covers(&self, language: LanguageKey) -> bool {
        self.languages.contains(&language)
    }

    /// Check every covered language has a non-empty core message for every
    /// intent, and that English is covered (it backs uncovered languages).
    ///
    /// # Errors
    ///
    /// Returns [`EmotivaError::Config`] listing every missing pair.
    pub fn validate(&self) -> Result<()> {
        if !self.covers(LanguageKey::English) {
            return Err(EmotivaError::Config(
                "reply table must cover English".to_owned(),
            ));
        }
        let missing: Vec<String> = self
            .languages
            .iter()
            .flat_map(|&language| {
                IntentCategory::ALL
                    .into_iter()
                    .filter(move |&intent| {
                        self.core
                            .get(&(intent, language))
                            .is_none_or(|text| text.trim().is_empty())
                    })
                    .map(move |intent| format!("{intent}/{language}"))
            })
            .collect();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(EmotivaError::Config(format!(
                "reply table missing core messages: {}",
                missing.join(", ")
            )))
        }
    }

    /// Core message for `intent` in `language`.
    ///
    /// Uncovered languages fall back to English.
    pub fn core_message(&self, intent: IntentCategory, language: LanguageKey) -> &str {
        let language = if self.covers(language) {
            language
        } else {
            warn!(%language, "language not covered by reply table; using English");
            LanguageKey::English
        };
        self.core
            .get(&(intent, language))
            .map(String::as_str)
            .unwrap_or_default()
    }

    /// Empathy prefix for `emotion` in `language`, or `""` when there is none.
    pub fn empathy_prefix(&self, emotion: &EmotionLabel, language: LanguageKey) -> &str {
        if !self.covers(language) {
            return "";
        }
        emotion
            .empathy()
            .and_then(|e| self.empathy.get(&(e, language)))
            .map(String::as_str)
            .unwrap_or_default()
    }
}
