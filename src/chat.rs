//! Per-turn chat pipeline.
//!
//! ```text
//! text ─┬─> LanguageDetector ──────────────────> language ─┐
//!       └─> EmotionDetector ─────────────────> emotion ───┼─> ReplyEngine ─> Session
//!                                                         │
//!                          speak request ─> Speaker <─────┘ (on demand only)
//! ```
//!
//! Turns run to completion one at a time against a caller-owned [`Session`].
//! Adapter failures are absorbed by the adapters, so a non-empty utterance
//! always yields a reply.

use crate::classifier::EmotionDetector;
use crate::config::EmotivaConfig;
use crate::emotion::EmotionLabel;
use crate::error::{EmotivaError, Result};
use crate::language::{LanguageKey, LanguageSelection};
use crate::reply::{Reply, ReplyEngine};
use crate::session::{Role, Session};
use crate::translate::LanguageDetector;
use crate::tts::{Speaker, SpeechOutcome};
use tracing::info;

/// What a completed turn produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnOutcome {
    pub reply: Reply,
    pub emotion: EmotionLabel,
    /// Language the reply was rendered in.
    pub language: LanguageKey,
    /// Round-trip detector result, when the detector ran.
    pub detected: Option<LanguageKey>,
    /// Index of the assistant turn in the session log.
    pub assistant_index: usize,
}

/// Wires detection, reply selection and speech around a session.
pub struct ChatPipeline {
    engine: ReplyEngine,
    emotions: EmotionDetector,
    languages: LanguageDetector,
    speaker: Speaker,
    selection: LanguageSelection,
}

impl ChatPipeline {
    pub fn new(engine: ReplyEngine, emotions: EmotionDetector) -> Self {
        Self {
            engine,
            emotions,
            languages: LanguageDetector::disabled(),
            speaker: Speaker::disabled(),
            selection: LanguageSelection::Auto,
        }
    }

    /// Build every stage from `config`.
    ///
    /// # Errors
    ///
    /// Returns a config error for an unparsable `chat.language`, a language
    /// the template revision does not offer, or an incomplete template table.
    pub fn from_config(config: &EmotivaConfig) -> Result<Self> {
        let engine = ReplyEngine::for_revision(config.chat.revision)?;
        let selection = LanguageSelection::parse(&config.chat.language)?;
        check_selection(&engine, selection)?;
        info!(
            revision = ?config.chat.revision,
            selection = ?selection,
            classifier = ?config.classifier.backend,
            "chat pipeline configured"
        );
        Ok(Self::new(engine, EmotionDetector::from_config(&config.classifier))
            .with_language_detector(LanguageDetector::from_config(&config.translator))
            .with_speaker(Speaker::from_config(&config.tts))
            .with_selection(selection))
    }

    pub fn with_language_detector(mut self, detector: LanguageDetector) -> Self {
        self.languages = detector;
        self
    }

    pub fn with_speaker(mut self, speaker: Speaker) -> Self {
        self.speaker = speaker;
        self
    }

    pub fn with_selection(mut self, selection: LanguageSelection) -> Self {
        self.selection = selection;
        self
    }

    pub fn selection(&self) -> LanguageSelection {
        self.selection
    }

    /// Change the reply language for subsequent turns.
    ///
    /// # Errors
    ///
    /// Returns a config error when the templates do not offer the language;
    /// the current selection is kept.
    pub fn set_selection(&mut self, selection: LanguageSelection) -> Result<()> {
        check_selection(&self.engine, selection)?;
        self.selection = selection;
        Ok(())
    }

    pub fn engine(&self) -> &ReplyEngine {
        &self.engine
    }

    /// Run one user turn. Blank input is ignored and leaves `session`
    /// untouched.
    pub async fn handle_turn(&self, session: &mut Session, text: &str) -> Option<TurnOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let detected = if self.languages.is_enabled() {
            Some(self.languages.detect(text).await)
        } else {
            None
        };
        let requested = match self.selection {
            LanguageSelection::Auto => detected.unwrap_or(LanguageKey::English),
            LanguageSelection::Explicit(key) => key,
        };
        let language = if self.engine.table().covers(requested) {
            requested
        } else {
            LanguageKey::English
        };
        let emotion = self.emotions.classify(text).await;
        let reply = self.engine.compose(text, &emotion, language);

        session.record_user(text, emotion.clone());
        let assistant_index = session.record_assistant(&reply.text, language);
        info!(
            session = %session.id(),
            intent = %reply.intent,
            %emotion,
            %language,
            detected = ?detected,
            "turn handled"
        );

        Some(TurnOutcome {
            reply,
            emotion,
            language,
            detected,
            assistant_index,
        })
    }

    /// Speak the assistant turn at `index` in its stored language.
    pub async fn speak_turn(&self, session: &Session, index: usize) -> SpeechOutcome {
        let Some(turn) = session.turn(index) else {
            return SpeechOutcome::Unavailable(format!("no turn #{index}"));
        };
        if turn.role != Role::Assistant {
            return SpeechOutcome::Unavailable(format!("turn #{index} is not a reply"));
        }
        let locale = turn.language.unwrap_or(LanguageKey::English).speech_locale();
        self.speaker.speak(&turn.text, locale).await
    }

    /// Speak the most recent reply, if any.
    pub async fn speak_last(&self, session: &Session) -> SpeechOutcome {
        match session.last_assistant_turn() {
            Some((index, _)) => self.speak_turn(session, index).await,
            None => SpeechOutcome::Unavailable("nothing to speak yet".to_owned()),
        }
    }
}

fn check_selection(engine: &ReplyEngine, selection: LanguageSelection) -> Result<()> {
    match selection {
        LanguageSelection::Explicit(key) if !engine.table().covers(key) => {
            Err(EmotivaError::Config(format!(
                "reply language {key} is not offered by the templates"
            )))
        }
        _ => Ok(()),
    }
}
