//! Emotiva: emotion-aware multilingual chat companion.
//!
//! Each user turn flows through a short pipeline:
//! Language detection → Emotion detection → Reply selection → Session log,
//! with speech synthesis available on demand for any reply.
//!
//! # Architecture
//!
//! - **Reply selection** ([`reply`]): pure template engine. Keyword intent
//!   picks the core message, the detected emotion picks an empathy prefix.
//! - **Emotion detection** ([`classifier`]): pluggable classifier behind a
//!   lazily initialised shared handle; failures read as `neutral`.
//! - **Language detection** ([`translate`]): binary en/hi heuristic via a
//!   translation round trip; failures read as English.
//! - **Speech** ([`tts`]): HTTP synthesizer writing uniquely named MP3 files.
//! - **State** ([`session`], [`mood`]): explicit per-conversation log and the
//!   mood timeline derived from it.

pub mod chat;
pub mod classifier;
pub mod config;
pub mod emotion;
pub mod error;
pub mod intent;
pub mod language;
pub mod mood;
pub mod reply;
pub mod session;
pub mod translate;
pub mod tts;

pub use chat::{ChatPipeline, TurnOutcome};
pub use config::EmotivaConfig;
pub use emotion::EmotionLabel;
pub use error::{EmotivaError, Result};
pub use intent::IntentCategory;
pub use language::{LanguageKey, LanguageSelection};
pub use reply::{ReplyEngine, TemplateRevision};
pub use session::Session;
