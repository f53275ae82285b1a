//! Error types for the emotiva chat pipeline.

/// Top-level error type for the chat companion.
///
/// Adapter layers ([`crate::classifier::EmotionDetector`],
/// [`crate::translate::LanguageDetector`], [`crate::tts::Speaker`]) absorb
/// these into documented fallbacks, so a chat turn never fails on them.
#[derive(Debug, thiserror::Error)]
pub enum EmotivaError {
    /// Emotion classifier backend error.
    #[error("classifier error: {0}")]
    Classifier(String),

    /// Translation service error.
    #[error("translate error: {0}")]
    Translate(String),

    /// Text-to-speech synthesis error.
    #[error("TTS error: {0}")]
    Tts(String),

    /// Configuration error, including incomplete reply tables.
    #[error("config error: {0}")]
    Config(String),

    /// HTTP transport error (connect, status, body decode).
    #[error("HTTP error: {0}")]
    Http(String),

    /// An external call exceeded its deadline.
    #[error("timed out: {0}")]
    Timeout(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for EmotivaError {
    fn from(e: reqwest::Error) -> Self {
        Self::Http(e.to_string())
    }
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, EmotivaError>;
