//! Speech adapter with deadline and "unavailable" fallback.

use super::{ArtifactWriter, AudioArtifact, HttpSpeechSynthesizer, SpeechSynthesizer};
use crate::config::TtsConfig;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Result of a speak request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SpeechOutcome {
    /// Audio was synthesized and written.
    Ready(AudioArtifact),
    /// Speech could not be produced; the reason is for display only.
    Unavailable(String),
}

impl SpeechOutcome {
    pub fn artifact(&self) -> Option<&AudioArtifact> {
        match self {
            Self::Ready(a) => Some(a),
            Self::Unavailable(_) => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

/// Turns reply text into an audio artifact on request.
#[derive(Clone)]
pub struct Speaker {
    synthesizer: Option<Arc<dyn SpeechSynthesizer>>,
    writer: ArtifactWriter,
    timeout: Duration,
}

impl Speaker {
    pub fn new(
        synthesizer: Arc<dyn SpeechSynthesizer>,
        writer: ArtifactWriter,
        timeout: Duration,
    ) -> Self {
        Self {
            synthesizer: Some(synthesizer),
            writer,
            timeout,
        }
    }

    /// Speaker that reports every request as unavailable.
    pub fn disabled() -> Self {
        Self {
            synthesizer: None,
            writer: ArtifactWriter::new(std::env::temp_dir()),
            timeout: Duration::ZERO,
        }
    }

    pub fn from_config(config: &TtsConfig) -> Self {
        if config.enabled {
            Self::new(
                Arc::new(HttpSpeechSynthesizer::new(
                    &config.api_url,
                    config.max_chunk_chars,
                )),
                ArtifactWriter::new(&config.output_dir),
                Duration::from_millis(config.timeout_ms),
            )
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.synthesizer.is_some()
    }

    /// Synthesize `text` in `locale` and write it to a fresh artifact.
    pub async fn speak(&self, text: &str, locale: &str) -> SpeechOutcome {
        let Some(synthesizer) = &self.synthesizer else {
            return SpeechOutcome::Unavailable("speech output is disabled".to_owned());
        };
        if text.trim().is_empty() {
            return SpeechOutcome::Unavailable("nothing to speak".to_owned());
        }

        let audio = match tokio::time::timeout(self.timeout, synthesizer.synthesize(text, locale))
            .await
        {
            Ok(Ok(audio)) => audio,
            Ok(Err(e)) => {
                warn!(locale, error = %e, "speech synthesis failed");
                return SpeechOutcome::Unavailable(e.to_string());
            }
            Err(_) => {
                warn!(
                    locale,
                    timeout_ms = self.timeout.as_millis() as u64,
                    "speech synthesis timed out"
                );
                return SpeechOutcome::Unavailable("speech synthesis timed out".to_owned());
            }
        };

        match self.writer.write(&audio, locale).await {
            Ok(artifact) => {
                info!(path = %artifact.path.display(), locale, "speech artifact written");
                SpeechOutcome::Ready(artifact)
            }
            Err(e) => {
                warn!(error = %e, "could not write speech artifact");
                SpeechOutcome::Unavailable(e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use crate::error::{EmotivaError, Result};
    use async_trait::async_trait;

    struct Beep;

    #[async_trait]
    impl SpeechSynthesizer for Beep {
        async fn synthesize(&self, text: &str, locale: &str) -> Result<Vec<u8>> {
            Ok(format!("{locale}:{text}").into_bytes())
        }
    }

    struct Mute;

    #[async_trait]
    impl SpeechSynthesizer for Mute {
        async fn synthesize(&self, _text: &str, _locale: &str) -> Result<Vec<u8>> {
            Err(EmotivaError::Tts("voice not installed".to_owned()))
        }
    }

    struct Sluggish;

    #[async_trait]
    impl SpeechSynthesizer for Sluggish {
        async fn synthesize(&self, _text: &str, _locale: &str) -> Result<Vec<u8>> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(vec![1])
        }
    }

    fn speaker(s: impl SpeechSynthesizer + 'static, dir: &std::path::Path) -> Speaker {
        Speaker::new(Arc::new(s), ArtifactWriter::new(dir), Duration::from_millis(50))
    }

    #[tokio::test]
    async fn ready_outcome_writes_audio() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = speaker(Beep, dir.path()).speak("hello", "hi").await;
        let artifact = outcome.artifact().unwrap();
        assert_eq!(std::fs::read(&artifact.path).unwrap(), b"hi:hello");
        assert_eq!(artifact.locale, "hi");
    }

    #[tokio::test]
    async fn synthesis_error_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = speaker(Mute, dir.path()).speak("hello", "en").await;
        assert!(matches!(outcome, SpeechOutcome::Unavailable(ref r) if r.contains("voice not installed")));
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[tokio::test]
    async fn timeout_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = speaker(Sluggish, dir.path()).speak("hello", "en").await;
        assert!(!outcome.is_ready());
    }

    #[tokio::test]
    async fn disabled_and_blank_are_unavailable() {
        assert!(!Speaker::disabled().speak("hello", "en").await.is_ready());
        let dir = tempfile::tempdir().unwrap();
        assert!(!speaker(Beep, dir.path()).speak(" ", "en").await.is_ready());
    }
}
