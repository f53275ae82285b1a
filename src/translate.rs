//! Translation-based language detection.
//!
//! The detector is deliberately binary: it translates the utterance to
//! English and, if anything changed, calls it Hindi. It cannot tell Tamil
//! from Hindi and will call English text with odd spelling Hindi if the
//! translator "corrects" it. Every failure means English.

use crate::config::TranslatorConfig;
use crate::error::{EmotivaError, Result};
use crate::language::LanguageKey;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Translation service contract.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translate `text` into English, auto-detecting the source language.
    async fn translate_to_english(&self, text: &str) -> Result<String>;
}

/// Google-style `translate_a/single` endpoint client.
pub struct HttpTranslator {
    base_url: String,
    client: reqwest::Client,
}

impl HttpTranslator {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            client: reqwest::Client::new(),
        }
    }

    fn request_url(&self, text: &str) -> String {
        format!(
            "{}/translate_a/single?client=gtx&sl=auto&tl=en&dt=t&q={}",
            self.base_url,
            urlencoding::encode(text)
        )
    }
}

/// Concatenate the translated segments of a `translate_a/single` response.
///
/// The body is a nested array whose first element lists
/// `[translated, original, ..]` segments.
fn parse_segments(body: &serde_json::Value) -> Result<String> {
    let segments = body
        .get(0)
        .and_then(serde_json::Value::as_array)
        .ok_or_else(|| EmotivaError::Translate("response has no segment list".to_owned()))?;
    Ok(segments
        .iter()
        .filter_map(|segment| segment.get(0).and_then(serde_json::Value::as_str))
        .collect())
}

#[async_trait]
impl Translator for HttpTranslator {
    async fn translate_to_english(&self, text: &str) -> Result<String> {
        let response = self.client.get(self.request_url(text)).send().await?;
        if !response.status().is_success() {
            return Err(EmotivaError::Translate(format!(
                "HTTP {}",
                response.status()
            )));
        }
        let body: serde_json::Value = response
            .json()
            .await
            .map_err(|e| EmotivaError::Translate(format!("bad response body: {e}")))?;
        parse_segments(&body)
    }
}

/// Binary en/hi detector over a [`Translator`].
#[derive(Clone)]
pub struct LanguageDetector {
    translator: Option<Arc<dyn Translator>>,
    timeout: Duration,
}

impl LanguageDetector {
    pub fn new(translator: Arc<dyn Translator>, timeout: Duration) -> Self {
        Self {
            translator: Some(translator),
            timeout,
        }
    }

    /// Detector that always answers English.
    pub fn disabled() -> Self {
        Self {
            translator: None,
            timeout: Duration::ZERO,
        }
    }

    pub fn from_config(config: &TranslatorConfig) -> Self {
        if config.enabled {
            Self::new(
                Arc::new(HttpTranslator::new(&config.api_url)),
                Duration::from_millis(config.timeout_ms),
            )
        } else {
            Self::disabled()
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.translator.is_some()
    }

    /// [`LanguageKey::English`] if translating `text` to English leaves it
    /// byte-for-byte unchanged, [`LanguageKey::Hindi`] otherwise.
    pub async fn detect(&self, text: &str) -> LanguageKey {
        let Some(translator) = &self.translator else {
            return LanguageKey::English;
        };
        if text.trim().is_empty() {
            return LanguageKey::English;
        }

        match tokio::time::timeout(self.timeout, translator.translate_to_english(text)).await {
            Ok(Ok(translated)) => {
                let language = if translated == text {
                    LanguageKey::English
                } else {
                    LanguageKey::Hindi
                };
                debug!(%language, "language detected");
                language
            }
            Ok(Err(e)) => {
                warn!(error = %e, "translation failed; defaulting to English");
                LanguageKey::English
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "translation timed out; defaulting to English"
                );
                LanguageKey::English
            }
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;
    use serde_json::json;

    struct Echo;

    #[async_trait]
    impl Translator for Echo {
        async fn translate_to_english(&self, text: &str) -> Result<String> {
            Ok(text.to_owned())
        }
    }

    struct Rewrites;

    #[async_trait]
    impl Translator for Rewrites {
        async fn translate_to_english(&self, _text: &str) -> Result<String> {
            Ok("Hello, how are you?".to_owned())
        }
    }

    struct Broken;

    #[async_trait]
    impl Translator for Broken {
        async fn translate_to_english(&self, _text: &str) -> Result<String> {
            Err(EmotivaError::Translate("connection refused".to_owned()))
        }
    }

    struct Hangs;

    #[async_trait]
    impl Translator for Hangs {
        async fn translate_to_english(&self, text: &str) -> Result<String> {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(format!("{text}!"))
        }
    }

    fn detector(t: impl Translator + 'static) -> LanguageDetector {
        LanguageDetector::new(Arc::new(t), Duration::from_millis(50))
    }

    #[tokio::test]
    async fn unchanged_translation_is_english() {
        assert_eq!(detector(Echo).detect("hello").await, LanguageKey::English);
    }

    #[tokio::test]
    async fn changed_translation_is_hindi() {
        assert_eq!(
            detector(Rewrites).detect("नमस्ते, आप कैसे हैं?").await,
            LanguageKey::Hindi
        );
    }

    #[tokio::test]
    async fn failure_is_english() {
        assert_eq!(detector(Broken).detect("bonjour").await, LanguageKey::English);
    }

    #[tokio::test]
    async fn timeout_is_english() {
        assert_eq!(detector(Hangs).detect("bonjour").await, LanguageKey::English);
    }

    #[tokio::test]
    async fn disabled_is_english() {
        let d = LanguageDetector::disabled();
        assert!(!d.is_enabled());
        assert_eq!(d.detect("नमस्ते").await, LanguageKey::English);
    }

    #[test]
    fn segments_are_concatenated() {
        let body = json!([[["Hello, ", "नमस्ते, ", null], ["how are you?", "आप कैसे हैं?", null]], null, "hi"]);
        assert_eq!(parse_segments(&body).unwrap(), "Hello, how are you?");
    }

    #[test]
    fn malformed_body_is_error() {
        assert!(parse_segments(&json!({"error": "quota"})).is_err());
    }

    #[test]
    fn request_url_encodes_text() {
        let t = HttpTranslator::new("http://localhost:9999/");
        assert_eq!(
            t.request_url("a b&c"),
            "http://localhost:9999/translate_a/single?client=gtx&sl=auto&tl=en&dt=t&q=a%20b%26c"
        );
    }
}
