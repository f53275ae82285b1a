//! HTTP speech backend speaking the `translate_tts` protocol.

use super::{SpeechSynthesizer, split_into_chunks};
use crate::error::{EmotivaError, Result};
use async_trait::async_trait;
use tracing::debug;

/// Synthesizer that fetches one MP3 per text chunk and concatenates them.
///
/// MP3 frames are self-delimiting, so concatenated responses play back as
/// one stream.
pub struct HttpSpeechSynthesizer {
    base_url: String,
    max_chunk_chars: usize,
    client: reqwest::Client,
}

impl HttpSpeechSynthesizer {
    pub fn new(base_url: &str, max_chunk_chars: usize) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_owned(),
            max_chunk_chars,
            client: reqwest::Client::new(),
        }
    }

    fn chunk_url(&self, chunk: &str, locale: &str, idx: usize, total: usize) -> String {
        format!(
            "{}/translate_tts?ie=UTF-8&client=tw-ob&tl={}&q={}&total={total}&idx={idx}&textlen={}",
            self.base_url,
            urlencoding::encode(locale),
            urlencoding::encode(chunk),
            chunk.chars().count(),
        )
    }
}

#[async_trait]
impl SpeechSynthesizer for HttpSpeechSynthesizer {
    async fn synthesize(&self, text: &str, locale: &str) -> Result<Vec<u8>> {
        let chunks = split_into_chunks(text, self.max_chunk_chars);
        if chunks.is_empty() {
            return Err(EmotivaError::Tts("nothing to speak".to_owned()));
        }

        let total = chunks.len();
        let mut audio = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            let response = self
                .client
                .get(self.chunk_url(chunk, locale, idx, total))
                .send()
                .await?;
            if !response.status().is_success() {
                return Err(EmotivaError::Tts(format!(
                    "chunk {idx}/{total}: HTTP {}",
                    response.status()
                )));
            }
            let bytes = response.bytes().await?;
            if bytes.is_empty() {
                return Err(EmotivaError::Tts(format!("chunk {idx}/{total}: empty audio")));
            }
            audio.extend_from_slice(&bytes);
        }

        debug!(locale, chunks = total, bytes = audio.len(), "speech synthesized");
        Ok(audio)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn chunk_url_carries_locale_and_position() {
        let tts = HttpSpeechSynthesizer::new("http://tts.local/", 100);
        let url = tts.chunk_url("hello there", "hi", 1, 3);
        assert_eq!(
            url,
            "http://tts.local/translate_tts?ie=UTF-8&client=tw-ob&tl=hi&q=hello%20there&total=3&idx=1&textlen=11"
        );
    }

    #[tokio::test]
    async fn blank_text_is_an_error() {
        let tts = HttpSpeechSynthesizer::new("http://127.0.0.1:9", 100);
        assert!(matches!(
            tts.synthesize("  ", "en").await,
            Err(EmotivaError::Tts(_))
        ));
    }
}
