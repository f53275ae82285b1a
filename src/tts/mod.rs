//! Text-to-speech output.
//!
//! Synthesis is only ever triggered by an explicit speak request. Each
//! request produces one uniquely named MP3 artifact on disk:
//!
//! - [`SpeechSynthesizer`]: backend contract (text + locale → MP3 bytes).
//! - [`HttpSpeechSynthesizer`]: Google `translate_tts` style endpoint.
//! - [`ArtifactWriter`]: collision-free file naming and writing.
//! - [`Speaker`]: the adapter callers use; never fails, reports
//!   [`SpeechOutcome::Unavailable`] instead.

mod artifact;
mod http;
mod speaker;

pub use artifact::{ArtifactWriter, AudioArtifact};
pub use http::HttpSpeechSynthesizer;
pub use speaker::{Speaker, SpeechOutcome};

use crate::error::Result;
use async_trait::async_trait;

/// Speech synthesis contract.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Render `text` in `locale` (ISO-639-1, e.g. `en`, `hi`) to MP3 bytes.
    async fn synthesize(&self, text: &str, locale: &str) -> Result<Vec<u8>>;
}

/// Split `text` on whitespace into chunks of at most `max_chars` characters.
///
/// Words longer than `max_chars` are split mid-word. `max_chars == 0` is
/// treated as 1.
pub fn split_into_chunks(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                chunks.push(piece.iter().collect());
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };
        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current_len = 0;
        }
        if !current.is_empty() {
            current.push(' ');
            current_len += 1;
        }
        current.push_str(word);
        current_len += word_len;
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
