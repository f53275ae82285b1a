//! Configuration types for the chat companion.

use crate::error::{EmotivaError, Result};
use crate::reply::TemplateRevision;
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotivaConfig {
    /// Emotion classifier settings.
    pub classifier: ClassifierConfig,
    /// Translation-based language detection settings.
    pub translator: TranslatorConfig,
    /// Text-to-speech settings.
    pub tts: TtsConfig,
    /// Reply language and template settings.
    pub chat: ChatConfig,
}

/// Which emotion classifier backend to use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassifierBackend {
    /// Offline keyword heuristic; no network access.
    #[default]
    Keyword,
    /// Hosted text-classification model over HTTP.
    Remote,
}

/// Emotion classifier configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    pub backend: ClassifierBackend,
    /// Base URL of the inference API (remote backend only).
    pub api_url: String,
    /// Model identifier appended to `{api_url}/models/`.
    pub model_id: String,
    /// Bearer token; empty means no `Authorization` header.
    pub api_key: String,
    /// Per-call deadline. On expiry the turn is classified `neutral`.
    pub timeout_ms: u64,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            backend: ClassifierBackend::default(),
            api_url: "https://api-inference.huggingface.co".to_owned(),
            model_id: "j-hartmann/emotion-english-distilroberta-base".to_owned(),
            api_key: String::new(),
            timeout_ms: 5_000,
        }
    }
}

/// Translation service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslatorConfig {
    /// When disabled every utterance is detected as English.
    pub enabled: bool,
    pub api_url: String,
    /// Per-call deadline. On expiry the utterance is detected as English.
    pub timeout_ms: u64,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: "https://translate.googleapis.com".to_owned(),
            timeout_ms: 3_000,
        }
    }
}

/// Text-to-speech configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TtsConfig {
    /// When disabled every speak request reports "unavailable".
    pub enabled: bool,
    pub api_url: String,
    /// Directory receiving one `.mp3` per speak request.
    pub output_dir: PathBuf,
    /// Deadline for a whole speak request (all chunks).
    pub timeout_ms: u64,
    /// Longest text chunk sent per synthesis request.
    pub max_chunk_chars: usize,
}

impl Default for TtsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            api_url: "https://translate.google.com".to_owned(),
            output_dir: default_audio_dir(),
            timeout_ms: 10_000,
            max_chunk_chars: 100,
        }
    }
}

/// Reply language and template configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// `"auto"` to detect en/hi per turn, or a language name/code.
    pub language: String,
    /// Built-in template set.
    pub revision: TemplateRevision,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            language: "auto".to_owned(),
            revision: TemplateRevision::default(),
        }
    }
}

fn default_audio_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("emotiva")
        .join("audio")
}

impl EmotivaConfig {
    /// Read `path` as TOML. Sections and fields the file leaves out keep
    /// their defaults, so a file holding only `[chat]` is a full config.
    ///
    /// # Errors
    ///
    /// I/O error if the file is unreadable, [`EmotivaError::Config`] naming
    /// the file if it is not valid TOML for this layout.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content)
            .map_err(|e| EmotivaError::Config(format!("{}: {e}", path.display())))
    }

    /// Write every section, defaults included, to `path`.
    ///
    /// # Errors
    ///
    /// I/O error if the parent directory or file cannot be written.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let content =
            toml::to_string_pretty(self).map_err(|e| EmotivaError::Config(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// `emotiva/config.toml` under [`config_root`]; read by the terminal
    /// front end when no `--config` is given.
    pub fn default_config_path() -> PathBuf {
        config_root(std::env::var_os("XDG_CONFIG_HOME"), std::env::var_os("HOME"))
            .join("emotiva")
            .join("config.toml")
    }
}

/// `$XDG_CONFIG_HOME`, then `$HOME/.config`, then the system temp dir.
/// Empty variables count as unset.
fn config_root(xdg: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let non_empty = |var: Option<OsString>| var.filter(|v| !v.is_empty()).map(PathBuf::from);
    non_empty(xdg)
        .or_else(|| non_empty(home).map(|h| h.join(".config")))
        .unwrap_or_else(std::env::temp_dir)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = EmotivaConfig::default();
        assert_eq!(config.classifier.backend, ClassifierBackend::Keyword);
        assert!(!config.classifier.model_id.is_empty());
        assert!(config.classifier.timeout_ms > 0);
        assert!(config.translator.timeout_ms > 0);
        assert!(config.tts.timeout_ms > 0);
        assert!(config.tts.max_chunk_chars > 0);
        assert_eq!(config.chat.language, "auto");
        assert_eq!(config.chat.revision, TemplateRevision::Extended);
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = EmotivaConfig::default();
        config.chat.language = "tamil".to_owned();
        config.classifier.backend = ClassifierBackend::Remote;
        config.tts.max_chunk_chars = 80;
        config.save_to_file(&path).unwrap();

        let loaded = EmotivaConfig::from_file(&path).unwrap();
        assert_eq!(loaded.chat.language, "tamil");
        assert_eq!(loaded.classifier.backend, ClassifierBackend::Remote);
        assert_eq!(loaded.tts.max_chunk_chars, 80);
    }

    #[test]
    fn from_file_nonexistent_returns_error() {
        let result =
            EmotivaConfig::from_file(Path::new("/nonexistent/path/config.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn from_file_invalid_toml_returns_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "this is not valid toml {{{").unwrap();
        let result = EmotivaConfig::from_file(&path);
        let err = result.err().unwrap();
        assert!(matches!(err, EmotivaError::Config(_)));
        assert!(err.to_string().contains("bad.toml"), "{err}");
    }

    #[test]
    fn partial_section_uses_defaults() {
        let config: EmotivaConfig = toml::from_str(
            r#"
            [chat]
            revision = "minimal"
            "#,
        )
        .unwrap();
        assert_eq!(config.chat.revision, TemplateRevision::Minimal);
        assert_eq!(config.chat.language, "auto");
        assert!(config.translator.enabled);
    }

    #[test]
    fn default_config_path_ends_with_config_toml() {
        let path = EmotivaConfig::default_config_path();
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn config_root_prefers_xdg_then_home() {
        assert_eq!(
            config_root(Some("/xdg".into()), Some("/home/u".into())),
            PathBuf::from("/xdg")
        );
        assert_eq!(
            config_root(None, Some("/home/u".into())),
            PathBuf::from("/home/u/.config")
        );
        assert_eq!(
            config_root(Some("".into()), Some("/home/u".into())),
            PathBuf::from("/home/u/.config")
        );
        assert_eq!(config_root(None, None), std::env::temp_dir());
    }
}
