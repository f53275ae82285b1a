//! Audio artifact files.

use crate::error::{EmotivaError, Result};
use chrono::{DateTime, Utc};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::warn;

/// Attempts at finding a free file name before giving up.
const NAME_ATTEMPTS: u32 = 4;

/// A synthesized reply written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AudioArtifact {
    pub path: PathBuf,
    /// Locale the audio was synthesized in.
    pub locale: String,
    /// Size of the MP3 payload in bytes.
    pub size: usize,
    pub created_at: DateTime<Utc>,
}

/// Writes MP3 payloads as `response_{unix_millis}_{random hex}.mp3`.
///
/// Files are opened with `create_new`, so an existing artifact is never
/// overwritten; on a name clash a fresh suffix is drawn. There is no
/// retention policy: artifacts stay until removed externally. A write that
/// fails part way removes its file, so no truncated artifact is left behind.
#[derive(Debug, Clone)]
pub struct ArtifactWriter {
    dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn candidate_name(now: DateTime<Utc>) -> String {
        format!(
            "response_{}_{:08x}.mp3",
            now.timestamp_millis(),
            rand::random::<u32>()
        )
    }

    /// Persist `audio` and describe the resulting file.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the directory cannot be created or written, or
    /// a TTS error if no free name was found.
    pub async fn write(&self, audio: &[u8], locale: &str) -> Result<AudioArtifact> {
        tokio::fs::create_dir_all(&self.dir).await?;

        for _ in 0..NAME_ATTEMPTS {
            let created_at = Utc::now();
            let path = self.dir.join(Self::candidate_name(created_at));
            let file = match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(&path)
                .await
            {
                Ok(f) => f,
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => return Err(e.into()),
            };
            fill_or_remove(file, &path, audio).await?;
            return Ok(AudioArtifact {
                path,
                locale: locale.to_owned(),
                size: audio.len(),
                created_at,
            });
        }

        Err(EmotivaError::Tts(format!(
            "no free artifact name in {} after {NAME_ATTEMPTS} attempts",
            self.dir.display()
        )))
    }
}

/// Write `audio` into the freshly created `file` at `path`, deleting it if
/// the write does not complete.
async fn fill_or_remove<W: AsyncWrite + Unpin>(mut file: W, path: &Path, audio: &[u8]) -> Result<()> {
    let written = async {
        file.write_all(audio).await?;
        file.flush().await
    }
    .await;
    drop(file);

    if let Err(e) = written {
        if let Err(cleanup) = tokio::fs::remove_file(path).await {
            warn!(path = %path.display(), error = %cleanup, "could not remove partial artifact");
        }
        return Err(e.into());
    }
    Ok(())
}
