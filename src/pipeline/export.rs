// src/pipeline/export.rs

//! JSON export of normalized profiles.
//!
//! The exporter serializes exactly the records it is given: no filtering,
//! no re-normalization, no emptiness check. The resulting artifact is saved
//! on request (the CLI's equivalent of a browser download).

use std::path::{Path, PathBuf};

use tokio::io::AsyncWriteExt;

use crate::error::Result;
use crate::models::{ExportConfig, ProfileRecord};

/// MIME type of the exported document.
pub const CONTENT_TYPE: &str = "application/json";

/// A serialized, ready-to-save export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub file_name: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

impl ExportArtifact {
    /// Document text (always valid UTF-8).
    pub fn as_str(&self) -> &str {
        std::str::from_utf8(&self.bytes).unwrap_or_default()
    }

    /// Write the artifact into `dir` atomically (write to temp, then rename).
    ///
    /// On failure the temp file is removed and the target is left untouched.
    pub async fn save(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let dir = dir.as_ref();
        tokio::fs::create_dir_all(dir).await?;

        let path = dir.join(&self.file_name);
        let tmp = path.with_extension("tmp");
        if let Err(e) = self.write_then_rename(&tmp, &path).await {
            if let Err(cleanup) = tokio::fs::remove_file(&tmp).await {
                log::debug!("Could not remove {}: {}", tmp.display(), cleanup);
            }
            return Err(e);
        }

        log::info!("Exported {} bytes to {}", self.bytes.len(), path.display());
        Ok(path)
    }

    async fn write_then_rename(&self, tmp: &Path, path: &Path) -> Result<()> {
        let mut file = tokio::fs::File::create(tmp).await?;
        file.write_all(&self.bytes).await?;
        file.flush().await?;
        drop(file);

        tokio::fs::rename(tmp, path).await?;
        Ok(())
    }
}

/// Serializes record sets under a fixed file name.
#[derive(Debug, Clone)]
pub struct Exporter {
    file_name: String,
}

impl Exporter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
        }
    }

    pub fn from_config(config: &ExportConfig) -> Self {
        Self::new(config.file_name.clone())
    }

    /// Serialize `records` as a 2-space-indented JSON array.
    pub fn export(&self, records: &[ProfileRecord]) -> Result<ExportArtifact> {
        let bytes = serde_json::to_vec_pretty(records)?;
        Ok(ExportArtifact {
            file_name: self.file_name.clone(),
            content_type: CONTENT_TYPE,
            bytes,
        })
    }
}
