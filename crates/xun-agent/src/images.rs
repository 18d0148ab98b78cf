//! Local storage for generated token logos.

use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use xun_core::TokenImage;

use crate::error::AgentError;

/// Writes logos as `<dir>/<token name>.png`. A later token with the same
/// name overwrites the earlier file.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path the logo for `token_name` is written to.
    #[must_use]
    pub fn path_for(&self, token_name: &str) -> PathBuf {
        self.dir.join(format!("{}.png", file_stem(token_name)))
    }

    /// Decode and write the image, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns [`AgentError::ImageDecode`] for invalid base64 and
    /// [`AgentError::ImageStore`] if the directory or file cannot be written.
    pub async fn save(&self, token_name: &str, image: &TokenImage) -> Result<PathBuf, AgentError> {
        let bytes = STANDARD.decode(image.base64.as_bytes())?;

        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|source| AgentError::ImageStore {
                path: self.dir.clone(),
                source,
            })?;

        let path = self.path_for(token_name);
        tokio::fs::write(&path, &bytes)
            .await
            .map_err(|source| AgentError::ImageStore {
                path: path.clone(),
                source,
            })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "token image written");
        Ok(path)
    }
}

// Keeps generated names from escaping the image directory.
fn file_stem(token_name: &str) -> String {
    token_name
        .chars()
        .map(|c| match c {
            '/' | '\\' | '\0' => '_',
            other => other,
        })
        .collect()
}
