//! Error handling for hearth-tiles
//!
//! Rendering itself cannot fail: collaborator values are trusted and absent
//! chunks are simply skipped. Everything around it (config loading, atlas
//! construction, PNG output) reports through [`TileError`].

use std::path::{Path, PathBuf};

/// Main error type for hearth-tiles
#[derive(Debug, thiserror::Error)]
pub enum TileError {
    #[error("Invalid config: {field} = {value} ({reason})")]
    InvalidConfig {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Unknown overlay kind: {0}")]
    UnknownOverlay(String),

    #[error("IO error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Type alias for Results in hearth-tiles
pub type TileResult<T> = Result<T, TileError>;

impl TileError {
    pub fn invalid_config(
        field: impl Into<String>,
        value: impl ToString,
        reason: impl Into<String>,
    ) -> Self {
        TileError::InvalidConfig {
            field: field.into(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Extension trait attaching a path to I/O failures
pub trait ErrorContext<T> {
    fn with_path(self, path: &Path) -> TileResult<T>;
}

impl<T> ErrorContext<T> for Result<T, std::io::Error> {
    fn with_path(self, path: &Path) -> TileResult<T> {
        self.map_err(|source| TileError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
