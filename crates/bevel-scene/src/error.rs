//! Errors raised while loading a scene.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while reading or interpreting a scene file.
#[derive(Debug, Error)]
pub enum SceneError {
    /// The scene file could not be read.
    #[error("failed to read scene {}: {source}", path.display())]
    Io {
        /// Path that was opened, after resolution against the base directory.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not have the scene shape.
    #[error("invalid scene document: {0}")]
    Json(#[from] serde_json::Error),

    /// A border style token is not one of the known styles.
    #[error("unknown border style: {0:?}")]
    UnknownStyle(String),

    /// A writing mode token is not one of the known modes.
    #[error("unknown writing mode: {0:?}")]
    UnknownWritingMode(String),

    /// A color value could not be parsed.
    #[error("invalid color: {0:?}")]
    BadColor(String),

    /// A bounds value is not four finite numbers.
    #[error("invalid bounds: {0:?}")]
    BadBounds(String),

    /// A per-side list is empty or has more than four entries.
    #[error("{field} expects 1 to 4 values, got {len}")]
    ListArity {
        /// Name of the offending field.
        field: &'static str,
        /// Number of values found.
        len: usize,
    },
}
