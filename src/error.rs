//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec and JSON errors, and provides semantic variants
//! for manifest validation, rasterization and external tool failures.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Source image not found: {}", path.display())]
    SourceNotFound { path: PathBuf },

    #[error("Invalid icon manifest: {reason}")]
    InvalidManifest { reason: String },

    #[error("SVG error: {0}")]
    Svg(String),

    #[error("External tool `{program}` failed: {reason}")]
    ExternalTool { program: String, reason: String },

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn invalid_manifest<S: Into<String>>(reason: S) -> Self {
        Error::InvalidManifest {
            reason: reason.into(),
        }
    }

    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
