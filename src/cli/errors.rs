use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("--output can only be used with a single input file, got {count} paths")]
    OutputWithMultipleInputs { count: usize },

    #[error("--output requires a file input, got directory {}", path.display())]
    OutputWithDirectory { path: PathBuf },

    #[error("{failed} of {total} icons failed")]
    IncompleteIconSet { failed: usize, total: usize },

    #[error("Library error: {0}")]
    Library(#[from] favforge::Error),
}
