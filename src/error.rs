//! Error taxonomy for the filtering pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between decoding an image and writing
/// the montage. A uniform input image is deliberately not an error; the
/// edge filter falls back to an all-zero map instead.
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("failed to decode {path}: {reason}")]
    Decode { path: PathBuf, reason: String },

    #[error("unsupported buffer shape: expected 2 or 3 dimensions, got {ndim}")]
    InvalidShape { ndim: usize },

    #[error("failed to render {path}: {reason}")]
    Render { path: PathBuf, reason: String },

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, FilterError>;
