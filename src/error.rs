//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O and format-layer errors, and provides semantic variants
//! for parameter validation and volume/layer shape failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("format error: {0}")]
    Format(#[from] crate::io::FormatError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid parameter: {param}={value}")]
    InvalidParameter { param: &'static str, value: String },

    #[error("volume layer `{layer}` has no frame data")]
    EmptyLayer { layer: String },

    #[error("volume carries no voxel data (header-only)")]
    MissingVoxelData,

    #[error("shape mismatch: expected {expected:?}, got {actual:?}")]
    ShapeMismatch {
        expected: (usize, usize, usize),
        actual: (usize, usize, usize),
    },

    #[error("Processing error: {0}")]
    Processing(String),
}

impl Error {
    pub fn processing<E: std::fmt::Display>(e: E) -> Self {
        Error::Processing(e.to_string())
    }
}
