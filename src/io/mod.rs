//! I/O layer for MRI file handling.
//! Provides the `identify` format classifier, per-format header `readers`,
//! and `writers` for metadata sidecars.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::FileFormat;

pub mod identify;
pub use identify::identify_format;

pub mod readers;
pub use readers::read_info;

pub mod writers;

/// Errors encountered while classifying files or parsing headers
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("unknown file type")]
    UnknownFormat,
    #[error("no native header reader for {0} files")]
    UnsupportedFormat(FileFormat),
    #[error("unsupported {format} data type code {code}")]
    UnsupportedDataType { format: &'static str, code: i32 },
    #[error("invalid {format} header: {reason}")]
    InvalidHeader {
        format: &'static str,
        reason: String,
    },
    #[error("missing companion file `{0}`")]
    MissingCompanion(PathBuf),
}
