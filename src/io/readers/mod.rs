//! Per-format header readers.
//!
//! Each reader parses only the header of its format and returns a
//! header-only [`Volume`](crate::volume::Volume); voxel payloads are never
//! loaded here. Formats without a self-describing header fail with
//! `FormatError::UnsupportedFormat`.
use std::path::Path;

use tracing::debug;

use super::{FormatError, identify_format};
use crate::types::FileFormat;
use crate::volume::Volume;

pub mod analyze;
pub mod brik;
pub mod bshort;
pub mod cor;
pub mod mgh;

/// Identify `path` and parse its header.
pub fn read_info(path: &Path) -> Result<Volume, FormatError> {
    let format = identify_format(path)?;
    debug!(path = %path.display(), %format, "reading header");
    match format {
        FileFormat::Mgh => mgh::read_header(path),
        FileFormat::Analyze => analyze::read_header(path),
        FileFormat::Bshort => bshort::read_header(path),
        FileFormat::CoronalSliceDirectory => cor::read_header(path),
        FileFormat::Brik => brik::read_header(path),
        other => Err(FormatError::UnsupportedFormat(other)),
    }
}
