//! bshort header reader.
//!
//! A bshort slice stem pairs `<stem>.bshort` (raw big- or little-endian
//! shorts) with a `<stem>.hdr` text file of four integers:
//! `rows cols nframes swap`.
use std::fs;
use std::path::Path;

use super::FormatError;
use crate::types::{FileFormat, VoxelType};
use crate::volume::{Volume, VolumeHeader};

pub fn read_header(path: &Path) -> Result<Volume, FormatError> {
    let hdr_path = path.with_extension("hdr");
    if !hdr_path.is_file() {
        return Err(FormatError::MissingCompanion(hdr_path));
    }
    let text = fs::read_to_string(&hdr_path)?;

    let mut words = text.split_whitespace().map(str::parse::<i64>);
    let mut next = |field: &'static str| -> Result<i64, FormatError> {
        words
            .next()
            .and_then(|v| v.ok())
            .ok_or_else(|| FormatError::InvalidHeader {
                format: "bshort",
                reason: format!("missing or non-integer {field}"),
            })
    };

    let rows = next("rows")?;
    let cols = next("cols")?;
    let nframes = next("nframes")?;
    let _swap = next("swap")?;

    for (field, value) in [("rows", rows), ("cols", cols), ("nframes", nframes)] {
        if value <= 0 {
            return Err(FormatError::InvalidHeader {
                format: "bshort",
                reason: format!("{field} must be positive, got {value}"),
            });
        }
    }

    let header = VolumeHeader::new(
        FileFormat::Bshort,
        (cols as usize, rows as usize, 1),
        nframes as usize,
        VoxelType::Short,
    );
    Ok(Volume::header_only(header))
}
