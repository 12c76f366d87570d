//! Coronal slice directory reader.
//!
//! A COR volume is a directory of one-byte-per-voxel slice files plus a
//! `COR-.info` key/value text file. Distances in the info file are meters;
//! headers carry mm.
use std::collections::HashMap;
use std::fs;
use std::path::Path;

use super::FormatError;
use crate::types::{FileFormat, VoxelType};
use crate::volume::{Volume, VolumeHeader};

const MM_PER_M: f32 = 1000.0;

pub fn read_header(path: &Path) -> Result<Volume, FormatError> {
    let dir = if path.is_dir() {
        path
    } else {
        path.parent().unwrap_or(path)
    };
    let info_path = dir.join("COR-.info");
    if !info_path.is_file() {
        return Err(FormatError::MissingCompanion(info_path));
    }

    let text = fs::read_to_string(&info_path)?;
    let mut fields = HashMap::new();
    for line in text.lines() {
        let mut words = line.split_whitespace();
        if let (Some(key), Some(value)) = (words.next(), words.next()) {
            fields.insert(key.to_string(), value.to_string());
        }
    }

    let float = |key: &'static str| -> Result<f32, FormatError> {
        fields
            .get(key)
            .and_then(|v| v.parse::<f32>().ok())
            .ok_or_else(|| FormatError::InvalidHeader {
                format: "cor",
                reason: format!("missing or non-numeric `{key}`"),
            })
    };
    let int = |key: &'static str| -> Result<i64, FormatError> {
        fields
            .get(key)
            .and_then(|v| v.parse::<i64>().ok())
            .ok_or_else(|| FormatError::InvalidHeader {
                format: "cor",
                reason: format!("missing or non-integer `{key}`"),
            })
    };

    let imnr0 = int("imnr0")?;
    let imnr1 = int("imnr1")?;
    let width = int("x")?;
    let height = int("y")?;
    let depth = imnr1 - imnr0 + 1;
    for (field, value) in [("x", width), ("y", height), ("imnr1-imnr0+1", depth)] {
        if value <= 0 {
            return Err(FormatError::InvalidHeader {
                format: "cor",
                reason: format!("{field} must be positive, got {value}"),
            });
        }
    }

    let psiz = float("psiz")?;
    let thick = float("thick")?;

    let mut header = VolumeHeader::new(
        FileFormat::CoronalSliceDirectory,
        (width as usize, height as usize, depth as usize),
        1,
        VoxelType::UChar,
    );
    header.xsize = psiz * MM_PER_M;
    header.ysize = psiz * MM_PER_M;
    header.zsize = thick * MM_PER_M;
    Ok(Volume::header_only(header))
}
