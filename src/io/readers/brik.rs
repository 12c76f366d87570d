//! AFNI BRIK header reader.
//!
//! The `.HEAD` companion is a text file of attribute records:
//! `type = ...`, `name = NAME`, `count = N`, followed by N whitespace
//! separated values (string attributes are quoted and skipped here).
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::FormatError;
use crate::types::{FileFormat, VoxelType};
use crate::volume::{Volume, VolumeHeader};

pub fn read_header(path: &Path) -> Result<Volume, FormatError> {
    let head_path = head_companion(path);
    if !head_path.is_file() {
        return Err(FormatError::MissingCompanion(head_path));
    }
    let text = fs::read_to_string(&head_path)?;
    let attrs = parse_attributes(&text);

    let dims = attrs
        .get("DATASET_DIMENSIONS")
        .filter(|v| v.len() >= 3)
        .ok_or_else(|| missing("DATASET_DIMENSIONS"))?;
    let (width, height, depth) = (dims[0] as i64, dims[1] as i64, dims[2] as i64);
    if width <= 0 || height <= 0 || depth <= 0 {
        return Err(FormatError::InvalidHeader {
            format: "brik",
            reason: format!("non-positive dimensions {width}x{height}x{depth}"),
        });
    }

    let nframes = attrs
        .get("DATASET_RANK")
        .filter(|v| v.len() >= 2)
        .map(|v| v[1] as usize)
        .filter(|n| *n >= 1)
        .unwrap_or(1);

    let voxel_type = match attrs.get("BRICK_TYPES").and_then(|v| v.first()) {
        Some(&code) => match code as i64 {
            0 => VoxelType::UChar,
            1 => VoxelType::Short,
            3 => VoxelType::Float,
            other => {
                return Err(FormatError::UnsupportedDataType {
                    format: "brik",
                    code: other as i32,
                });
            }
        },
        // AFNI defaults to shorts when the attribute is absent.
        None => VoxelType::Short,
    };

    let mut header = VolumeHeader::new(
        FileFormat::Brik,
        (width as usize, height as usize, depth as usize),
        nframes,
        voxel_type,
    );
    if let Some(delta) = attrs.get("DELTA").filter(|v| v.len() >= 3) {
        // DELTA is signed by axis orientation.
        header.xsize = delta[0].abs() as f32;
        header.ysize = delta[1].abs() as f32;
        header.zsize = delta[2].abs() as f32;
    }
    Ok(Volume::header_only(header))
}

fn head_companion(path: &Path) -> PathBuf {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("brik") => path.with_extension("HEAD"),
        _ => path.to_path_buf(),
    }
}

fn parse_attributes(text: &str) -> HashMap<String, Vec<f64>> {
    let mut attrs = HashMap::new();
    let mut name: Option<String> = None;
    let mut count = 0usize;
    let mut values: Vec<f64> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("name") {
            if let Some((n, c)) = name.take().map(|n| (n, std::mem::take(&mut values))) {
                attrs.insert(n, c);
            }
            name = rest
                .trim_start_matches(['=', ' '])
                .split_whitespace()
                .next()
                .map(str::to_string);
            count = 0;
            continue;
        }
        if let Some(rest) = line.strip_prefix("count") {
            count = rest
                .trim_start_matches(['=', ' '])
                .split_whitespace()
                .next()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0);
            continue;
        }
        if line.starts_with("type") || name.is_none() {
            continue;
        }
        for word in line.split_whitespace() {
            if values.len() >= count {
                break;
            }
            if let Ok(v) = word.parse::<f64>() {
                values.push(v);
            }
        }
    }
    if let Some(n) = name.take() {
        attrs.insert(n, values);
    }
    attrs
}

fn missing(attr: &str) -> FormatError {
    FormatError::InvalidHeader {
        format: "brik",
        reason: format!("missing attribute {attr}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEAD: &str = "\
type = integer-attribute
name = DATASET_RANK
count = 8
 3 2 0 0 0 0 0 0
type = integer-attribute
name = DATASET_DIMENSIONS
count = 5
 64 64 32 0 0
type = float-attribute
name = DELTA
count = 3
 3 -3 3.5
type = integer-attribute
name = BRICK_TYPES
count = 2
 1 1
";

    #[test]
    fn parses_head_attributes() {
        let dir = tempfile::tempdir().unwrap();
        let head = dir.path().join("anat+orig.HEAD");
        fs::write(&head, HEAD).unwrap();
        let vol = read_header(&head).unwrap();
        let h = vol.header();
        assert_eq!(h.dims(), (64, 64, 32));
        assert_eq!(h.nframes, 2);
        assert_eq!(h.voxel_type, VoxelType::Short);
        assert_eq!(h.ysize, 3.0);
        assert_eq!(h.zsize, 3.5);
    }

    #[test]
    fn brik_resolves_head_companion() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("anat+orig.HEAD"), HEAD).unwrap();
        let brik = dir.path().join("anat+orig.BRIK");
        fs::write(&brik, [0u8; 8]).unwrap();
        assert!(read_header(&brik).is_ok());

        let orphan = dir.path().join("other+orig.BRIK");
        fs::write(&orphan, [0u8; 8]).unwrap();
        assert!(matches!(
            read_header(&orphan),
            Err(FormatError::MissingCompanion(_))
        ));
    }

    #[test]
    fn missing_dimensions_attribute() {
        let dir = tempfile::tempdir().unwrap();
        let head = dir.path().join("bad+orig.HEAD");
        fs::write(&head, "type = integer-attribute\nname = DATASET_RANK\ncount = 2\n 3 1\n")
            .unwrap();
        assert!(matches!(
            read_header(&head),
            Err(FormatError::InvalidHeader { format: "brik", .. })
        ));
    }

    #[test]
    fn float_bricks() {
        let dir = tempfile::tempdir().unwrap();
        let head = dir.path().join("func+orig.HEAD");
        fs::write(
            &head,
            "name = DATASET_DIMENSIONS\ncount = 3\n 16 16 8\nname = BRICK_TYPES\ncount = 1\n 3\n",
        )
        .unwrap();
        let vol = read_header(&head).unwrap();
        assert_eq!(vol.header().voxel_type, VoxelType::Float);
        assert_eq!(vol.header().nframes, 1);
    }
}
