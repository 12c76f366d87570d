//! MGH header reader.
//!
//! The MGH header is big-endian: a version word (always 1), the four
//! dimension words, the voxel type and dof words, then a goodRASFlag
//! short gating the voxel-size and direction-cosine block. `.mgz` files
//! are the same stream behind gzip. Voxel data starts at byte 284 and is
//! not read here.
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use byteorder::{BigEndian, ReadBytesExt};
use flate2::read::GzDecoder;

use super::FormatError;
use crate::types::{FileFormat, VoxelType};
use crate::volume::{Volume, VolumeHeader};

pub fn read_header(path: &Path) -> Result<Volume, FormatError> {
    let file = File::open(path)?;
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    if name.ends_with(".mgz") || name.ends_with(".mgh.gz") {
        parse(BufReader::new(GzDecoder::new(file)))
    } else {
        parse(BufReader::new(file))
    }
}

fn parse<R: Read>(mut r: R) -> Result<Volume, FormatError> {
    let version = r.read_i32::<BigEndian>()?;
    if version != 1 {
        return Err(FormatError::InvalidHeader {
            format: "mgh",
            reason: format!("unexpected version word {version}"),
        });
    }

    let width = read_dim(&mut r, "width")?;
    let height = read_dim(&mut r, "height")?;
    let depth = read_dim(&mut r, "depth")?;
    let nframes = read_dim(&mut r, "nframes")?;

    width
        .checked_mul(height)
        .and_then(|v| v.checked_mul(depth))
        .and_then(|v| v.checked_mul(nframes))
        .ok_or_else(|| FormatError::InvalidHeader {
            format: "mgh",
            reason: "dimension product overflows".into(),
        })?;

    let type_code = r.read_i32::<BigEndian>()?;
    let voxel_type =
        VoxelType::from_mgh_code(type_code).ok_or(FormatError::UnsupportedDataType {
            format: "mgh",
            code: type_code,
        })?;
    let _dof = r.read_i32::<BigEndian>()?;

    let mut header = VolumeHeader::new(
        FileFormat::Mgh,
        (width, height, depth),
        nframes,
        voxel_type,
    );

    let ras_good = r.read_i16::<BigEndian>()?;
    if ras_good > 0 {
        header.ras_good = true;
        header.xsize = r.read_f32::<BigEndian>()?;
        header.ysize = r.read_f32::<BigEndian>()?;
        header.zsize = r.read_f32::<BigEndian>()?;
        for axis in [&mut header.x_ras, &mut header.y_ras, &mut header.z_ras] {
            for v in axis.iter_mut() {
                *v = r.read_f32::<BigEndian>()?;
            }
        }
        for v in header.c_ras.iter_mut() {
            *v = r.read_f32::<BigEndian>()?;
        }
    }

    Ok(Volume::header_only(header))
}

fn read_dim<R: Read>(r: &mut R, field: &'static str) -> Result<usize, FormatError> {
    let value = r.read_i32::<BigEndian>()?;
    if value <= 0 {
        return Err(FormatError::InvalidHeader {
            format: "mgh",
            reason: format!("{field} must be positive, got {value}"),
        });
    }
    Ok(value as usize)
}
