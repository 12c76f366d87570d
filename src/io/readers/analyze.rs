//! Analyze 7.5 header reader.
//!
//! The `.hdr` is a fixed 348-byte record; `sizeof_hdr` at offset 0 doubles
//! as the endianness probe. Dimension shorts live at offset 40 (dim[0] is
//! the rank), the datatype short at 70, and voxel sizes as f32s at 76.
use std::fs::File;
use std::io::Read;
use std::path::Path;

use byteorder::{BigEndian, ByteOrder, LittleEndian};

use super::FormatError;
use crate::types::{FileFormat, VoxelType};
use crate::volume::{Volume, VolumeHeader};

const HDR_SIZE: usize = 348;
const DIM: usize = 40;
const DATATYPE: usize = 70;
const PIXDIM: usize = 76;

pub fn read_header(path: &Path) -> Result<Volume, FormatError> {
    let hdr_path = match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("img") => {
            let companion = path.with_extension("hdr");
            if !companion.is_file() {
                return Err(FormatError::MissingCompanion(companion));
            }
            companion
        }
        _ => path.to_path_buf(),
    };

    let mut buf = [0u8; HDR_SIZE];
    File::open(&hdr_path)?.read_exact(&mut buf)?;

    if LittleEndian::read_i32(&buf[0..4]) == HDR_SIZE as i32 {
        parse::<LittleEndian>(&buf)
    } else if BigEndian::read_i32(&buf[0..4]) == HDR_SIZE as i32 {
        parse::<BigEndian>(&buf)
    } else {
        Err(FormatError::InvalidHeader {
            format: "analyze",
            reason: format!("sizeof_hdr is not {HDR_SIZE} in either byte order"),
        })
    }
}

fn parse<E: ByteOrder>(buf: &[u8]) -> Result<Volume, FormatError> {
    let rank = E::read_i16(&buf[DIM..DIM + 2]);
    if !(1..=7).contains(&rank) {
        return Err(FormatError::InvalidHeader {
            format: "analyze",
            reason: format!("dim[0] must be 1..=7, got {rank}"),
        });
    }

    let mut dim = [1i16; 7];
    for (i, d) in dim.iter_mut().enumerate().take(rank as usize) {
        let offset = DIM + 2 + i * 2;
        *d = E::read_i16(&buf[offset..offset + 2]);
        if *d <= 0 {
            return Err(FormatError::InvalidHeader {
                format: "analyze",
                reason: format!("dim[{}] must be positive, got {}", i + 1, *d),
            });
        }
    }

    let type_code = E::read_i16(&buf[DATATYPE..DATATYPE + 2]);
    let voxel_type =
        VoxelType::from_analyze_code(type_code).ok_or(FormatError::UnsupportedDataType {
            format: "analyze",
            code: i32::from(type_code),
        })?;

    let width = dim[0] as usize;
    let height = if rank >= 2 { dim[1] as usize } else { 1 };
    let depth = if rank >= 3 { dim[2] as usize } else { 1 };
    let nframes = if rank >= 4 { dim[3] as usize } else { 1 };

    let mut header = VolumeHeader::new(
        FileFormat::Analyze,
        (width, height, depth),
        nframes,
        voxel_type,
    );
    let pixdim = |i: usize| E::read_f32(&buf[PIXDIM + i * 4..PIXDIM + i * 4 + 4]);
    // pixdim[0] is a funny-factor slot; spatial sizes start at 1.
    for (size, raw) in [
        (&mut header.xsize, pixdim(1)),
        (&mut header.ysize, pixdim(2)),
        (&mut header.zsize, pixdim(3)),
    ] {
        if raw.is_finite() && raw > 0.0 {
            *size = raw;
        }
    }

    Ok(Volume::header_only(header))
}
