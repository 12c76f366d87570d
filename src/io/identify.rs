//! The file-type classifier.
//!
//! Dispatch order: directory probes first (a coronal slice directory is a
//! directory, not a file), then extension checks, then magic-number probes
//! on a bounded prefix of the file. Extensions are trusted only where the
//! format has no cheap magic; where both exist the magic wins.
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

use byteorder::{BigEndian, ByteOrder, LittleEndian};
use tracing::debug;

use super::FormatError;
use crate::types::FileFormat;

/// GE magic, "IMGF"; at offset 0 for Genesis, 3228 for LX.
const GE_MAGIC: &[u8; 4] = b"IMGF";
const GE_LX_MAGIC_OFFSET: usize = 3228;
/// NetCDF classic magic, the MINC container.
const NETCDF_MAGIC: &[u8; 4] = b"CDF\x01";
/// NIfTI-1 magic lives at byte 344 of the 348-byte header.
const NIFTI1_MAGIC_OFFSET: usize = 344;
const ANALYZE_HDR_SIZE: usize = 348;

/// Longest prefix any probe needs (the GE LX magic).
const PROBE_LEN: usize = GE_LX_MAGIC_OFFSET + GE_MAGIC.len();

/// Classify the on-disk format of `path`.
///
/// Returns `FormatError::UnknownFormat` when no probe matches, and plain
/// I/O errors when the path cannot be read at all.
pub fn identify_format(path: &Path) -> Result<FileFormat, FormatError> {
    let meta = fs::metadata(path)?;

    if meta.is_dir() {
        return if path.join("COR-.info").is_file() {
            Ok(FileFormat::CoronalSliceDirectory)
        } else {
            debug!(path = %path.display(), "directory without COR-.info");
            Err(FormatError::UnknownFormat)
        };
    }

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if file_name.starts_with("COR-") {
        return Ok(FileFormat::CoronalSliceDirectory);
    }

    if let Some(format) = match_extension(path, &file_name)? {
        return Ok(format);
    }

    probe_magic(path)
}

fn extension_of(file_name: &str) -> Option<String> {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
}

fn match_extension(path: &Path, file_name: &str) -> Result<Option<FileFormat>, FormatError> {
    let Some(ext) = extension_of(file_name) else {
        return Ok(None);
    };
    let format = match ext.as_str() {
        "mgh" | "mgz" => Some(FileFormat::Mgh),
        "gz" if file_name.to_ascii_lowercase().ends_with(".mgh.gz") => Some(FileFormat::Mgh),
        "mnc" => Some(FileFormat::Minc),
        "ima" => Some(FileFormat::Siemens),
        "brik" | "head" => Some(FileFormat::Brik),
        "bshort" => Some(FileFormat::Bshort),
        "nii" => Some(FileFormat::Nifti1),
        "img" | "hdr" => Some(analyze_or_nifti(path, &ext)?),
        _ => None,
    };
    Ok(format)
}

/// Both Analyze 7.5 and NIfTI-1 use a 348-byte `.hdr`; only NIfTI carries
/// the `n+1`/`ni1` magic word.
fn analyze_or_nifti(path: &Path, ext: &str) -> Result<FileFormat, FormatError> {
    let hdr_path = if ext == "img" {
        let companion = path.with_extension("hdr");
        if !companion.is_file() {
            debug!(path = %path.display(), "img file without companion hdr");
            return Err(FormatError::UnknownFormat);
        }
        companion
    } else {
        path.to_path_buf()
    };

    let mut buf = [0u8; ANALYZE_HDR_SIZE];
    let mut file = File::open(&hdr_path)?;
    if read_prefix(&mut file, &mut buf)? < ANALYZE_HDR_SIZE {
        return Err(FormatError::UnknownFormat);
    }

    let sizeof_le = LittleEndian::read_i32(&buf[0..4]);
    let sizeof_be = BigEndian::read_i32(&buf[0..4]);
    if sizeof_le != ANALYZE_HDR_SIZE as i32 && sizeof_be != ANALYZE_HDR_SIZE as i32 {
        return Err(FormatError::UnknownFormat);
    }

    let magic = &buf[NIFTI1_MAGIC_OFFSET..NIFTI1_MAGIC_OFFSET + 4];
    if magic == b"n+1\0" || magic == b"ni1\0" {
        Ok(FileFormat::Nifti1)
    } else {
        Ok(FileFormat::Analyze)
    }
}

fn probe_magic(path: &Path) -> Result<FileFormat, FormatError> {
    let mut buf = vec![0u8; PROBE_LEN];
    let mut file = File::open(path)?;
    let len = read_prefix(&mut file, &mut buf)?;
    let buf = &buf[..len];

    if buf.len() >= 4 && &buf[0..4] == GE_MAGIC {
        return Ok(FileFormat::Genesis);
    }
    if buf.len() >= PROBE_LEN && &buf[GE_LX_MAGIC_OFFSET..GE_LX_MAGIC_OFFSET + 4] == GE_MAGIC {
        return Ok(FileFormat::GeLx);
    }
    if buf.len() >= 4 && &buf[0..4] == NETCDF_MAGIC {
        return Ok(FileFormat::Minc);
    }
    if buf.len() >= ANALYZE_HDR_SIZE {
        let sizeof_le = LittleEndian::read_i32(&buf[0..4]);
        let sizeof_be = BigEndian::read_i32(&buf[0..4]);
        if sizeof_le == ANALYZE_HDR_SIZE as i32 || sizeof_be == ANALYZE_HDR_SIZE as i32 {
            let magic = &buf[NIFTI1_MAGIC_OFFSET..NIFTI1_MAGIC_OFFSET + 4];
            return if magic == b"n+1\0" || magic == b"ni1\0" {
                Ok(FileFormat::Nifti1)
            } else {
                Ok(FileFormat::Analyze)
            };
        }
    }

    debug!(path = %path.display(), "no magic matched");
    Err(FormatError::UnknownFormat)
}

/// Read up to `buf.len()` bytes, tolerating short files.
fn read_prefix(file: &mut File, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        let n = file.read(&mut buf[total..])?;
        if n == 0 {
            break;
        }
        total += n;
    }
    Ok(total)
}
