//! High-level, ergonomic entry points.
//!
//! Thin wrappers over the io and filter layers for callers that want
//! one-call identification, header inspection, or dilation without
//! assembling the pieces themselves. All are re-exported from the crate
//! root.
use std::path::Path;

use crate::core::morphology;
use crate::core::params::DilateParams;
use crate::core::progress::Progress;
use crate::error::{Error, Result};
use crate::filter::{DilateFilter, VolumeFilter, VolumeLayer};
use crate::io;
use crate::types::FileFormat;
use crate::volume::Volume;

/// Classify the on-disk format of `path`.
pub fn identify_file<P: AsRef<Path>>(path: P) -> Result<FileFormat> {
    Ok(io::identify_format(path.as_ref())?)
}

/// Identify `path` and parse its header into a header-only volume.
pub fn read_header<P: AsRef<Path>>(path: P) -> Result<Volume> {
    Ok(io::read_info(path.as_ref())?)
}

/// Identify `path`, parse its header, and render the textual dump.
pub fn dump_header_to_string<P: AsRef<Path>>(path: P) -> Result<String> {
    let volume = read_header(path)?;
    let mut buf = Vec::new();
    volume.dump(&mut buf)?;
    String::from_utf8(buf).map_err(Error::processing)
}

/// Dilate a populated volume, returning a new volume with the same header.
pub fn dilate_volume(volume: &Volume, params: &DilateParams) -> Result<Volume> {
    let data = volume.data().ok_or(Error::MissingVoxelData)?;
    let dilated = morphology::dilate(data, params)?;
    Volume::with_data(volume.header().clone(), dilated)
}

/// Run the dilate filter between two layers with progress reporting.
pub fn run_dilate_filter(
    input: &VolumeLayer,
    output: &mut VolumeLayer,
    params: DilateParams,
    progress: &Progress,
) -> Result<()> {
    DilateFilter::new(input, output, params).execute(progress)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::VoxelType;
    use crate::volume::VolumeHeader;
    use ndarray::Array3;

    #[test]
    fn dilate_volume_requires_data() {
        let header = VolumeHeader::new(FileFormat::Mgh, (2, 2, 2), 1, VoxelType::Float);
        let vol = Volume::header_only(header);
        assert!(matches!(
            dilate_volume(&vol, &DilateParams::default()),
            Err(Error::MissingVoxelData)
        ));
    }

    #[test]
    fn dilate_volume_keeps_header() {
        let header = VolumeHeader::new(FileFormat::Mgh, (2, 2, 2), 1, VoxelType::Float);
        let vol = Volume::with_data(header.clone(), Array3::from_elem((2, 2, 2), 1.0)).unwrap();
        let out = dilate_volume(&vol, &DilateParams::default()).unwrap();
        assert_eq!(out.header(), &header);
    }
}
