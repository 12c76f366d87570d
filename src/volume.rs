//! The library-native volume representation: a parsed header plus an
//! optional voxel buffer. Header-only reads (the `-read` path) leave the
//! buffer empty; the filter pipeline works on fully populated volumes.
use std::io::{self, Write};

use ndarray::Array3;

use crate::error::{Error, Result};
use crate::types::{FileFormat, VoxelType};

/// Geometry and acquisition metadata parsed from an on-disk header.
#[derive(Debug, Clone, PartialEq)]
pub struct VolumeHeader {
    pub format: FileFormat,
    pub width: usize,
    pub height: usize,
    pub depth: usize,
    pub nframes: usize,
    pub voxel_type: VoxelType,

    /// Voxel sizes in mm.
    pub xsize: f32,
    pub ysize: f32,
    pub zsize: f32,

    /// Direction cosines and center, valid only when `ras_good` is set.
    pub ras_good: bool,
    pub x_ras: [f32; 3],
    pub y_ras: [f32; 3],
    pub z_ras: [f32; 3],
    pub c_ras: [f32; 3],

    // Acquisition scalars, present only when the source header carries them.
    pub tr: Option<f32>,
    pub te: Option<f32>,
    pub ti: Option<f32>,
    pub flip_angle: Option<f32>,
}

impl VolumeHeader {
    /// A header with unit spacing, default axes, and no acquisition scalars.
    pub fn new(
        format: FileFormat,
        dims: (usize, usize, usize),
        nframes: usize,
        voxel_type: VoxelType,
    ) -> Self {
        Self {
            format,
            width: dims.0,
            height: dims.1,
            depth: dims.2,
            nframes,
            voxel_type,
            xsize: 1.0,
            ysize: 1.0,
            zsize: 1.0,
            ras_good: false,
            x_ras: [1.0, 0.0, 0.0],
            y_ras: [0.0, 1.0, 0.0],
            z_ras: [0.0, 0.0, 1.0],
            c_ras: [0.0, 0.0, 0.0],
            tr: None,
            te: None,
            ti: None,
            flip_angle: None,
        }
    }

    pub fn dims(&self) -> (usize, usize, usize) {
        (self.width, self.height, self.depth)
    }

    /// Voxels per frame.
    pub fn voxel_count(&self) -> usize {
        self.width * self.height * self.depth
    }

    /// Total data payload in bytes across all frames.
    pub fn data_byte_size(&self) -> usize {
        self.voxel_count() * self.nframes * self.voxel_type.bytes_per_voxel()
    }

    /// Field of view in mm, taken over the largest spatial extent.
    pub fn fov(&self) -> f32 {
        let x = self.width as f32 * self.xsize;
        let y = self.height as f32 * self.ysize;
        let z = self.depth as f32 * self.zsize;
        x.max(y).max(z)
    }
}

/// A volume: header plus optional single-frame voxel buffer.
#[derive(Debug, Clone)]
pub struct Volume {
    header: VolumeHeader,
    data: Option<Array3<f32>>,
}

impl Volume {
    /// A volume without voxel data, as produced by the header readers.
    pub fn header_only(header: VolumeHeader) -> Self {
        Self { header, data: None }
    }

    /// A volume with voxel data. The buffer shape must match the header dims.
    pub fn with_data(header: VolumeHeader, data: Array3<f32>) -> Result<Self> {
        let expected = header.dims();
        let actual = data.dim();
        if expected != actual {
            return Err(Error::ShapeMismatch { expected, actual });
        }
        Ok(Self {
            header,
            data: Some(data),
        })
    }

    pub fn header(&self) -> &VolumeHeader {
        &self.header
    }

    pub fn data(&self) -> Option<&Array3<f32>> {
        self.data.as_ref()
    }

    pub fn into_parts(self) -> (VolumeHeader, Option<Array3<f32>>) {
        (self.header, self.data)
    }

    /// Write the textual header summary consumed by `mri_head -read`.
    ///
    /// Fixed field-per-line layout; RAS lines appear only when the source
    /// header carried a valid RAS block, acquisition scalars only when present.
    pub fn dump<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let h = &self.header;
        writeln!(out, "format = {}", h.format)?;
        writeln!(
            out,
            "dimensions = {} x {} x {}",
            h.width, h.height, h.depth
        )?;
        writeln!(out, "frames = {}", h.nframes)?;
        writeln!(out, "voxel type = {}", h.voxel_type)?;
        writeln!(
            out,
            "voxel size = {:.4} x {:.4} x {:.4} mm",
            h.xsize, h.ysize, h.zsize
        )?;
        writeln!(out, "fov = {:.2} mm", h.fov())?;
        writeln!(out, "ras good = {}", if h.ras_good { 1 } else { 0 })?;
        if h.ras_good {
            writeln!(
                out,
                "x_ras = {:.4} {:.4} {:.4}",
                h.x_ras[0], h.x_ras[1], h.x_ras[2]
            )?;
            writeln!(
                out,
                "y_ras = {:.4} {:.4} {:.4}",
                h.y_ras[0], h.y_ras[1], h.y_ras[2]
            )?;
            writeln!(
                out,
                "z_ras = {:.4} {:.4} {:.4}",
                h.z_ras[0], h.z_ras[1], h.z_ras[2]
            )?;
            writeln!(
                out,
                "c_ras = {:.4} {:.4} {:.4}",
                h.c_ras[0], h.c_ras[1], h.c_ras[2]
            )?;
        }
        if let Some(tr) = h.tr {
            writeln!(out, "tr = {:.3} ms", tr)?;
        }
        if let Some(te) = h.te {
            writeln!(out, "te = {:.3} ms", te)?;
        }
        if let Some(ti) = h.ti {
            writeln!(out, "ti = {:.3} ms", ti)?;
        }
        if let Some(flip) = h.flip_angle {
            writeln!(out, "flip angle = {:.3} deg", flip)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::Array3;

    fn header() -> VolumeHeader {
        VolumeHeader::new(FileFormat::Mgh, (4, 4, 2), 1, VoxelType::UChar)
    }

    #[test]
    fn geometry_helpers() {
        let mut h = header();
        h.xsize = 2.0;
        assert_eq!(h.voxel_count(), 32);
        assert_eq!(h.data_byte_size(), 32);
        assert!((h.fov() - 8.0).abs() < f32::EPSILON);
    }

    #[test]
    fn with_data_rejects_shape_mismatch() {
        let data = Array3::<f32>::zeros((4, 4, 3));
        let err = Volume::with_data(header(), data).unwrap_err();
        assert!(matches!(err, Error::ShapeMismatch { .. }));
    }

    #[test]
    fn dump_layout() {
        let mut h = header();
        h.tr = Some(2300.0);
        let vol = Volume::header_only(h);
        let mut buf = Vec::new();
        vol.dump(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("dimensions = 4 x 4 x 2\n"));
        assert!(text.contains("voxel type = uchar\n"));
        assert!(text.contains("tr = 2300.000 ms\n"));
        // No RAS block for a default header.
        assert!(!text.contains("x_ras"));
    }
}
