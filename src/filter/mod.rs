//! Volume filters and the layered-volume adapter they operate on.
//!
//! A [`VolumeLayer`] is the minimal stand-in for a viewer-owned display
//! volume: named, multi-frame buffers sharing one header. Filters convert
//! the active frame to a native [`Volume`](crate::volume::Volume), run a
//! kernel, and map the result back into an output layer.
use ndarray::Array3;

use crate::core::progress::Progress;
use crate::error::{Error, Result};
use crate::volume::{Volume, VolumeHeader};

pub mod dilate;
pub use dilate::DilateFilter;

/// A filter transforming one layer into another.
pub trait VolumeFilter {
    fn name(&self) -> &'static str;

    /// Run the filter, reporting overall percentages through `progress`.
    fn execute(&mut self, progress: &Progress) -> Result<()>;
}

/// Multi-frame voxel buffers behind a shared header, with one active frame.
#[derive(Debug, Clone)]
pub struct VolumeLayer {
    name: String,
    header: VolumeHeader,
    frames: Vec<Array3<f32>>,
    active_frame: usize,
}

impl VolumeLayer {
    /// An empty layer; frames are attached with [`push_frame`](Self::push_frame).
    pub fn new(name: impl Into<String>, header: VolumeHeader) -> Self {
        Self {
            name: name.into(),
            header,
            frames: Vec::new(),
            active_frame: 0,
        }
    }

    /// A single-frame layer built from a populated volume.
    pub fn from_volume(name: impl Into<String>, volume: &Volume) -> Result<Self> {
        let data = volume.data().ok_or(Error::MissingVoxelData)?;
        let mut layer = Self::new(name, volume.header().clone());
        layer.push_frame(data.clone())?;
        Ok(layer)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn header(&self) -> &VolumeHeader {
        &self.header
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    pub fn push_frame(&mut self, frame: Array3<f32>) -> Result<()> {
        let expected = self.header.dims();
        let actual = frame.dim();
        if expected != actual {
            return Err(Error::ShapeMismatch { expected, actual });
        }
        self.frames.push(frame);
        Ok(())
    }

    pub fn set_active_frame(&mut self, index: usize) -> Result<()> {
        if index >= self.frames.len() {
            return Err(Error::InvalidParameter {
                param: "active_frame",
                value: index.to_string(),
            });
        }
        self.active_frame = index;
        Ok(())
    }

    pub fn active_data(&self) -> Option<&Array3<f32>> {
        self.frames.get(self.active_frame)
    }

    /// Convert the active frame into the library-native volume.
    ///
    /// Fails when the layer holds no frames; filters rely on this to abort
    /// before touching their kernels.
    pub fn to_native(&self) -> Result<Volume> {
        let frame = self
            .frames
            .get(self.active_frame)
            .ok_or_else(|| Error::EmptyLayer {
                layer: self.name.clone(),
            })?;
        Volume::with_data(self.header.clone(), frame.clone())
    }

    /// Map a native volume back into this layer's active frame.
    ///
    /// An empty layer gains its first frame; shapes must match the layer
    /// header either way.
    pub fn update_from(&mut self, volume: &Volume) -> Result<()> {
        let data = volume.data().ok_or(Error::MissingVoxelData)?;
        let expected = self.header.dims();
        let actual = data.dim();
        if expected != actual {
            return Err(Error::ShapeMismatch { expected, actual });
        }
        if self.frames.is_empty() {
            self.frames.push(data.clone());
            self.active_frame = 0;
        } else {
            self.frames[self.active_frame] = data.clone();
        }
        Ok(())
    }
}
