//! The dilate filter: convert the input layer to a native volume, run the
//! dilation kernel, and map the result into the output layer. Conversion
//! owns progress 0-50, the kernel 50-60, and the write-back 60-100.
use tracing::debug;

use super::{VolumeFilter, VolumeLayer};
use crate::core::morphology;
use crate::core::params::DilateParams;
use crate::core::progress::Progress;
use crate::error::{Error, Result};
use crate::volume::Volume;

pub struct DilateFilter<'a> {
    input: &'a VolumeLayer,
    output: &'a mut VolumeLayer,
    params: DilateParams,
}

impl<'a> DilateFilter<'a> {
    pub fn new(input: &'a VolumeLayer, output: &'a mut VolumeLayer, params: DilateParams) -> Self {
        Self {
            input,
            output,
            params,
        }
    }
}

impl VolumeFilter for DilateFilter<'_> {
    fn name(&self) -> &'static str {
        "Dilate"
    }

    fn execute(&mut self, progress: &Progress) -> Result<()> {
        let stage = progress.range(0, 50);
        stage.report(0.0);
        let src = self.input.to_native()?;
        stage.report(1.0);

        let stage = progress.range(50, 60);
        let data = src.data().ok_or(Error::MissingVoxelData)?;
        debug!(filter = self.name(), iterations = self.params.iterations, "running kernel");
        let dilated = morphology::dilate(data, &self.params)?;
        stage.report(1.0);

        let stage = progress.range(60, 100);
        let result = Volume::with_data(src.header().clone(), dilated)?;
        self.output.update_from(&result)?;
        stage.report(1.0);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FileFormat, VoxelType};
    use crate::volume::VolumeHeader;
    use ndarray::Array3;

    fn header() -> VolumeHeader {
        VolumeHeader::new(FileFormat::Mgh, (3, 3, 3), 1, VoxelType::Float)
    }

    #[test]
    fn dilates_into_output_layer() {
        let mut data = Array3::<f32>::zeros((3, 3, 3));
        data[[1, 1, 1]] = 1.0;
        let mut input = VolumeLayer::new("input", header());
        input.push_frame(data).unwrap();
        let mut output = VolumeLayer::new("output", header());

        let mut filter = DilateFilter::new(&input, &mut output, DilateParams::default());
        filter.execute(&Progress::sink()).unwrap();

        let out = output.active_data().unwrap();
        assert_eq!(out.iter().filter(|v| **v > 0.0).count(), 27);
        // Input layer is untouched.
        assert_eq!(
            input.active_data().unwrap().iter().filter(|v| **v > 0.0).count(),
            1
        );
    }

    #[test]
    fn conversion_failure_skips_kernel() {
        let input = VolumeLayer::new("input", header());
        let mut output = VolumeLayer::new("output", header());
        let mut filter = DilateFilter::new(&input, &mut output, DilateParams::default());
        assert!(matches!(
            filter.execute(&Progress::sink()),
            Err(Error::EmptyLayer { .. })
        ));
        assert_eq!(output.frame_count(), 0);
    }
}
