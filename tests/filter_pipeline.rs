//! End-to-end checks for the dilate filter: layer conversion, kernel,
//! write-back, and the staged progress stream.
use std::sync::{Arc, Mutex};

use ndarray::Array3;

use mrikit::{
    DilateParams, Error, FileFormat, Progress, Volume, VolumeHeader, VolumeLayer, VoxelType,
    run_dilate_filter,
};

fn header(dims: (usize, usize, usize)) -> VolumeHeader {
    VolumeHeader::new(FileFormat::Mgh, dims, 1, VoxelType::Float)
}

fn progress_collector() -> (Progress, Arc<Mutex<Vec<u8>>>) {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = Arc::clone(&seen);
    (Progress::new(move |p| sink.lock().unwrap().push(p)), seen)
}

#[test]
fn filter_dilates_and_reports_full_progress() {
    let mut mask = Array3::<f32>::zeros((8, 8, 8));
    mask[[4, 4, 4]] = 1.0;
    let volume = Volume::with_data(header((8, 8, 8)), mask).unwrap();
    let input = VolumeLayer::from_volume("mask", &volume).unwrap();
    let mut output = VolumeLayer::new("mask (dilated)", header((8, 8, 8)));

    let (progress, seen) = progress_collector();
    run_dilate_filter(&input, &mut output, DilateParams::default(), &progress).unwrap();

    let out = output.active_data().unwrap();
    assert_eq!(out.iter().filter(|v| **v > 0.0).count(), 27);

    let seen = seen.lock().unwrap();
    assert_eq!(seen.first(), Some(&0));
    assert_eq!(seen.last(), Some(&100));
    assert!(seen.windows(2).all(|w| w[0] <= w[1]), "monotonic: {seen:?}");
    // Each stage window is visited.
    assert!(seen.contains(&50));
    assert!(seen.contains(&60));
}

#[test]
fn conversion_failure_aborts_before_the_kernel() {
    let input = VolumeLayer::new("empty", header((4, 4, 4)));
    let mut output = VolumeLayer::new("out", header((4, 4, 4)));

    let (progress, seen) = progress_collector();
    let result = run_dilate_filter(&input, &mut output, DilateParams::default(), &progress);

    assert!(matches!(result, Err(Error::EmptyLayer { .. })));
    assert_eq!(output.frame_count(), 0);
    // Nothing past the conversion window was ever reported.
    let seen = seen.lock().unwrap();
    assert!(seen.iter().all(|p| *p < 50), "progress: {seen:?}");
}

#[test]
fn invalid_params_surface_as_errors() {
    let volume = Volume::with_data(header((2, 2, 2)), Array3::zeros((2, 2, 2))).unwrap();
    let input = VolumeLayer::from_volume("mask", &volume).unwrap();
    let mut output = VolumeLayer::new("out", header((2, 2, 2)));

    let params = DilateParams {
        iterations: 0,
        ..Default::default()
    };
    let result = run_dilate_filter(&input, &mut output, params, &Progress::sink());
    assert!(matches!(result, Err(Error::InvalidParameter { .. })));
    assert_eq!(output.frame_count(), 0);
}

#[test]
fn mismatched_output_layer_is_rejected() {
    let volume = Volume::with_data(header((4, 4, 4)), Array3::zeros((4, 4, 4))).unwrap();
    let input = VolumeLayer::from_volume("mask", &volume).unwrap();
    let mut output = VolumeLayer::new("out", header((4, 4, 2)));

    let result = run_dilate_filter(&input, &mut output, DilateParams::default(), &Progress::sink());
    assert!(matches!(result, Err(Error::ShapeMismatch { .. })));
}
