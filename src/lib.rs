#![doc = r#"
MRIKIT — an MRI volume toolkit.

This crate provides a typed, ergonomic API for working with legacy MRI
volumes on disk: classifying a file's on-disk format, parsing its header
without loading voxel data, and running morphological filters (currently
dilation) over in-memory volumes. It powers the `mri_head` CLI and can be
embedded in your own Rust applications.

Stability
---------
The public library API is experimental in initial releases. It is built on
top of a working MVP used by the CLI and is robust, but may evolve as the
crate stabilizes. Breaking changes can occur.

Quick start: identify and inspect a file
----------------------------------------
```rust,no_run
use std::path::Path;
use mrikit::{identify_file, read_header};

fn main() -> mrikit::Result<()> {
    let format = identify_file(Path::new("/data/subject1/mri/T1.mgz"))?;
    println!("format: {format}");

    let volume = read_header(Path::new("/data/subject1/mri/T1.mgz"))?;
    let mut out = Vec::new();
    volume.dump(&mut out)?;
    Ok(())
}
```

Dilate a volume between layers
------------------------------
```rust
use ndarray::Array3;
use mrikit::{
    run_dilate_filter, DilateParams, FileFormat, Progress, Volume, VolumeHeader,
    VolumeLayer, VoxelType,
};

fn main() -> mrikit::Result<()> {
    let header = VolumeHeader::new(FileFormat::Mgh, (16, 16, 16), 1, VoxelType::Float);
    let mask = Volume::with_data(header.clone(), Array3::zeros((16, 16, 16)))?;

    let input = VolumeLayer::from_volume("mask", &mask)?;
    let mut output = VolumeLayer::new("mask (dilated)", header);

    run_dilate_filter(
        &input,
        &mut output,
        DilateParams::default(),
        &Progress::new(|pct| eprintln!("{pct}%")),
    )
}
```

Error handling
--------------
All public functions return `mrikit::Result<T>`; match on `mrikit::Error`
to handle specific cases, e.g. format-layer errors.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — enums and core types (e.g. `FileFormat`, `VoxelType`).
- [`io`] — the format classifier, header readers, and metadata writers.
- [`filter`] — volume layers and the dilate filter.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod cli;
pub mod core;
pub mod error;
pub mod filter;
pub mod io;
pub mod types;
pub mod volume;

// Curated public API surface
// Types
pub use core::params::DilateParams;
pub use core::progress::{Progress, ProgressFn, ProgressRange};
pub use error::{Error, Result};
pub use types::{Connectivity, FileFormat, VoxelType};
pub use volume::{Volume, VolumeHeader};

// Readers
pub use io::{FormatError, identify_format, read_info};

// Selected writer helpers (keep low-level metadata helpers public)
pub use io::writers::metadata::{create_json_metadata_sidecar, extract_metadata_fields};

// Filters
pub use filter::{DilateFilter, VolumeFilter, VolumeLayer};

// High-level API re-exports
pub use api::{
    dilate_volume, dump_header_to_string, identify_file, read_header, run_dilate_filter,
};
