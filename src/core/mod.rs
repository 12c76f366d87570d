//! Core processing building blocks: filter parameters, the progress
//! callback boundary, and the morphology kernels. These are internal
//! primitives consumed by the `filter` and `api` modules.
pub mod morphology;
pub mod params;
pub mod progress;
