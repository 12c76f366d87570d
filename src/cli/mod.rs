//! The `mri_head` command layer: legacy argument scanning and the
//! `succeed`/`fail` protocol runner.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::{Action, CliArgs, parse_args};
pub use errors::AppError;
pub use runner::run;
