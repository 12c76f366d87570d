use thiserror::Error;

/// Application-specific errors for the CLI
///
/// Protocol-level failures are printed as `fail` lines and reflected in
/// the exit code; this type only covers failures of the CLI machinery
/// itself (e.g. a closed output pipe).
#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
