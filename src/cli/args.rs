//! Argument scanning for the legacy single-dash interface.
//!
//! The surface is fixed: `-identify <file>`, `-read <file>`, and the usage
//! aliases `-h`/`-u`/`-?`. The scanner walks the argument list once; the
//! last action flag wins and any non-flag argument becomes the file name.
use std::path::{Path, PathBuf};

#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub enum Action {
    #[default]
    None,
    Usage,
    Identify,
    Read,
}

/// Everything one invocation needs, scanned from argv.
#[derive(Debug, Clone)]
pub struct CliArgs {
    /// Program name as invoked, basename only.
    pub prog: String,
    pub action: Action,
    pub file: Option<PathBuf>,
}

pub fn parse_args<I>(argv: I) -> CliArgs
where
    I: IntoIterator<Item = String>,
{
    let mut argv = argv.into_iter();
    let prog = argv
        .next()
        .map(|arg0| {
            Path::new(&arg0)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or(arg0)
        })
        .unwrap_or_else(|| "mri_head".to_string());

    let mut action = Action::None;
    let mut file = None;
    for arg in argv {
        match arg.as_str() {
            "-u" | "-?" | "-h" => action = Action::Usage,
            "-identify" => action = Action::Identify,
            "-read" => action = Action::Read,
            _ => file = Some(PathBuf::from(arg)),
        }
    }

    CliArgs { prog, action, file }
}
