//! mri_head CLI entrypoint.
//!
//! Provides a thin wrapper over the `cli` module: scan args, dispatch to
//! the protocol runner, and exit with its status. Library diagnostics are
//! tracing events, discarded unless `MRI_HEAD_LOG` installs a subscriber,
//! so the default stderr stays quiet under the script protocol.
use std::io;
use std::process::ExitCode;

use mrikit::cli;

fn main() -> ExitCode {
    if std::env::var_os("MRI_HEAD_LOG").is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_env("MRI_HEAD_LOG"))
            .with_writer(io::stderr)
            .init();
    }

    let args = cli::parse_args(std::env::args());
    let code = match cli::run(&args, &mut io::stdout().lock(), &mut io::stderr().lock()) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {e}", args.prog);
            1
        }
    };
    ExitCode::from(code)
}
