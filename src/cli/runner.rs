//! Protocol runner for `mri_head`.
//!
//! Every operation prints a `succeed`/`fail` pair on stdout for script
//! consumption and returns the process exit code; usage goes to stdout on
//! request and to stderr on misuse. Output sinks are injected so the
//! protocol is testable without a child process.
use std::fs;
use std::io::Write;
use std::path::Path;

use tracing::debug;

use super::args::{Action, CliArgs};
use super::errors::AppError;
use crate::io::{identify_format, read_info};

/// Dispatch one invocation, returning the process exit code.
pub fn run<O, E>(args: &CliArgs, out: &mut O, err: &mut E) -> Result<u8, AppError>
where
    O: Write,
    E: Write,
{
    match args.action {
        Action::Usage => {
            print_usage(&args.prog, out)?;
            Ok(0)
        }
        Action::Identify => match &args.file {
            Some(file) => identify(&args.prog, file, out),
            None => {
                print_usage(&args.prog, err)?;
                Ok(1)
            }
        },
        Action::Read => match &args.file {
            Some(file) => read(file, out),
            None => {
                print_usage(&args.prog, err)?;
                Ok(1)
            }
        },
        Action::None => {
            print_usage(&args.prog, err)?;
            Ok(1)
        }
    }
}

pub fn print_usage<W: Write>(prog: &str, out: &mut W) -> Result<(), AppError> {
    writeln!(out, "usage: {prog} -identify filename")?;
    writeln!(out, "       {prog} -read filename")?;
    writeln!(out, "       {prog} -h|-u|-?")?;
    Ok(())
}

fn identify<W: Write>(prog: &str, file: &Path, out: &mut W) -> Result<u8, AppError> {
    if fs::metadata(file).is_err() {
        writeln!(out, "fail")?;
        writeln!(out, "can't stat file {}", file.display())?;
        return Ok(1);
    }

    match identify_format(file) {
        Err(e) => {
            debug!(file = %file.display(), error = %e, "identify failed");
            writeln!(out, "fail")?;
            writeln!(out, "unknown file type")?;
            Ok(1)
        }
        Ok(format) => match format.cli_label() {
            Some(label) => {
                writeln!(out, "succeed")?;
                writeln!(out, "{label}")?;
                Ok(0)
            }
            None => {
                writeln!(out, "fail")?;
                writeln!(out, "{prog}: positive file type, but unknown to this program")?;
                writeln!(out, "{prog}: yell at your friendly neighborhood programmer")?;
                Ok(1)
            }
        },
    }
}

fn read<W: Write>(file: &Path, out: &mut W) -> Result<u8, AppError> {
    match read_info(file) {
        Err(e) => {
            debug!(file = %file.display(), error = %e, "read failed");
            writeln!(out, "fail")?;
            writeln!(
                out,
                "couldn't open or determine file type of {}",
                file.display()
            )?;
            Ok(1)
        }
        Ok(volume) => {
            writeln!(out, "succeed")?;
            volume.dump(out)?;
            Ok(0)
        }
    }
}
