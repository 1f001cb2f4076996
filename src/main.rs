// src/main.rs

//! The `findglob` command-line application.
//!
//! Parses the pattern list, hands it to the library, and maps the result
//! onto exit codes: 0 for a clean run, 1 for any parse error, a failed
//! start, at least one unreadable directory, or an all-anti-pattern
//! invocation. Help and version output go to stdout and exit 0.

use clap::Parser;
use clap::error::ErrorKind;
use findglob::cli::CliArgs;
use std::io::{self, Write};
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => {
            // clap writes help/version to stdout and usage errors to
            // stderr; only the exit code is ours to pick
            let ok = matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion);
            let _ = e.print();
            return if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE };
        }
    };

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    match findglob::run(&args.patterns, &mut out, &mut err) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            let _ = writeln!(err, "findglob: {e}");
            ExitCode::FAILURE
        }
    }
}
