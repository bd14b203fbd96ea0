//! Binary entrypoint for the `apdsgen` CLI.

use std::process::ExitCode;

fn main() -> ExitCode {
    match apdsgen::run(std::env::args()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
