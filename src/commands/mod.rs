//! Command dispatch and handlers.

pub mod curl;
pub mod generate;
pub mod send;

use crate::cli::Command;
use crate::context::ServiceContext;

/// Dispatch a parsed command to its handler.
///
/// A `.env` file in the working directory is honored before handlers read
/// environment variables (bearer token fallback).
///
/// # Errors
///
/// Returns an error string if the selected command handler fails.
pub fn dispatch(command: &Command) -> Result<(), String> {
    let _ = dotenvy::dotenv();
    let ctx = ServiceContext::live();
    match command {
        Command::Generate(args) => generate::run(&ctx, args),
        Command::Send(args) => send::run(&ctx, args),
        Command::Curl(args) => curl::run(args),
    }
}
