//! Core library for the `apdsgen` CLI.

pub mod adapters;
pub mod archive;
pub mod cli;
pub mod commands;
pub mod context;
pub mod dispatch;
pub mod generate;
pub mod ports;
pub mod session;

#[cfg(test)]
mod testutil;

use clap::Parser;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns an error string when argument parsing fails or command execution fails.
pub fn run<I, T>(args: I) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args).map_err(|err| err.to_string())?;
    commands::dispatch(&cli.command)
}

#[cfg(test)]
mod tests {
    use super::run;
    use std::fs;

    #[test]
    fn run_generates_from_a_template_file() {
        let dir = std::env::temp_dir().join("apdsgen_lib_run_generate");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let template = dir.join("template.json");
        fs::write(
            &template,
            r#"{"apdsRequest":{"messageMetaData":{"requestId":"X"},"identityAttributes":{"EDIPI":"Y"}}}"#,
        )
        .unwrap();
        let out = dir.join("out");

        let result = run([
            "apdsgen",
            "generate",
            "--template",
            template.to_str().unwrap(),
            "--count",
            "2",
            "--out",
            out.to_str().unwrap(),
        ]);
        assert!(result.is_ok());
        assert!(out.join("apds_payloads_2.zip").exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn run_errors_on_unknown_subcommand() {
        let result = run(["apdsgen", "unknown"]);
        assert!(result.is_err());
    }

    #[test]
    fn run_errors_without_a_subcommand() {
        let result = run(["apdsgen"]);
        assert!(result.is_err());
    }
}
