//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `apdsgen`.
#[derive(Debug, Parser)]
#[command(name = "apdsgen", version, about = "Generate and dispatch synthetic APDS payloads")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate payloads from a template and package them for download.
    Generate(GenerateArgs),
    /// Send generated payloads to an HTTP endpoint.
    Send(SendArgs),
    /// Print a curl command reproducing the dispatch request.
    Curl(CurlArgs),
}

/// Arguments for `apdsgen generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Template JSON file; `-` reads from stdin.
    #[arg(long)]
    pub template: PathBuf,
    /// How many payloads to create (clamped to 1–5000).
    #[arg(long, default_value_t = 10)]
    pub count: usize,
    /// Prefix for generated request ids.
    #[arg(long, default_value = "BLLTEST")]
    pub prefix: String,
    /// Domain for generated email addresses.
    #[arg(long, default_value = "VA.TEST.COM")]
    pub domain: String,
    /// Output directory for payload files, archive, and index.
    #[arg(long, default_value = "payloads_out")]
    pub out: PathBuf,
}

/// Arguments for `apdsgen send`.
#[derive(Debug, Args)]
pub struct SendArgs {
    /// Directory holding the generated payload files.
    #[arg(long)]
    pub dir: PathBuf,
    /// Destination URL.
    #[arg(long)]
    pub url: Option<String>,
    /// HTTP method (default POST).
    #[arg(long)]
    pub method: Option<String>,
    /// Extra header, `Key: Value`; repeatable.
    #[arg(long = "header", value_name = "KEY: VALUE")]
    pub headers: Vec<String>,
    /// Bearer token; falls back to `APDSGEN_BEARER_TOKEN`.
    #[arg(long)]
    pub bearer_token: Option<String>,
    /// Concurrent workers (clamped to 1–50).
    #[arg(long)]
    pub concurrency: Option<usize>,
    /// Delay before each request, per worker (clamped to 0–60000 ms).
    #[arg(long)]
    pub delay_ms: Option<u64>,
    /// YAML profile with saved dispatch settings; flags override it.
    #[arg(long)]
    pub profile: Option<PathBuf>,
}

/// Arguments for `apdsgen curl`.
#[derive(Debug, Args)]
pub struct CurlArgs {
    /// Directory holding the generated payload files.
    #[arg(long)]
    pub dir: PathBuf,
    /// Destination URL (placeholder when omitted).
    #[arg(long)]
    pub url: Option<String>,
    /// HTTP method (default POST).
    #[arg(long)]
    pub method: Option<String>,
    /// Extra header, `Key: Value`; repeatable.
    #[arg(long = "header", value_name = "KEY: VALUE")]
    pub headers: Vec<String>,
    /// Bearer token; falls back to `APDSGEN_BEARER_TOKEN`.
    #[arg(long)]
    pub bearer_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::Parser;

    #[test]
    fn parses_generate_with_defaults() {
        let cli = Cli::parse_from(["apdsgen", "generate", "--template", "t.json"]);
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.count, 10);
        assert_eq!(args.prefix, "BLLTEST");
        assert_eq!(args.domain, "VA.TEST.COM");
    }

    #[test]
    fn parses_send_with_repeated_headers() {
        let cli = Cli::parse_from([
            "apdsgen",
            "send",
            "--dir",
            "out",
            "--url",
            "https://x",
            "--header",
            "X-Env: test",
            "--header",
            "X-Trace: 123",
            "--concurrency",
            "5",
        ]);
        let Command::Send(args) = cli.command else {
            panic!("expected send");
        };
        assert_eq!(args.headers.len(), 2);
        assert_eq!(args.concurrency, Some(5));
        assert_eq!(args.url.as_deref(), Some("https://x"));
    }

    #[test]
    fn parses_curl_subcommand() {
        let cli = Cli::parse_from(["apdsgen", "curl", "--dir", "out"]);
        assert!(matches!(cli.command, Command::Curl(_)));
    }

    #[test]
    fn send_requires_a_directory() {
        assert!(Cli::try_parse_from(["apdsgen", "send"]).is_err());
    }
}
