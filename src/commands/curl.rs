//! `apdsgen curl` command.

use crate::cli::CurlArgs;
use crate::commands::send::{self, BEARER_TOKEN_VAR};
use crate::dispatch::headers::{build_headers, curl_example};

/// Execute the `curl` command.
///
/// Prints a `curl` invocation reproducing the dispatch request for the
/// first payload file in the directory, so a send can be replayed by hand
/// outside this tool.
///
/// # Errors
///
/// Returns an error string when the directory cannot be read or holds no
/// payload files.
pub fn run(args: &CurlArgs) -> Result<(), String> {
    let records = send::load_records(&args.dir)?;
    let Some(first) = records.first() else {
        return Err(format!("No payload files found in {}", args.dir.display()));
    };

    let bearer = args
        .bearer_token
        .clone()
        .or_else(|| std::env::var(BEARER_TOKEN_VAR).ok())
        .unwrap_or_default();
    let headers = build_headers(&args.headers.join("\n"), &bearer);

    let method = args.method.as_deref().unwrap_or("POST");
    let url = args.url.as_deref().unwrap_or_default();
    println!("{}", curl_example(method, url, &headers, &first.filename));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn args(dir: PathBuf) -> CurlArgs {
        CurlArgs {
            dir,
            url: Some("https://svc.example.com/apds".to_string()),
            method: None,
            headers: vec!["X-Env: test".to_string()],
            bearer_token: None,
        }
    }

    #[test]
    fn prints_for_the_first_payload() {
        let dir = std::env::temp_dir().join("apdsgen_cmd_curl_ok");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("a.json"), "{\"x\":1}").unwrap();

        assert!(run(&args(dir.clone())).is_ok());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn errors_when_no_payloads_exist() {
        let dir = std::env::temp_dir().join("apdsgen_cmd_curl_empty");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();

        let err = run(&args(dir.clone())).unwrap_err();
        assert!(err.contains("No payload files"));

        let _ = fs::remove_dir_all(&dir);
    }
}
