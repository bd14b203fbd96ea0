//! `apdsgen send` command.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crate::cli::SendArgs;
use crate::context::ServiceContext;
use crate::dispatch::headers::build_headers;
use crate::dispatch::outcome::Outcome;
use crate::dispatch::pool::DispatchConfig;
use crate::dispatch::profile::SendProfile;
use crate::generate::batch::{FieldSummary, Record};
use crate::session::Session;

/// Environment variable consulted when no bearer token flag is given.
pub const BEARER_TOKEN_VAR: &str = "APDSGEN_BEARER_TOKEN";

/// Default worker count, matching the generator's usual batch sizes.
const DEFAULT_CONCURRENCY: usize = 3;

/// Execute the `send` command.
///
/// Loads payload files from the directory (sorted by filename for a stable
/// submission order), dispatches them with the configured pool, prints a
/// live progress line while sending, and renders the outcome table with
/// failures first.
///
/// # Errors
///
/// Returns an error string when the directory cannot be read, a payload
/// fails to parse, the profile is invalid, or dispatch is refused (no
/// records, blank URL).
pub fn run(ctx: &ServiceContext, args: &SendArgs) -> Result<(), String> {
    let profile = match &args.profile {
        Some(path) => SendProfile::load(path)?,
        None => SendProfile::default(),
    };

    let url = args.url.clone().or(profile.url).unwrap_or_default();
    let method = args.method.clone().or(profile.method).unwrap_or_else(|| "POST".to_string());
    let bearer = args
        .bearer_token
        .clone()
        .or(profile.bearer_token)
        .or_else(|| std::env::var(BEARER_TOKEN_VAR).ok())
        .unwrap_or_default();

    let mut header_lines = profile.headers.unwrap_or_default();
    for line in &args.headers {
        header_lines.push('\n');
        header_lines.push_str(line);
    }
    let headers = build_headers(&header_lines, &bearer);

    let records = load_records(&args.dir)?;
    let total = records.len();
    let mut session = Session::new();
    session.adopt_records(records);

    let config = DispatchConfig {
        url,
        method,
        headers,
        concurrency: args.concurrency.or(profile.concurrency).unwrap_or(DEFAULT_CONCURRENCY),
        delay_ms: args.delay_ms.or(profile.delay_ms).unwrap_or(0),
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("Failed to start async runtime: {e}"))?;

    let completed = Arc::new(AtomicUsize::new(0));
    let outcomes = runtime.block_on(async {
        let progress_counter = Arc::clone(&completed);
        let progress = tokio::spawn(async move {
            loop {
                let done = progress_counter.load(Ordering::SeqCst);
                eprint!("\rSent {done}/{total}");
                if done >= total {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(200)).await;
            }
            eprintln!();
        });

        match session.dispatch(Arc::clone(&ctx.http), &config, &completed).await {
            Ok(outcomes) => {
                let outcomes = outcomes.to_vec();
                let _ = progress.await;
                Ok(outcomes)
            }
            Err(e) => {
                progress.abort();
                Err(e)
            }
        }
    })?;

    print_results(&outcomes);
    Ok(())
}

/// Loads payload records from a directory of `.json` files.
///
/// `index.json` (the generator's summary manifest) is skipped. Files are
/// sorted by name so the submission order is stable.
///
/// # Errors
///
/// Returns an error when the directory cannot be read or a payload is not
/// valid JSON.
pub(crate) fn load_records(dir: &Path) -> Result<Vec<Record>, String> {
    let entries = fs::read_dir(dir)
        .map_err(|e| format!("Failed to read payload directory {}: {e}", dir.display()))?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry =
            entry.map_err(|e| format!("Failed to read payload directory {}: {e}", dir.display()))?;
        let path = entry.path();
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        let is_index = path.file_name().is_some_and(|name| name == "index.json");
        if is_json && !is_index {
            paths.push(path);
        }
    }
    paths.sort();

    let mut records = Vec::with_capacity(paths.len());
    for path in paths {
        let text = fs::read_to_string(&path)
            .map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
        let body: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| format!("Payload {} is not valid JSON: {e}", path.display()))?;
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let summary = FieldSummary::from_payload(&body);
        records.push(Record { filename, body, summary });
    }
    Ok(records)
}

fn print_results(outcomes: &[Outcome]) {
    let mut sorted = outcomes.to_vec();
    sorted.sort_by_key(|o| o.ok);

    println!("{:<44} {:<8} Result", "File", "Status");
    for outcome in &sorted {
        let status = if outcome.status == 0 { "-".to_string() } else { outcome.status.to_string() };
        let result = if outcome.ok { "OK" } else { outcome.error.as_str() };
        println!("{:<44} {status:<8} {result}", outcome.filename);
    }

    let ok = outcomes.iter().filter(|o| o.ok).count();
    println!("\nOK {ok}/{}", outcomes.len());
}
