//! Bounded-concurrency dispatch of records to an HTTP endpoint.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::dispatch::outcome::Outcome;
use crate::generate::batch::Record;
use crate::ports::http::{HttpRequest, HttpSender};

/// Smallest worker pool size.
pub const MIN_CONCURRENCY: usize = 1;
/// Largest worker pool size.
pub const MAX_CONCURRENCY: usize = 50;
/// Largest accepted per-request delay.
pub const MAX_DELAY_MS: u64 = 60_000;

/// Settings for one dispatch run.
#[derive(Debug, Clone)]
pub struct DispatchConfig {
    /// Destination URL. Must be non-empty.
    pub url: String,
    /// HTTP method; empty falls back to `POST`. Upper-cased before use.
    pub method: String,
    /// Headers applied to every request.
    pub headers: Vec<(String, String)>,
    /// Worker count; clamped to `[1, 50]`.
    pub concurrency: usize,
    /// Sleep before each request, per worker; clamped to `[0, 60000]` ms.
    pub delay_ms: u64,
}

/// One unit of work for the pool.
struct Job {
    filename: String,
    request: HttpRequest,
}

/// Sends every record to the configured endpoint and returns all outcomes.
///
/// A fixed pool of workers (clamped concurrency) consumes a shared atomic
/// cursor over the record list: each worker claims the next index, sleeps
/// the configured delay, issues exactly one request, and reports one
/// [`Outcome`] through a channel to a single collector. The collector
/// appends outcomes in completion order and bumps `completed` after every
/// one, so callers can poll it for live progress. Per-record failures are
/// recorded, never propagated; the pool always runs the full list.
///
/// # Errors
///
/// Refuses up front, before any network activity, when `records` is
/// empty or the URL is blank.
pub async fn dispatch_all(
    sender: Arc<dyn HttpSender>,
    records: &[Record],
    config: &DispatchConfig,
    completed: &Arc<AtomicUsize>,
) -> Result<Vec<Outcome>, String> {
    if records.is_empty() {
        return Err("Generate payloads first.".to_string());
    }
    if config.url.trim().is_empty() {
        return Err("Enter a destination URL to send requests.".to_string());
    }

    let method = if config.method.trim().is_empty() {
        "POST".to_string()
    } else {
        config.method.trim().to_uppercase()
    };
    let concurrency = config.concurrency.clamp(MIN_CONCURRENCY, MAX_CONCURRENCY);
    let delay_ms = config.delay_ms.min(MAX_DELAY_MS);

    let mut jobs = Vec::with_capacity(records.len());
    for record in records {
        let body = serde_json::to_string(&record.body)
            .map_err(|e| format!("Failed to serialize {}: {e}", record.filename))?;
        jobs.push(Job {
            filename: record.filename.clone(),
            request: HttpRequest {
                method: method.clone(),
                url: config.url.trim().to_string(),
                headers: config.headers.clone(),
                body,
            },
        });
    }
    let jobs = Arc::new(jobs);

    completed.store(0, Ordering::SeqCst);
    let cursor = Arc::new(AtomicUsize::new(0));
    let (tx, mut rx) = mpsc::unbounded_channel::<Outcome>();

    let mut workers = Vec::with_capacity(concurrency);
    for _ in 0..concurrency {
        let sender = Arc::clone(&sender);
        let jobs = Arc::clone(&jobs);
        let cursor = Arc::clone(&cursor);
        let tx = tx.clone();
        workers.push(tokio::spawn(async move {
            loop {
                let idx = cursor.fetch_add(1, Ordering::SeqCst);
                if idx >= jobs.len() {
                    break;
                }
                if delay_ms > 0 {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                }
                let job = &jobs[idx];
                let outcome = match sender.send(&job.request).await {
                    Ok(resp) => Outcome::from_response(
                        idx,
                        job.filename.clone(),
                        resp.status,
                        &resp.status_text,
                        &resp.body,
                    ),
                    Err(e) => {
                        Outcome::from_transport_error(idx, job.filename.clone(), &e.to_string())
                    }
                };
                if tx.send(outcome).is_err() {
                    break;
                }
            }
        }));
    }
    drop(tx);

    let mut log = Vec::with_capacity(jobs.len());
    while let Some(outcome) = rx.recv().await {
        log.push(outcome);
        completed.fetch_add(1, Ordering::SeqCst);
    }
    for worker in workers {
        worker.await.map_err(|e| format!("Dispatch worker failed: {e}"))?;
    }

    Ok(log)
}
