//! Live HTTP sender using `reqwest`.

use reqwest::Client;
use reqwest::Method;

use crate::ports::http::{HttpFuture, HttpRequest, HttpResponse, HttpSender};

/// Live HTTP sender that issues real requests over the network.
pub struct LiveHttpSender {
    client: Client,
}

impl LiveHttpSender {
    /// Creates a new live sender with a shared connection pool.
    #[must_use]
    pub fn new() -> Self {
        Self { client: Client::new() }
    }
}

impl Default for LiveHttpSender {
    fn default() -> Self {
        Self::new()
    }
}

impl HttpSender for LiveHttpSender {
    fn send(&self, request: &HttpRequest) -> HttpFuture<'_> {
        let method = request.method.clone();
        let url = request.url.clone();
        let headers = request.headers.clone();
        let body = request.body.clone();

        Box::pin(async move {
            let method = Method::from_bytes(method.as_bytes())
                .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Invalid HTTP method {method:?}: {e}").into()
                })?;

            let mut builder = self.client.request(method, &url);
            for (key, value) in &headers {
                builder = builder.header(key, value);
            }

            let response = builder.body(body).send().await.map_err(
                |e| -> Box<dyn std::error::Error + Send + Sync> {
                    format!("Request failed: {e}").into()
                },
            )?;

            let status = response.status().as_u16();
            let status_text =
                response.status().canonical_reason().unwrap_or_default().to_string();
            // A body read failure after a successful exchange still counts
            // as a response; the status is what the pool cares about.
            let body = response.text().await.unwrap_or_default();

            Ok(HttpResponse { status, status_text, body })
        })
    }
}
