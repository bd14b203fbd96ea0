//! HTTP sender port for dispatching payloads.

use std::error::Error;
use std::future::Future;
use std::pin::Pin;

/// Boxed future type alias used by [`HttpSender`] to keep the trait dyn-compatible.
pub type HttpFuture<'a> =
    Pin<Box<dyn Future<Output = Result<HttpResponse, Box<dyn Error + Send + Sync>>> + Send + 'a>>;

/// One HTTP request to be issued by the transport.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method name (e.g. `"POST"`), already upper-cased.
    pub method: String,
    /// Destination URL.
    pub url: String,
    /// Header pairs, in insertion order.
    pub headers: Vec<(String, String)>,
    /// Request body.
    pub body: String,
}

/// A response as seen by the dispatch pool.
///
/// Any response at all, success or error status, is an `Ok`; only a
/// transport-level failure (connect error, invalid method, DNS) is an `Err`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Canonical status text (e.g. `"Internal Server Error"`), empty when
    /// the transport has none.
    pub status_text: String,
    /// Response body text (may be empty).
    pub body: String,
}

/// Sends one HTTP request and returns the response.
pub trait HttpSender: Send + Sync {
    /// Issues the request.
    ///
    /// # Errors
    ///
    /// Returns an error only when no response was obtained at all.
    fn send(&self, request: &HttpRequest) -> HttpFuture<'_>;
}
