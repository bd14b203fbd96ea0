//! Per-record dispatch outcomes.

/// The result of one dispatch attempt for one record.
///
/// Outcomes are data, never errors: a failed send is recorded here and the
/// pool keeps going.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// The record's 0-based position in the submission order. The outcome
    /// log reflects completion order; sort by this to recover submission
    /// order.
    pub index: usize,
    /// The record's filename.
    pub filename: String,
    /// HTTP status code, or 0 when the transport itself failed.
    pub status: u16,
    /// True iff the status fell in `[200, 300)`.
    pub ok: bool,
    /// Truncated error text when not successful, empty otherwise.
    pub error: String,
}

impl Outcome {
    /// Builds a success/failure outcome from a response.
    ///
    /// On failure the first 500 characters of the response body (or the
    /// status text, or a fixed fallback) become the error message.
    #[must_use]
    pub fn from_response(
        index: usize,
        filename: String,
        status: u16,
        status_text: &str,
        body: &str,
    ) -> Self {
        let ok = (200..300).contains(&status);
        let error = if ok {
            String::new()
        } else {
            let text = [body, status_text, "Request failed"]
                .into_iter()
                .find(|t| !t.is_empty())
                .unwrap_or_default();
            truncate(text, 500)
        };
        Self { index, filename, status, ok, error }
    }

    /// Builds an outcome for a transport-level failure (no response).
    #[must_use]
    pub fn from_transport_error(index: usize, filename: String, message: &str) -> Self {
        Self { index, filename, status: 0, ok: false, error: truncate(message, 500) }
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}
