//! Dispatching generated payloads to an HTTP endpoint.

pub mod headers;
pub mod outcome;
pub mod pool;
pub mod profile;

pub use headers::{build_headers, curl_example};
pub use outcome::Outcome;
pub use pool::{dispatch_all, DispatchConfig, MAX_CONCURRENCY, MAX_DELAY_MS};
pub use profile::SendProfile;
