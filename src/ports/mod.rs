//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the application core and an
//! external system (time, randomness, HTTP transport). Implementations
//! live in `src/adapters/`.

pub mod clock;
pub mod http;
pub mod random;

pub use clock::Clock;
pub use http::{HttpFuture, HttpRequest, HttpResponse, HttpSender};
pub use random::RandomSource;
