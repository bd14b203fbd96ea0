//! Clock port for obtaining the current time.

use chrono::{DateTime, Utc};

/// Provides the current time.
///
/// Request ids and request timestamps embed the current UTC minute and
/// second; abstracting time access lets tests pin the clock and assert
/// exact generated values.
pub trait Clock: Send + Sync {
    /// Returns the current UTC time.
    fn now(&self) -> DateTime<Utc>;
}
