//! Deterministic port fakes shared across unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{DateTime, Utc};

use crate::ports::clock::Clock;
use crate::ports::random::RandomSource;

/// Clock pinned to a single instant.
pub struct FixedClock(pub DateTime<Utc>);

impl FixedClock {
    /// Pins the clock to the given RFC 3339 timestamp.
    ///
    /// # Panics
    ///
    /// Panics when the timestamp does not parse (test-only convenience).
    pub fn at(rfc3339: &str) -> Self {
        Self(DateTime::parse_from_rfc3339(rfc3339).unwrap().with_timezone(&Utc))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Random source that walks an incrementing counter.
///
/// `below(bound)` returns `counter % bound`, so consecutive draws sweep the
/// value space deterministically.
pub struct StepRandom {
    next: AtomicUsize,
}

impl StepRandom {
    /// Starts the counter at zero.
    pub fn new() -> Self {
        Self { next: AtomicUsize::new(0) }
    }
}

impl RandomSource for StepRandom {
    fn below(&self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.next.fetch_add(1, Ordering::SeqCst) % bound
    }
}

/// Random source that always answers with the same value (clamped).
///
/// Useful for forcing uniqueness-retry exhaustion: every candidate a
/// generator produces comes out identical.
pub struct ConstRandom(pub usize);

impl RandomSource for ConstRandom {
    fn below(&self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        self.0 % bound
    }
}
