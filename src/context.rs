//! Service context bundling all port trait objects.

use std::sync::Arc;

use crate::adapters::live::clock::LiveClock;
use crate::adapters::live::http::LiveHttpSender;
use crate::adapters::live::random::LiveRandom;
use crate::ports::clock::Clock;
use crate::ports::http::HttpSender;
use crate::ports::random::RandomSource;

/// Bundles all port trait objects into a single context.
///
/// Each field provides access to one external boundary. The HTTP sender is
/// shared (`Arc`) because dispatch workers hold it across task boundaries.
pub struct ServiceContext {
    /// Clock for obtaining the current time.
    pub clock: Box<dyn Clock>,
    /// Random source for field generation.
    pub rng: Box<dyn RandomSource>,
    /// HTTP sender for payload dispatch.
    pub http: Arc<dyn HttpSender>,
}

impl ServiceContext {
    /// Creates a live context with real adapters for all ports.
    #[must_use]
    pub fn live() -> Self {
        Self {
            clock: Box::new(LiveClock),
            rng: Box::new(LiveRandom),
            http: Arc::new(LiveHttpSender::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn live_context_tells_time_and_draws_numbers() {
        let ctx = ServiceContext::live();
        let now = ctx.clock.now();
        assert!(now.timestamp() > 0);
        assert!(ctx.rng.below(5) < 5);
    }
}
