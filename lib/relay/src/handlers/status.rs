//! Status-validation handler, the root of a compliance status chain.

use std::sync::atomic::{AtomicU64, Ordering};

use relay_core::{Response, Result};
use tracing::{debug, info, warn};

use crate::handler::{Handler, Next};

/// Root handler for compliance status responses.
///
/// A 2xx response is terminal here: the body is parsed, the record is
/// dispatched for dialing, and nothing is forwarded. Anything else goes
/// down the chain, and whatever failure comes back up is absorbed here.
/// This is the terminal absorption point for its chain, so a caller
/// invoking it never sees a [`relay_core::BadResponse`].
#[derive(Debug, Default)]
pub struct StatusHandler {
    dispatched: AtomicU64,
}

impl StatusHandler {
    /// Create a new status-validation handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records dispatched for dialing so far.
    #[must_use]
    pub fn dispatched(&self) -> u64 {
        self.dispatched.load(Ordering::Relaxed)
    }
}

impl Handler for StatusHandler {
    fn name(&self) -> &'static str {
        "status"
    }

    fn handle(&self, response: &Response, next: Next<'_>) -> Result<()> {
        if response.is_success() {
            info!(status = response.status(), "successful HTTP response");
            debug!(body = %response.body_text(), "parsing response body");
            self.dispatched.fetch_add(1, Ordering::Relaxed);
            info!("sending record to be dialed");
            return Ok(());
        }

        match next.run(response) {
            Ok(()) => Ok(()),
            Err(err) => {
                warn!(status = err.status(), "bad HTTP response, skipping record");
                Ok(())
            }
        }
    }
}
