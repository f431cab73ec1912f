//! Update-acknowledgement handler, the root of an update chain.

use std::sync::atomic::{AtomicU64, Ordering};

use relay_core::{Response, Result};
use tracing::{info, warn};

use crate::handler::{Handler, Next};

/// Root handler for update responses.
///
/// Forwards before branching on its own status check: the
/// acknowledgement only fires when the links behind it raised nothing.
/// A failure coming back up is logged with its carried status code and
/// absorbed, so like [`super::StatusHandler`] this is a terminal
/// absorption point for its chain.
#[derive(Debug, Default)]
pub struct UpdateHandler {
    acknowledged: AtomicU64,
}

impl UpdateHandler {
    /// Create a new update-acknowledgement handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of updates acknowledged so far.
    #[must_use]
    pub fn acknowledged(&self) -> u64 {
        self.acknowledged.load(Ordering::Relaxed)
    }
}

impl Handler for UpdateHandler {
    fn name(&self) -> &'static str {
        "update"
    }

    fn handle(&self, response: &Response, next: Next<'_>) -> Result<()> {
        match next.run(response) {
            Ok(()) => {
                if response.is_success() {
                    self.acknowledged.fetch_add(1, Ordering::Relaxed);
                    info!(status = response.status(), "successful HTTP update");
                }
                Ok(())
            }
            Err(err) => {
                warn!(
                    status = err.status(),
                    classification = err.classification(),
                    "bad response on update request, nothing to do, just log it"
                );
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::handlers::BadResponseHandler;

    #[test]
    fn acknowledges_after_clean_forward() {
        let handler = UpdateHandler::new();
        let tail: Vec<Arc<dyn Handler>> = vec![Arc::new(BadResponseHandler::new())];

        let outcome = handler.handle(&Response::new(204, ""), Next::new(&tail));

        assert_eq!(outcome, Ok(()));
        assert_eq!(handler.acknowledged(), 1);
    }

    #[test]
    fn failure_is_logged_and_absorbed() {
        let handler = UpdateHandler::new();
        let tail: Vec<Arc<dyn Handler>> = vec![Arc::new(BadResponseHandler::new())];

        let outcome = handler.handle(&Response::new(404, ""), Next::new(&tail));

        assert_eq!(outcome, Ok(()));
        assert_eq!(handler.acknowledged(), 0);
    }
}
