//! Alerting handler.

use std::sync::atomic::{AtomicU64, Ordering};

use relay_core::{Response, Result};
use tracing::warn;

use crate::handler::{Handler, Next};

/// Sends a guardian alert for any failure raised behind it, then
/// re-raises the same signal unchanged.
///
/// Forwards first and only inspects the outcome, so it sits anywhere
/// between a chain's root and the failure origin as a pure observer: it
/// never absorbs and it never alters the carried status code.
#[derive(Debug, Default)]
pub struct GuardianAlertHandler {
    alerts_sent: AtomicU64,
}

impl GuardianAlertHandler {
    /// Create a new alerting handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of alerts sent so far, across every chain sharing this
    /// instance.
    #[must_use]
    pub fn alerts_sent(&self) -> u64 {
        self.alerts_sent.load(Ordering::Relaxed)
    }
}

impl Handler for GuardianAlertHandler {
    fn name(&self) -> &'static str {
        "guardian-alert"
    }

    fn handle(&self, response: &Response, next: Next<'_>) -> Result<()> {
        let outcome = next.run(response);
        if let Err(err) = &outcome {
            self.alerts_sent.fetch_add(1, Ordering::Relaxed);
            warn!(
                status = err.status(),
                classification = err.classification(),
                "caught bad response, sending guardian alert"
            );
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use relay_core::BadResponse;

    use super::*;
    use crate::handlers::BadResponseHandler;

    #[test]
    fn re_raises_the_same_signal() {
        let handler = GuardianAlertHandler::new();
        let tail: Vec<Arc<dyn Handler>> = vec![Arc::new(BadResponseHandler::new())];

        let outcome = handler.handle(&Response::new(404, ""), Next::new(&tail));

        assert_eq!(outcome, Err(BadResponse::new(404)));
        assert_eq!(handler.alerts_sent(), 1);
    }

    #[test]
    fn no_alert_without_a_failure() {
        let handler = GuardianAlertHandler::new();

        let outcome = handler.handle(&Response::new(200, "ok"), Next::new(&[]));

        assert_eq!(outcome, Ok(()));
        assert_eq!(handler.alerts_sent(), 0);
    }
}
