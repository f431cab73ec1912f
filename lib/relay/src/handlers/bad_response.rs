//! Failure-detection handler.

use relay_core::{BadResponse, Response, Result};
use tracing::warn;

use crate::handler::{Handler, Next};

/// Raises [`BadResponse`] for any status code outside `[200, 299]`.
///
/// Raising short-circuits the rest of the chain: links behind this one
/// are never reached for a failing response. Links in front of it catch
/// the signal on the way back up and react to it.
///
/// Stateless, so a single instance is typically shared as the tail of
/// several chains.
#[derive(Debug, Clone, Copy, Default)]
pub struct BadResponseHandler;

impl BadResponseHandler {
    /// Create a new failure-detection handler.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Handler for BadResponseHandler {
    fn name(&self) -> &'static str {
        "bad-response"
    }

    fn handle(&self, response: &Response, next: Next<'_>) -> Result<()> {
        if !response.is_success() {
            warn!(status = response.status(), "handling bad HTTP response");
            return Err(BadResponse::new(response.status()));
        }
        next.run(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raises_for_out_of_range_status() {
        let handler = BadResponseHandler::new();

        for status in [100, 199, 300, 404, 500, 503] {
            let outcome = handler.handle(&Response::new(status, ""), Next::new(&[]));
            assert_eq!(outcome, Err(BadResponse::new(status)));
        }
    }

    #[test]
    fn forwards_for_success_status() {
        let handler = BadResponseHandler::new();

        for status in [200, 204, 299] {
            let outcome = handler.handle(&Response::new(status, "ok"), Next::new(&[]));
            assert_eq!(outcome, Ok(()));
        }
    }
}
