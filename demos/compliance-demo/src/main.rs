//! Compliance status demo.
//!
//! Builds the two chains from the relay crate and runs a fake response
//! through each: a successful status response, then a failing update
//! response. No network involved; the responses stand in for what a
//! transport would have produced.

// Demo-specific lint allowances
#![allow(missing_docs)]

use std::sync::Arc;

use relay::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Alerting and failure detection are shared tails of both chains.
    let guardian: Arc<dyn Handler> = Arc::new(GuardianAlertHandler::new());
    let bad_response: Arc<dyn Handler> = Arc::new(BadResponseHandler::new());

    let status_chain = Chain::builder()
        .link(StatusHandler::new())
        .link_shared(Arc::clone(&guardian))
        .link_shared(Arc::clone(&bad_response))
        .build();

    let update_chain = Chain::builder()
        .link(UpdateHandler::new())
        .link_shared(guardian)
        .link_shared(bad_response)
        .build();

    // A compliance status request that succeeded.
    let response = Response::new(200, "Hello world HTML!");
    info!(status = response.status(), "running status chain");
    run(&status_chain, &response);

    // An update request that came back 404.
    let update_response = Response::new(404, "Hello world HTML!");
    info!(status = update_response.status(), "running update chain");
    run(&update_chain, &update_response);
}

/// Invoke the chain; an unabsorbed failure is logged, not fatal.
fn run(chain: &Chain, response: &Response) {
    if let Err(err) = chain.handle(response) {
        warn!(
            status = err.status(),
            classification = err.classification(),
            "caught unhandled bad response: {err}"
        );
    }
}
