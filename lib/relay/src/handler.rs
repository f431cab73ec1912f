//! The handler contract and the forwarding cursor.
//!
//! - [`Handler`] - A single link's processing operation
//! - [`Next`] - Borrowed view of the remaining links, used to forward
//!
//! A handler signals failure by returning `Err(BadResponse)` from
//! [`Handler::handle`]. The error value travels back through the handlers
//! already entered on the current call path; each of them inspects the
//! result of its forward call and decides to pass the error through
//! unchanged, act on it and re-raise it, or convert it to success.

use std::sync::Arc;

use relay_core::{Response, Result};

/// A single link in a response-processing chain.
///
/// Implementations must be shareable across chains: the same instance may
/// sit in the tail of several chains at once, so any state they carry has
/// to be safe under shared access.
pub trait Handler: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Process the response, forwarding to the remaining links via `next`.
    ///
    /// # Errors
    ///
    /// Returns [`relay_core::BadResponse`] when this handler raises a
    /// failure or chooses to propagate one raised further down the chain.
    fn handle(&self, response: &Response, next: Next<'_>) -> Result<()>;
}

/// The remaining links of a chain, from the current handler's successor on.
///
/// Calling [`Next::run`] hands the response to the next link. An empty
/// `Next` is the end of the chain: running it succeeds without side
/// effects, so a tail handler forwards unconditionally without checking
/// whether a successor exists.
#[derive(Clone, Copy)]
pub struct Next<'a> {
    handlers: &'a [Arc<dyn Handler>],
}

impl<'a> Next<'a> {
    pub(crate) const fn new(handlers: &'a [Arc<dyn Handler>]) -> Self {
        Self { handlers }
    }

    /// Number of links left after the current handler.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if the current handler is the last link.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Forward the response to the next link.
    ///
    /// # Errors
    ///
    /// Propagates any [`relay_core::BadResponse`] raised by the remaining
    /// links.
    pub fn run(self, response: &Response) -> Result<()> {
        match self.handlers.split_first() {
            Some((head, rest)) => {
                tracing::trace!(handler = head.name(), "forwarding response");
                head.handle(response, Next::new(rest))
            }
            None => Ok(()),
        }
    }
}

impl std::fmt::Debug for Next<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|h| h.name()))
            .finish()
    }
}
