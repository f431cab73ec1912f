//! Chain assembly and invocation.
//!
//! A [`Chain`] owns its links as an ordered sequence, fixed at build
//! time. Successor relationships are positions in that sequence rather
//! than pointers between handlers, so a handler instance can sit in the
//! tail of several chains at once behind an `Arc` without any dangling
//! reference risk.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use relay::handlers::{BadResponseHandler, GuardianAlertHandler, StatusHandler};
//! use relay::{Chain, Response};
//!
//! let chain = Chain::builder()
//!     .link(StatusHandler::new())
//!     .link(GuardianAlertHandler::new())
//!     .link(BadResponseHandler::new())
//!     .build();
//!
//! let outcome = chain.handle(&Response::new(200, "Hello world HTML!"));
//! assert!(outcome.is_ok());
//! ```

use std::fmt;
use std::sync::Arc;

use relay_core::{Response, Result};
use tracing::{Level, span};

use crate::handler::{Handler, Next};

/// An ordered, immutable sequence of handlers.
#[derive(Clone, Default)]
pub struct Chain {
    handlers: Vec<Arc<dyn Handler>>,
}

impl Chain {
    /// Create a new chain builder.
    #[must_use]
    pub fn builder() -> ChainBuilder {
        ChainBuilder::default()
    }

    /// Number of links in the chain.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns `true` if the chain has no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run one response through the chain, starting at the head link.
    ///
    /// The call is synchronous and completes entirely before returning:
    /// either every reached link fell through or absorbed the failure
    /// (`Ok`), or an unabsorbed [`relay_core::BadResponse`] unwound past
    /// the head and is handed to the caller as the backstop.
    ///
    /// An empty chain succeeds without side effects.
    ///
    /// # Errors
    ///
    /// Returns the [`relay_core::BadResponse`] left unabsorbed by every
    /// link on the active call path.
    pub fn handle(&self, response: &Response) -> Result<()> {
        let span = span!(Level::DEBUG, "chain", links = self.handlers.len(), status = response.status());
        let _guard = span.enter();

        Next::new(&self.handlers).run(response)
    }
}

impl fmt::Debug for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|h| h.name()))
            .finish()
    }
}

/// Builder for [`Chain`], appending links head to tail.
///
/// Every method is fluent, so assembling a chain is a single expression;
/// the order of `link` calls is the order handlers run in.
#[derive(Clone, Default)]
pub struct ChainBuilder {
    handlers: Vec<Arc<dyn Handler>>,
}

impl ChainBuilder {
    /// Append a handler owned exclusively by this chain.
    #[must_use]
    pub fn link(self, handler: impl Handler + 'static) -> Self {
        self.link_shared(Arc::new(handler))
    }

    /// Append a handler shared with other chains.
    #[must_use]
    pub fn link_shared(mut self, handler: Arc<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    /// Append a handler if present; `None` leaves the builder unchanged.
    #[must_use]
    pub fn link_maybe(self, handler: Option<Arc<dyn Handler>>) -> Self {
        match handler {
            Some(handler) => self.link_shared(handler),
            None => self,
        }
    }

    /// Build the chain.
    #[must_use]
    pub fn build(self) -> Chain {
        Chain {
            handlers: self.handlers,
        }
    }
}

impl fmt::Debug for ChainBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(self.handlers.iter().map(|h| h.name()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use relay_core::BadResponse;

    use super::*;

    struct AlwaysFail;

    impl Handler for AlwaysFail {
        fn name(&self) -> &'static str {
            "always-fail"
        }

        fn handle(&self, response: &Response, _next: Next<'_>) -> Result<()> {
            Err(BadResponse::new(response.status()))
        }
    }

    #[test]
    fn empty_chain_succeeds() {
        let chain = Chain::builder().build();
        assert!(chain.is_empty());
        assert!(chain.handle(&Response::new(404, "")).is_ok());
    }

    #[test]
    fn link_maybe_none_is_a_no_op() {
        let builder = Chain::builder().link(AlwaysFail).link_maybe(None);
        let chain = builder.build();
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn link_maybe_some_appends() {
        let chain = Chain::builder()
            .link_maybe(Some(Arc::new(AlwaysFail)))
            .build();
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn unabsorbed_failure_reaches_the_caller() {
        let chain = Chain::builder().link(AlwaysFail).build();
        let outcome = chain.handle(&Response::new(502, ""));
        assert_eq!(outcome, Err(BadResponse::new(502)));
    }

    #[test]
    fn shared_handler_across_two_chains() {
        let shared: Arc<dyn Handler> = Arc::new(AlwaysFail);
        let a = Chain::builder().link_shared(Arc::clone(&shared)).build();
        let b = Chain::builder().link_shared(shared).build();

        assert!(a.handle(&Response::new(404, "")).is_err());
        assert!(b.handle(&Response::new(404, "")).is_err());
    }

    #[test]
    fn chain_debug_lists_links_in_order() {
        let chain = Chain::builder().link(AlwaysFail).link(AlwaysFail).build();
        assert_eq!(format!("{chain:?}"), r#"["always-fail", "always-fail"]"#);
    }
}
