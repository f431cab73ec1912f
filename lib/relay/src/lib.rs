//! Chain-of-responsibility pipeline for HTTP-style responses.
//!
//! A [`Response`] flows through an ordered chain of [`Handler`]s. Each
//! link may act on the response, forward it to the remaining links, or
//! raise a [`BadResponse`] that travels back through the links already
//! entered, each of which chooses to observe it, re-raise it, or absorb
//! it.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use relay::handlers::{BadResponseHandler, GuardianAlertHandler, StatusHandler, UpdateHandler};
//! use relay::{Chain, Handler, Response};
//!
//! // Shared tail: alerting and failure detection serve both chains.
//! let guardian: Arc<dyn Handler> = Arc::new(GuardianAlertHandler::new());
//! let bad_response: Arc<dyn Handler> = Arc::new(BadResponseHandler::new());
//!
//! let status_chain = Chain::builder()
//!     .link(StatusHandler::new())
//!     .link_shared(Arc::clone(&guardian))
//!     .link_shared(Arc::clone(&bad_response))
//!     .build();
//!
//! let update_chain = Chain::builder()
//!     .link(UpdateHandler::new())
//!     .link_shared(guardian)
//!     .link_shared(bad_response)
//!     .build();
//!
//! assert!(status_chain.handle(&Response::new(200, "Hello world HTML!")).is_ok());
//! assert!(update_chain.handle(&Response::new(404, "")).is_ok());
//! ```

mod chain;
mod handler;
pub mod handlers;
pub mod prelude;

pub use chain::{Chain, ChainBuilder};
pub use handler::{Handler, Next};

// Re-export core types
pub use relay_core::{BadResponse, Response, Result};
