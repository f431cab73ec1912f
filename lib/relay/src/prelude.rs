//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types
//! for easy glob importing:
//!
//! ```
//! use relay::prelude::*;
//! ```

pub use crate::handlers::{BadResponseHandler, GuardianAlertHandler, StatusHandler, UpdateHandler};
pub use crate::{BadResponse, Chain, ChainBuilder, Handler, Next, Response, Result};
