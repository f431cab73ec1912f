//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types
//! for easy glob importing:
//!
//! ```
//! use relay_core::prelude::*;
//! ```

pub use crate::{BadResponse, Response, Result};
