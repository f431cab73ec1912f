//! Core types for the relay response-processing chain.
//!
//! This crate provides the foundational types used by relay:
//! - [`Response`] - An immutable HTTP-style response (status, body, transport error)
//! - [`BadResponse`] - The failure signal carried up the handler chain
//! - [`Result`] - Result alias using [`BadResponse`] as the error type

mod error;
pub mod prelude;
mod response;

pub use error::{BadResponse, Result};
pub use response::Response;
