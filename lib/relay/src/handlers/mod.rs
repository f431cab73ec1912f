//! The concrete handlers of the response pipeline.
//!
//! Each handler picks one of two orderings relative to its forward call,
//! which determines whether failures from downstream are observable
//! before or only instead of its own logic:
//!
//! | Handler | Ordering | On downstream failure |
//! |---------|----------|-----------------------|
//! | [`StatusHandler`] | inspect-then-maybe-forward | absorbs |
//! | [`BadResponseHandler`] | inspect-then-forward | n/a (origin of the signal) |
//! | [`GuardianAlertHandler`] | forward-then-inspect | alerts, re-raises unchanged |
//! | [`UpdateHandler`] | forward-then-inspect | logs, absorbs |
//!
//! [`BadResponseHandler`] is the only place a [`relay_core::BadResponse`]
//! is constructed; the others just decide what to do with one travelling
//! back through them.

mod bad_response;
mod guardian_alert;
mod status;
mod update;

pub use bad_response::BadResponseHandler;
pub use guardian_alert::GuardianAlertHandler;
pub use status::StatusHandler;
pub use update::UpdateHandler;
