//! Failure signal for the relay handler chain.

use derive_more::{Display, Error};

/// Failure signal raised when a response carries a status code outside
/// the success range `[200, 299]`.
///
/// Only the failure-detection handler constructs this value; every other
/// handler either passes it back unchanged or converts it to success.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("bad HTTP response {status}")]
pub struct BadResponse {
    #[error(not(source))]
    status: u16,
}

/// Result type alias using [`BadResponse`].
pub type Result<T> = std::result::Result<T, BadResponse>;

impl BadResponse {
    /// Classification tag carried by every instance of this signal.
    pub const CLASSIFICATION: &'static str = "bad-http-response";

    /// Create a failure signal for the given status code.
    #[must_use]
    pub const fn new(status: u16) -> Self {
        Self { status }
    }

    /// The status code that triggered the signal.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Classification of the signal.
    #[must_use]
    pub const fn classification(&self) -> &'static str {
        Self::CLASSIFICATION
    }

    /// Returns `true` if the carried status is a client error (4xx).
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Returns `true` if the carried status is a server error (5xx).
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = BadResponse::new(404);
        assert_eq!(err.to_string(), "bad HTTP response 404");
    }

    #[test]
    fn error_status() {
        let err = BadResponse::new(404);
        assert_eq!(err.status(), 404);
        assert!(err.is_client_error());
        assert!(!err.is_server_error());

        let err = BadResponse::new(503);
        assert_eq!(err.status(), 503);
        assert!(!err.is_client_error());
        assert!(err.is_server_error());
    }

    #[test]
    fn error_classification() {
        let err = BadResponse::new(500);
        assert_eq!(err.classification(), "bad-http-response");
        assert_eq!(BadResponse::CLASSIFICATION, "bad-http-response");
    }
}
