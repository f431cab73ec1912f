//! HTTP-style response values.
//!
//! [`Response`] is the unit of work flowing through a handler chain: a
//! status code, a body, and an optional transport-level error message.
//! It is immutable once constructed; handlers only ever borrow it.
//!
//! # Example
//!
//! ```
//! use relay_core::Response;
//!
//! let response = Response::new(200, "Hello world HTML!");
//! assert!(response.is_success());
//! ```

use std::borrow::Cow;

use bytes::Bytes;

/// An HTTP-style response with status, body, and optional transport error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    body: Bytes,
    transport_error: Option<String>,
}

impl Response {
    /// Creates a new response with no transport error.
    #[must_use]
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
            transport_error: None,
        }
    }

    /// Attach a transport-level error message.
    ///
    /// An empty message is normalized to "no transport error".
    #[must_use]
    pub fn with_transport_error(mut self, error: impl Into<String>) -> Self {
        let error = error.into();
        self.transport_error = if error.is_empty() { None } else { Some(error) };
        self
    }

    /// HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Response body.
    #[must_use]
    pub const fn body(&self) -> &Bytes {
        &self.body
    }

    /// Transport-level error message, if any.
    #[must_use]
    pub fn transport_error(&self) -> Option<&str> {
        self.transport_error.as_deref()
    }

    /// Status is 2xx.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status >= 200 && self.status < 300
    }

    /// Status is 3xx.
    #[must_use]
    pub const fn is_redirection(&self) -> bool {
        self.status >= 300 && self.status < 400
    }

    /// Status is 4xx.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        self.status >= 400 && self.status < 500
    }

    /// Status is 5xx.
    #[must_use]
    pub const fn is_server_error(&self) -> bool {
        self.status >= 500 && self.status < 600
    }

    /// The body as text, with invalid UTF-8 replaced.
    #[must_use]
    pub fn body_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserialize the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if deserialization fails.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.body)
    }
}
