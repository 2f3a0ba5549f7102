//! HTTP-specific error types for the Candlepin API client.
//!
//! This module contains error types for HTTP operations: non-2xx responses,
//! request validation failures and network errors.
//!
//! # Error Handling
//!
//! - [`HttpResponseError`]: the server answered outside the 2xx range
//! - [`InvalidHttpRequestError`]: a request was rejected before sending
//! - [`HttpError`]: any of the above, or a connection failure
//!
//! The client never retries and never interprets server error payloads; the
//! raw body is handed back in [`HttpResponseError::message`].
//!
//! # Example
//!
//! ```rust,ignore
//! use candlepin_api::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("{}", response.body),
//!     Err(HttpError::Response(e)) if e.code == 404 => println!("no such owner"),
//!     Err(e) => return Err(e.into()),
//! }
//! ```

use thiserror::Error;

/// A non-2xx answer from Candlepin.
///
/// # Example
///
/// ```rust
/// use candlepin_api::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 404,
///     message: r#"{"displayMessage":"Owner with id admin could not be found."}"#.to_string(),
///     error_reference: Some("abc-123".to_string()),
/// };
///
/// assert!(error.to_string().starts_with("HTTP 404"));
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {message}")]
pub struct HttpResponseError {
    /// Status code.
    pub code: u16,
    /// The raw response body as returned by the server.
    pub message: String,
    /// The `X-Candlepin-Request-Uuid` header, useful when reading server logs.
    pub error_reference: Option<String>,
}

/// A request that was never sent because its body is inconsistent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A body with no declared encoding.
    #[error("Cannot set a body without also setting body_type.")]
    MissingBodyType,

    /// A plain text body must be a string value.
    #[error("Cannot send a non-string body as text/plain.")]
    TextBodyNotString,
}

/// Everything that can go wrong while exchanging one request.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The server answered with a non-2xx status.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// The request was rejected before sending.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Connection, TLS or timeout failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code when the server answered with a non-2xx status.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            _ => None,
        }
    }
}
