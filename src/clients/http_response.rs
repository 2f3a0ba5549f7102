//! HTTP response types for the Candlepin API client.
//!
//! This module provides the [`HttpResponse`] type, which keeps the raw body
//! so each operation can decide whether to read it as JSON or as text.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::error::ParseError;

/// Header Candlepin uses to tag each request in its logs (lowercased).
pub const REQUEST_UUID_HEADER: &str = "x-candlepin-request-uuid";

/// An HTTP response from the Candlepin server.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name (headers may have multiple values).
    pub headers: HashMap<String, Vec<String>>,
    /// The raw response body.
    pub body: String,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: String) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the body is empty or only whitespace.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.trim().is_empty()
    }

    /// Returns the `X-Candlepin-Request-Uuid` header value, if present.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.headers
            .get(REQUEST_UUID_HEADER)
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Decodes the body as JSON.
    ///
    /// `path` is only used to give the error some context.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidJson`] if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ParseError> {
        serde_json::from_str(&self.body).map_err(|e| ParseError::InvalidJson {
            path: path.to_string(),
            message: e.to_string(),
        })
    }

    /// Decodes the body as JSON, treating an empty body as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidJson`] if a non-empty body is not valid JSON for `T`.
    pub fn json_opt<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ParseError> {
        if self.is_empty() {
            return Ok(None);
        }
        self.json(path).map(Some)
    }
}
