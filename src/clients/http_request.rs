//! HTTP request types for the Candlepin API client.
//!
//! A request is a method, a path below the base URL (query included), an
//! optional JSON or plain text body and the expected response type.

use std::collections::HashMap;
use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the Candlepin REST API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    /// Creates resources and binds entitlements.
    Post,
    /// Only used to trigger pool refreshes.
    Put,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "GET"),
            Self::Post => write!(f, "POST"),
            Self::Put => write!(f, "PUT"),
            Self::Delete => write!(f, "DELETE"),
        }
    }
}

/// Content type for request bodies and expected responses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DataType {
    /// `application/json`, used by almost every endpoint.
    Json,
    /// Plain text content type (`text/plain`).
    Text,
}

impl DataType {
    /// The value sent in `Content-Type` and `Accept` headers.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Text => "text/plain",
        }
    }
}

/// An HTTP request to be sent to the Candlepin server.
///
/// The `path` is relative to the client's base URL and already carries
/// its query string.
///
/// # Example
///
/// ```rust
/// use candlepin_api::clients::{DataType, HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let get_request = HttpRequest::builder(HttpMethod::Get, "/owners")
///     .build()
///     .unwrap();
///
/// let post_request = HttpRequest::builder(HttpMethod::Post, "/owners")
///     .body(json!({"key": "acme", "displayName": "acme"}))
///     .body_type(DataType::Json)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone, Debug)]
pub struct HttpRequest {
    pub http_method: HttpMethod,
    /// The path (relative to the base URL), including any query string.
    pub path: String,
    /// The request body, if any. Text bodies are stored as a JSON string value.
    pub body: Option<serde_json::Value>,
    /// How `body` is encoded on the wire.
    pub body_type: Option<DataType>,
    /// The content type the caller expects back (`Accept` header).
    pub accept: DataType,
    /// Headers sent in addition to the client defaults.
    pub extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequest {
    /// Starts a request for `path` below the base URL.
    #[must_use]
    pub fn builder(method: HttpMethod, path: impl Into<String>) -> HttpRequestBuilder {
        HttpRequestBuilder::new(method, path)
    }

    /// Validates the request.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::MissingBodyType`] for a body with no
    /// declared type, and [`InvalidHttpRequestError::TextBodyNotString`] for
    /// a text body holding anything but a string.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (&self.body, self.body_type) {
            (Some(_), None) => Err(InvalidHttpRequestError::MissingBodyType),
            (Some(body), Some(DataType::Text)) if !body.is_string() => {
                Err(InvalidHttpRequestError::TextBodyNotString)
            }
            _ => Ok(()),
        }
    }

    /// Returns the body encoded for the wire.
    ///
    /// JSON bodies are serialized; text bodies are sent verbatim.
    #[must_use]
    pub fn encoded_body(&self) -> Option<String> {
        let body = self.body.as_ref()?;
        match (self.body_type, body) {
            (Some(DataType::Text), serde_json::Value::String(text)) => Some(text.clone()),
            _ => Some(body.to_string()),
        }
    }
}

/// Builder for [`HttpRequest`]; `accept` defaults to JSON.
#[derive(Debug)]
pub struct HttpRequestBuilder {
    http_method: HttpMethod,
    path: String,
    body: Option<serde_json::Value>,
    body_type: Option<DataType>,
    accept: DataType,
    extra_headers: Option<HashMap<String, String>>,
}

impl HttpRequestBuilder {
    fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            http_method: method,
            path: path.into(),
            body: None,
            body_type: None,
            accept: DataType::Json,
            extra_headers: None,
        }
    }

    /// Sets the request body.
    ///
    /// Pair with [`body_type`](Self::body_type).
    #[must_use]
    pub fn body(mut self, body: impl Into<serde_json::Value>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Declares how the body is encoded.
    #[must_use]
    pub const fn body_type(mut self, body_type: DataType) -> Self {
        self.body_type = Some(body_type);
        self
    }

    /// Sets the expected response content type. Defaults to JSON.
    #[must_use]
    pub const fn accept(mut self, accept: DataType) -> Self {
        self.accept = accept;
        self
    }

    /// Adds a header on top of the client defaults.
    #[must_use]
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extra_headers
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Finishes the request after running [`HttpRequest::verify`].
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`HttpRequest::verify`].
    pub fn build(self) -> Result<HttpRequest, InvalidHttpRequestError> {
        let request = HttpRequest {
            http_method: self.http_method,
            path: self.path,
            body: self.body,
            body_type: self.body_type,
            accept: self.accept,
            extra_headers: self.extra_headers,
        };
        request.verify()?;
        Ok(request)
    }
}
