//! HTTP transport for Candlepin communication.
//!
//! This module provides the transport layer the API client is built on.
//! It handles authentication, header handling and response capture; it does
//! not retry, cache or interpret server error payloads.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client, one request per call
//! - [`HttpRequest`]: A request to be sent to the server
//! - [`HttpResponse`]: The status, headers and raw body of a response
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, DELETE)
//! - [`DataType`]: Content types for request bodies (JSON or plain text)
//!
//! # Example
//!
//! ```rust,ignore
//! use candlepin_api::CandlepinConfig;
//! use candlepin_api::clients::{HttpClient, HttpMethod, HttpRequest};
//!
//! let config = CandlepinConfig::builder().basic_auth("admin", "admin").build()?;
//! let client = HttpClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/status/").build()?;
//! let response = client.request(request).await?;
//! println!("{}", response.body);
//! ```

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{DataType, HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, REQUEST_UUID_HEADER};
