//! HTTP client for Candlepin communication.
//!
//! This module provides the [`HttpClient`] type, the single transport every
//! API operation goes through.

use std::collections::HashMap;

use crate::auth::Credentials;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::{CandlepinConfig, Password, Username};
use crate::error::{CandlepinError, ConfigError, ParseError};

/// Client version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for making requests to a Candlepin server.
///
/// The client handles:
/// - Base URL construction
/// - Basic authentication headers or a mutual TLS identity
/// - Default headers including `User-Agent`
/// - Mapping non-2xx responses to [`HttpError::Response`]
///
/// It sends each request exactly once.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`.
#[derive(Debug)]
pub struct HttpClient {
    /// reqwest client carrying the TLS setup.
    client: reqwest::Client,
    /// Base URL (e.g., `https://localhost:8443/candlepin`).
    base_url: String,
    /// Basic authentication credentials, when not using a client certificate.
    basic_auth: Option<(Username, Password)>,
    /// Sent with every request (currently just `User-Agent`).
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidCertificate`] if the identity certificate
    /// cannot be loaded as a TLS identity, and [`ConfigError::HttpClientBuild`]
    /// if the TLS backend fails to initialize.
    pub fn new(config: &CandlepinConfig) -> Result<Self, CandlepinError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Candlepin API Client v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);

        let mut builder = reqwest::Client::builder().use_rustls_tls();

        if config.accept_invalid_certs() {
            tracing::warn!(
                "Server certificate verification is disabled for {}",
                config.base_url()
            );
            builder = builder.danger_accept_invalid_certs(true);
        }

        let basic_auth = match config.credentials() {
            Credentials::Basic { username, password } => {
                Some((username.clone(), password.clone()))
            }
            Credentials::Certificate(identity) => {
                let tls_identity = reqwest::Identity::from_pem(&identity.identity_pem())
                    .map_err(|e| ParseError::InvalidCertificate {
                        reason: e.to_string(),
                    })?;
                builder = builder.identity(tls_identity);
                None
            }
        };

        let client = builder.build().map_err(|e| ConfigError::HttpClientBuild {
            reason: e.to_string(),
        })?;

        tracing::debug!(
            "Candlepin client for {} using {} authentication",
            config.base_url(),
            config.credentials().mode()
        );

        Ok(Self {
            client,
            base_url: config.base_url().to_string(),
            basic_auth,
            default_headers,
        })
    }

    /// Returns the base URL for this client.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Headers added to every request.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Returns `true` when requests carry HTTP Basic credentials.
    #[must_use]
    pub const fn uses_basic_auth(&self) -> bool {
        self.basic_auth.is_some()
    }

    /// Returns the full URL for a request path.
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Sends an HTTP request to the Candlepin server.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::InvalidRequest`] before sending an inconsistent
    /// request, [`HttpError::Network`] when the exchange fails, and
    /// [`HttpError::Response`] for any status outside 2xx.
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.url_for(&request.path);

        let mut headers = self.default_headers.clone();
        headers.insert(
            "Accept".to_string(),
            request.accept.as_content_type().to_string(),
        );
        if let Some(body_type) = &request.body_type {
            headers.insert(
                "Content-Type".to_string(),
                body_type.as_content_type().to_string(),
            );
        }
        if let Some(extra) = &request.extra_headers {
            for (key, value) in extra {
                headers.insert(key.clone(), value.clone());
            }
        }

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
            HttpMethod::Put => self.client.put(&url),
            HttpMethod::Delete => self.client.delete(&url),
        };

        for (key, value) in &headers {
            req_builder = req_builder.header(key, value);
        }

        if let Some((username, password)) = &self.basic_auth {
            req_builder = req_builder.basic_auth(username.as_ref(), Some(password.as_ref()));
        }

        if let Some(body) = request.encoded_body() {
            req_builder = req_builder.body(body);
        }

        tracing::debug!("{} {}", request.http_method, request.path);

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body = res.text().await?;

        let response = HttpResponse::new(code, res_headers, body);
        tracing::debug!("{} {} -> {}", request.http_method, request.path, code);

        if response.is_ok() {
            return Ok(response);
        }

        tracing::warn!(
            "Candlepin returned {} for {} {}",
            code,
            request.http_method,
            request.path
        );

        let error_reference = response.request_id().map(String::from);
        Err(HttpError::Response(HttpResponseError {
            code,
            message: response.body,
            error_reference,
        }))
    }

    /// Header names are lowercased; repeated headers keep every value.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
