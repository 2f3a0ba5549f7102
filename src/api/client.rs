//! The Candlepin API client.
//!
//! This module provides [`CandlepinClient`], which owns the transport and the
//! session state, and the request helpers every endpoint method uses.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::ConsumerClient;
use crate::auth::Credentials;
use crate::clients::{DataType, HttpClient, HttpMethod, HttpRequest, HttpResponse};
use crate::config::CandlepinConfig;
use crate::error::{CandlepinError, ConfigError, ParseError};
use crate::models::Consumer;

/// Client for the Candlepin REST API.
///
/// Each endpoint method issues exactly one HTTP request and decodes the
/// response into the matching [`models`](crate::models) type. Methods that
/// act on behalf of a consumer live on [`ConsumerClient`], obtained via
/// [`consumer_scope`](Self::consumer_scope) or
/// [`current_consumer`](Self::current_consumer).
///
/// # Thread Safety
///
/// `CandlepinClient` is `Send + Sync`. Only [`register`](Self::register)
/// needs `&mut self`, since it caches the registered consumer.
///
/// # Example
///
/// ```rust,ignore
/// use candlepin_api::CandlepinClient;
///
/// let client = CandlepinClient::with_basic_auth("admin", "admin", "localhost", 8443)?;
/// for owner in client.get_owners().await? {
///     println!("{:?}", owner.key);
/// }
/// ```
#[derive(Debug)]
pub struct CandlepinClient {
    http_client: HttpClient,
    credentials: Credentials,
    consumer: Option<Consumer>,
}

// Verify CandlepinClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CandlepinClient>();
};

impl CandlepinClient {
    /// Creates a client from a validated configuration.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] if the TLS identity cannot be loaded or the
    /// HTTP client cannot be created.
    pub fn new(config: &CandlepinConfig) -> Result<Self, CandlepinError> {
        let http_client = HttpClient::new(config)?;
        Ok(Self {
            http_client,
            credentials: config.credentials().clone(),
            consumer: None,
        })
    }

    /// Connects with HTTP Basic credentials to `https://{host}:{port}/candlepin`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] variants for an empty username or invalid host.
    pub fn with_basic_auth(
        username: impl Into<String>,
        password: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Result<Self, CandlepinError> {
        let config = CandlepinConfig::builder()
            .basic_auth(username, password)
            .host(host)
            .port(port)
            .build()?;
        Self::new(&config)
    }

    /// Connects as a consumer with a PEM identity certificate and key.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MissingUid`] if the certificate subject has no
    /// `UID`, and [`ParseError::InvalidCertificate`] for unreadable PEM.
    pub fn with_certificate(
        cert_pem: impl Into<String>,
        key_pem: impl Into<String>,
        host: impl Into<String>,
        port: u16,
    ) -> Result<Self, CandlepinError> {
        let config = CandlepinConfig::builder()
            .identity_certificate(cert_pem, key_pem)
            .host(host)
            .port(port)
            .build()?;
        Self::new(&config)
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.http_client.base_url()
    }

    /// Returns the credentials this client authenticates with.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the consumer UUID from the identity certificate, if any.
    #[must_use]
    pub fn uuid(&self) -> Option<&str> {
        self.credentials.consumer_uuid()
    }

    /// Returns the PEM identity certificate supplied at construction.
    ///
    /// This is not fetched from the server.
    #[must_use]
    pub fn identity_certificate(&self) -> Option<&str> {
        self.credentials
            .identity()
            .map(crate::auth::IdentityCertificate::certificate_pem)
    }

    /// Returns the consumer cached by the last [`register`](Self::register).
    #[must_use]
    pub const fn consumer(&self) -> Option<&Consumer> {
        self.consumer.as_ref()
    }

    pub(crate) fn cache_consumer(&mut self, consumer: Consumer) {
        self.consumer = Some(consumer);
    }

    /// Scopes consumer operations to an explicit consumer UUID.
    #[must_use]
    pub fn consumer_scope(&self, uuid: impl Into<String>) -> ConsumerClient<'_> {
        ConsumerClient::new(self, uuid.into())
    }

    /// Scopes consumer operations to this session's consumer.
    ///
    /// Uses the certificate UUID, falling back to the UUID of the consumer
    /// cached by [`register`](Self::register).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConsumer`] when neither is available.
    pub fn current_consumer(&self) -> Result<ConsumerClient<'_>, CandlepinError> {
        let uuid = self
            .uuid()
            .or_else(|| self.consumer.as_ref().and_then(|c| c.uuid.as_deref()))
            .ok_or(ConfigError::NoConsumer)?;
        Ok(self.consumer_scope(uuid))
    }

    /// Sends one request and returns the raw response.
    async fn send(
        &self,
        method: HttpMethod,
        path: &str,
        body: Option<(serde_json::Value, DataType)>,
        accept: DataType,
    ) -> Result<HttpResponse, CandlepinError> {
        let mut builder = HttpRequest::builder(method, path).accept(accept);
        if let Some((body, body_type)) = body {
            builder = builder.body(body).body_type(body_type);
        }
        let request = builder.build().map_err(crate::clients::HttpError::from)?;
        Ok(self.http_client.request(request).await?)
    }

    fn to_json_body<B: Serialize + ?Sized>(
        path: &str,
        body: &B,
    ) -> Result<(serde_json::Value, DataType), CandlepinError> {
        let value = serde_json::to_value(body).map_err(|e| ParseError::InvalidJson {
            path: path.to_string(),
            message: e.to_string(),
        })?;
        Ok((value, DataType::Json))
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, CandlepinError> {
        let response = self.send(HttpMethod::Get, path, None, DataType::Json).await?;
        Ok(response.json(path)?)
    }

    pub(crate) async fn get_text(&self, path: &str) -> Result<String, CandlepinError> {
        let response = self.send(HttpMethod::Get, path, None, DataType::Text).await?;
        Ok(response.body)
    }

    pub(crate) async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, CandlepinError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = Self::to_json_body(path, body)?;
        let response = self
            .send(HttpMethod::Post, path, Some(body), DataType::Json)
            .await?;
        Ok(response.json(path)?)
    }

    /// POST without a request body.
    pub(crate) async fn post_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<T, CandlepinError> {
        let response = self.send(HttpMethod::Post, path, None, DataType::Json).await?;
        Ok(response.json(path)?)
    }

    pub(crate) async fn post_text(&self, path: &str, body: &str) -> Result<String, CandlepinError> {
        let body = Some((serde_json::Value::from(body), DataType::Text));
        let response = self.send(HttpMethod::Post, path, body, DataType::Text).await?;
        Ok(response.body)
    }

    /// PUT without a request body; an empty response body is success with no data.
    pub(crate) async fn put_empty<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, CandlepinError> {
        let response = self.send(HttpMethod::Put, path, None, DataType::Json).await?;
        Ok(response.json_opt(path)?)
    }

    /// DELETE; the response body is not inspected.
    pub(crate) async fn delete(&self, path: &str) -> Result<(), CandlepinError> {
        self.send(HttpMethod::Delete, path, None, DataType::Json)
            .await
            .map(|_| ())
    }
}
