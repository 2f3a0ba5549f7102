//! Configuration types for the Candlepin API client.
//!
//! This module provides the configuration used to connect to a Candlepin
//! server: which credentials to present and where the server lives.
//!
//! # Overview
//!
//! - [`CandlepinConfig`]: The validated connection settings
//! - [`CandlepinConfigBuilder`]: A builder for constructing [`CandlepinConfig`] instances
//! - [`Username`], [`Password`]: Basic authentication credentials
//! - [`Host`]: A validated server host name
//! - [`BaseUrl`]: The URL every request path is appended to
//!
//! # Example
//!
//! ```rust
//! use candlepin_api::CandlepinConfig;
//!
//! let config = CandlepinConfig::builder()
//!     .basic_auth("admin", "admin")
//!     .host("candlepin.example.com")
//!     .port(8443)
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(
//!     config.base_url().as_ref(),
//!     "https://candlepin.example.com:8443/candlepin"
//! );
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, Host, Password, Username};

use crate::auth::{Credentials, IdentityCertificate};
use crate::error::{CandlepinError, ConfigError};

/// Default Candlepin HTTPS port.
pub const DEFAULT_PORT: u16 = 8443;

/// Connection settings for a Candlepin server.
///
/// # Thread Safety
///
/// `CandlepinConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct CandlepinConfig {
    credentials: Credentials,
    host: Host,
    port: u16,
    base_url: BaseUrl,
    user_agent_prefix: Option<String>,
    accept_invalid_certs: bool,
}

impl CandlepinConfig {
    /// Creates a new builder for constructing a `CandlepinConfig`.
    #[must_use]
    pub fn builder() -> CandlepinConfigBuilder {
        CandlepinConfigBuilder::new()
    }

    /// Returns the credentials.
    #[must_use]
    pub const fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Returns the server host.
    #[must_use]
    pub const fn host(&self) -> &Host {
        &self.host
    }

    /// Returns the server port.
    #[must_use]
    pub const fn port(&self) -> u16 {
        self.port
    }

    /// Returns the base URL, either the override or `https://{host}:{port}/candlepin`.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns whether server certificate verification is disabled.
    #[must_use]
    pub const fn accept_invalid_certs(&self) -> bool {
        self.accept_invalid_certs
    }
}

// Verify CandlepinConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CandlepinConfig>();
};

/// Builder for constructing [`CandlepinConfig`] instances.
///
/// Exactly one of [`basic_auth`](Self::basic_auth) and
/// [`identity_certificate`](Self::identity_certificate) must be called.
///
/// # Defaults
///
/// - `host`: `localhost`
/// - `port`: `8443`
/// - `base_url`: `https://{host}:{port}/candlepin`
/// - `accept_invalid_certs`: `false`
#[derive(Debug, Default)]
pub struct CandlepinConfigBuilder {
    username: Option<String>,
    password: Option<String>,
    cert_pem: Option<String>,
    key_pem: Option<String>,
    host: Option<String>,
    port: Option<u16>,
    base_url: Option<String>,
    user_agent_prefix: Option<String>,
    accept_invalid_certs: bool,
}

impl CandlepinConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Authenticates with HTTP Basic credentials.
    #[must_use]
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }

    /// Authenticates as a consumer with a PEM identity certificate and private key.
    #[must_use]
    pub fn identity_certificate(
        mut self,
        cert_pem: impl Into<String>,
        key_pem: impl Into<String>,
    ) -> Self {
        self.cert_pem = Some(cert_pem.into());
        self.key_pem = Some(key_pem.into());
        self
    }

    /// Sets the server host name.
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Sets the server port.
    #[must_use]
    pub const fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Overrides the base URL (useful behind a proxy or against a mock server).
    ///
    /// When set, `host` and `port` are kept for reference only.
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Disables server certificate verification.
    ///
    /// Development Candlepin servers usually run with a self-signed CA.
    #[must_use]
    pub const fn accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    /// Builds the [`CandlepinConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ConflictingCredentials`] if both basic credentials
    /// and a certificate were supplied, [`ConfigError::MissingCredentials`] if
    /// neither was, other [`ConfigError`] variants for invalid values, and
    /// [`ParseError`](crate::ParseError) if the identity certificate cannot be read.
    pub fn build(self) -> Result<CandlepinConfig, CandlepinError> {
        let credentials = match (self.username, self.cert_pem) {
            (Some(_), Some(_)) => return Err(ConfigError::ConflictingCredentials.into()),
            (None, None) => return Err(ConfigError::MissingCredentials.into()),
            (Some(username), None) => Credentials::Basic {
                username: Username::new(username)?,
                password: Password::new(self.password.unwrap_or_default()),
            },
            (None, Some(cert_pem)) => Credentials::Certificate(IdentityCertificate::from_pem(
                cert_pem,
                self.key_pem.unwrap_or_default(),
            )?),
        };

        let host = self.host.map_or_else(|| Ok(Host::default()), Host::new)?;
        let port = self.port.unwrap_or(DEFAULT_PORT);
        let base_url = match self.base_url {
            Some(url) => BaseUrl::new(url)?,
            None => BaseUrl::from_host_port(&host, port),
        };

        Ok(CandlepinConfig {
            credentials,
            host,
            port,
            base_url,
            user_agent_prefix: self.user_agent_prefix,
            accept_invalid_certs: self.accept_invalid_certs,
        })
    }
}
