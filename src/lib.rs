//! # Candlepin API Client
//!
//! An async Rust client for the Candlepin subscription and entitlement
//! server's REST API.
//!
//! ## Overview
//!
//! This crate provides:
//! - Type-safe configuration via [`CandlepinConfig`] and [`CandlepinConfigBuilder`]
//! - HTTP Basic authentication or mutual TLS with a consumer identity certificate
//! - Consumer UUID extraction from the identity certificate subject
//! - One method per REST endpoint on [`CandlepinClient`] and [`ConsumerClient`]
//! - Typed request and response bodies in [`models`]
//!
//! ## Quick Start
//!
//! ```rust
//! use candlepin_api::CandlepinConfig;
//!
//! let config = CandlepinConfig::builder()
//!     .basic_auth("admin", "admin")
//!     .host("candlepin.example.com")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.port(), 8443);
//! ```
//!
//! ## Administrative Calls
//!
//! ```rust,ignore
//! use candlepin_api::CandlepinClient;
//! use candlepin_api::models::NewProduct;
//!
//! let client = CandlepinClient::with_basic_auth("admin", "admin", "localhost", 8443)?;
//!
//! let owner = client.create_owner("acme").await?;
//! let product = client
//!     .create_product(&NewProduct::new("rhel-server", "RHEL Server", "abc").attribute("sockets", "2"))
//!     .await?;
//! println!("{:?} {:?}", owner.key, product.id);
//! ```
//!
//! ## Consumer Calls
//!
//! A client built from an identity certificate acts as that consumer:
//!
//! ```rust,ignore
//! use candlepin_api::CandlepinClient;
//!
//! let client = CandlepinClient::with_certificate(cert_pem, key_pem, "localhost", 8443)?;
//! println!("consumer {}", client.uuid().unwrap_or_default());
//!
//! let consumer = client.current_consumer()?;
//! consumer.consume_product("rhel-server", None).await?;
//! let certificates = consumer.get_certificates(&[]).await?;
//! ```
//!
//! ## Error Handling
//!
//! Every operation returns [`CandlepinError`], which separates configuration
//! mistakes ([`ConfigError`]), unreadable certificates or bodies
//! ([`ParseError`]) and transport failures ([`HttpError`]). A non-2xx response
//! carries the status code and the server's raw body:
//!
//! ```rust,ignore
//! use candlepin_api::{CandlepinError, HttpError};
//!
//! match client.get_owner("missing").await {
//!     Err(CandlepinError::Transport(HttpError::Response(e))) if e.code == 404 => {}
//!     other => println!("{other:?}"),
//! }
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Credentials and hosts are validated on construction
//! - **One request per call**: No retries, caching or background tasks
//! - **Async-first**: Designed for use with Tokio async runtime

pub mod api;
pub mod auth;
pub mod clients;
pub mod config;
pub mod error;
pub mod models;

// Re-export public types at crate root for convenience
pub use api::{CandlepinClient, ConsumerClient, PoolFilter};
pub use auth::{Credentials, IdentityCertificate};
pub use config::{
    BaseUrl, CandlepinConfig, CandlepinConfigBuilder, Host, Password, Username, DEFAULT_PORT,
};
pub use error::{CandlepinError, ConfigError, ParseError};

// Re-export HTTP client types
pub use clients::{
    DataType, HttpClient, HttpError, HttpMethod, HttpRequest, HttpRequestBuilder, HttpResponse,
    HttpResponseError, InvalidHttpRequestError,
};
