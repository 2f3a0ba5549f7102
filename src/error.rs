//! Error types for the Candlepin API client.
//!
//! This module contains the configuration and parse errors raised while
//! building a client or decoding responses, and the unified
//! [`CandlepinError`] returned by every API operation.
//!
//! # Error Handling
//!
//! Errors fall into three groups:
//!
//! - [`ConfigError`]: invalid client configuration (bad credential combination,
//!   malformed host or base URL, no consumer identity for a scoped call)
//! - [`ParseError`]: an identity certificate or a response body could not be decoded
//! - [`HttpError`]: transport failures and non-2xx responses
//!
//! # Example
//!
//! ```rust
//! use candlepin_api::{CandlepinConfig, CandlepinError, ConfigError};
//!
//! let result = CandlepinConfig::builder().build();
//! assert!(matches!(
//!     result,
//!     Err(CandlepinError::Config(ConfigError::MissingCredentials))
//! ));
//! ```

use thiserror::Error;

use crate::clients::HttpError;

/// Errors that can occur while configuring a client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Both basic credentials and an identity certificate were supplied.
    #[error("Cannot connect with both username and identity certificate. Choose one authentication mode.")]
    ConflictingCredentials,

    /// Neither basic credentials nor an identity certificate were supplied.
    #[error("Need username/password or certificate/key to connect to Candlepin.")]
    MissingCredentials,

    /// The username for basic authentication is empty.
    #[error("Username cannot be empty. Please provide a valid Candlepin username.")]
    EmptyUsername,

    /// The host name is invalid.
    #[error("Invalid host '{host}'. Expected a bare host name such as 'localhost' or 'candlepin.example.com'.")]
    InvalidHost {
        /// The invalid host that was provided.
        host: String,
    },

    /// The base URL override is invalid.
    #[error("Invalid base URL '{url}'. Please provide a URL with scheme (e.g., 'https://localhost:8443/candlepin').")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// A consumer-scoped operation was requested but the client has no consumer.
    #[error("No consumer identity available. Connect with an identity certificate or register a consumer first.")]
    NoConsumer,

    /// The underlying HTTP client could not be created.
    #[error("Failed to create HTTP client: {reason}")]
    HttpClientBuild {
        /// The reason reported by the HTTP library.
        reason: String,
    },
}

/// Errors that occur while decoding certificates or response bodies.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The identity certificate or key is not valid PEM/X.509.
    #[error("Invalid identity certificate: {reason}")]
    InvalidCertificate {
        /// Why the certificate was rejected.
        reason: String,
    },

    /// The identity certificate subject carries no `UID` attribute.
    #[error("Identity certificate subject '{subject}' has no UID attribute.")]
    MissingUid {
        /// The certificate subject that was inspected.
        subject: String,
    },

    /// A response body was not the JSON the operation expected.
    #[error("Malformed JSON response from {path}: {message}")]
    InvalidJson {
        /// The request path whose response failed to parse.
        path: String,
        /// The decoder error message.
        message: String,
    },
}

/// Unified error type for all Candlepin client operations.
///
/// # Example
///
/// ```rust,ignore
/// match client.get_owner("admin").await {
///     Ok(owner) => println!("{:?}", owner.display_name),
///     Err(CandlepinError::Transport(HttpError::Response(e))) => {
///         println!("Candlepin answered {}: {}", e.code, e.message);
///     }
///     Err(e) => println!("Request failed: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum CandlepinError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A certificate or response body could not be decoded.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Transport failure or non-2xx response.
    #[error(transparent)]
    Transport(#[from] HttpError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflicting_credentials_error_message() {
        let message = ConfigError::ConflictingCredentials.to_string();
        assert!(message.contains("both username and identity certificate"));
    }

    #[test]
    fn test_missing_uid_error_includes_subject() {
        let error = ParseError::MissingUid {
            subject: "CN=no-uid-system".to_string(),
        };
        assert!(error.to_string().contains("CN=no-uid-system"));
    }

    #[test]
    fn test_invalid_json_error_includes_path() {
        let error = ParseError::InvalidJson {
            path: "/owners".to_string(),
            message: "expected value at line 1 column 1".to_string(),
        };
        let message = error.to_string();
        assert!(message.contains("/owners"));
        assert!(message.contains("expected value"));
    }

    #[test]
    fn test_candlepin_error_is_transparent() {
        let error: CandlepinError = ConfigError::NoConsumer.into();
        assert_eq!(error.to_string(), ConfigError::NoConsumer.to_string());
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = CandlepinError::from(ConfigError::MissingCredentials);
        let _: &dyn std::error::Error = &error;
    }
}
