//! Client credentials.

use crate::auth::IdentityCertificate;
use crate::config::{Password, Username};

/// The authentication mode of a client.
///
/// # Example
///
/// ```rust
/// use candlepin_api::auth::Credentials;
/// use candlepin_api::{Password, Username};
///
/// let credentials = Credentials::Basic {
///     username: Username::new("admin").unwrap(),
///     password: Password::new("admin"),
/// };
/// assert!(credentials.consumer_uuid().is_none());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Credentials {
    /// HTTP Basic authentication.
    Basic {
        /// The login name.
        username: Username,
        /// The password.
        password: Password,
    },
    /// Mutual TLS with a consumer identity certificate.
    Certificate(IdentityCertificate),
}

impl Credentials {
    /// Returns the consumer UUID carried by certificate credentials.
    #[must_use]
    pub fn consumer_uuid(&self) -> Option<&str> {
        match self {
            Self::Basic { .. } => None,
            Self::Certificate(identity) => Some(identity.uuid()),
        }
    }

    /// Returns the identity certificate, if this is certificate authentication.
    #[must_use]
    pub const fn identity(&self) -> Option<&IdentityCertificate> {
        match self {
            Self::Basic { .. } => None,
            Self::Certificate(identity) => Some(identity),
        }
    }

    /// Returns a short label for logging.
    #[must_use]
    pub const fn mode(&self) -> &'static str {
        match self {
            Self::Basic { .. } => "basic",
            Self::Certificate(_) => "certificate",
        }
    }
}
