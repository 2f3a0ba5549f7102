//! Authentication types for the Candlepin API client.
//!
//! Candlepin accepts two authentication modes:
//!
//! - HTTP Basic authentication with a username and password, used by
//!   administrators and tooling
//! - Mutual TLS with a consumer identity certificate and private key, used
//!   by registered systems
//!
//! Exactly one mode is active per client. [`Credentials`] models that choice
//! as a tagged union; [`IdentityCertificate`] holds the PEM material and the
//! consumer UUID read from the certificate subject.

mod credentials;
mod identity;

pub use credentials::Credentials;
pub use identity::IdentityCertificate;
