//! Connection values checked once, when the configuration is built.
//!
//! A [`Host`] is a bare host name (no scheme, port or path); the port lives
//! next to it in [`CandlepinConfig`](crate::CandlepinConfig).

use crate::error::ConfigError;
use std::fmt;

/// A validated Candlepin username for basic authentication.
///
/// # Example
///
/// ```rust
/// use candlepin_api::Username;
///
/// let user = Username::new("admin").unwrap();
/// assert_eq!(user.as_ref(), "admin");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Username(String);

impl Username {
    /// Creates a new validated username.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyUsername`] if the username is empty.
    pub fn new(username: impl Into<String>) -> Result<Self, ConfigError> {
        let username = username.into();
        if username.trim().is_empty() {
            return Err(ConfigError::EmptyUsername);
        }
        Ok(Self(username))
    }
}

impl AsRef<str> for Username {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A basic authentication password.
///
/// The `Debug` implementation masks the value, displaying only
/// `Password(*****)`.
///
/// ```rust
/// use candlepin_api::Password;
///
/// let password = Password::new("admin");
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Wraps a password. Empty passwords are accepted; the server decides.
    #[must_use]
    pub fn new(password: impl Into<String>) -> Self {
        Self(password.into())
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

/// A validated server host name (no scheme, port or path).
///
/// ```rust
/// use candlepin_api::Host;
///
/// assert!(Host::new("candlepin.example.com").is_ok());
/// assert!(Host::new("https://candlepin.example.com").is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Host(String);

impl Host {
    /// Creates a new validated host.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHost`] if the host is empty or contains
    /// URL delimiters or whitespace. Colons are only allowed inside a
    /// bracketed IPv6 literal such as `[::1]`.
    pub fn new(host: impl Into<String>) -> Result<Self, ConfigError> {
        let host = host.into().trim().to_string();
        let valid = match host.strip_prefix('[').and_then(|h| h.strip_suffix(']')) {
            Some(ipv6) => {
                !ipv6.is_empty()
                    && ipv6
                        .chars()
                        .all(|c| c.is_ascii_hexdigit() || matches!(c, ':' | '.'))
            }
            None => {
                !host.is_empty()
                    && !host.chars().any(|c| {
                        matches!(c, '/' | '?' | '#' | '@' | ':' | '[' | ']') || c.is_whitespace()
                    })
            }
        };
        if !valid {
            return Err(ConfigError::InvalidHost { host });
        }
        Ok(Self(host))
    }
}

impl Default for Host {
    fn default() -> Self {
        Self("localhost".to_string())
    }
}

impl AsRef<str> for Host {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated base URL override (e.g., `https://proxy.internal/candlepin`).
///
/// Trailing slashes are removed so operation paths can be appended directly.
///
/// ```rust
/// use candlepin_api::BaseUrl;
///
/// let url = BaseUrl::new("http://127.0.0.1:8080/candlepin/").unwrap();
/// assert_eq!(url.as_ref(), "http://127.0.0.1:8080/candlepin");
/// assert_eq!(url.scheme(), "http");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    scheme_end: usize,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL lacks an `http`/`https`
    /// scheme or a host, or carries a query or fragment.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let raw = url.into();
        let url = raw.trim().trim_end_matches('/').to_string();
        let invalid = || ConfigError::InvalidBaseUrl { url: raw.clone() };

        let scheme_end = url.find("://").ok_or_else(invalid)?;
        let scheme = &url[..scheme_end];
        if !scheme.eq_ignore_ascii_case("http") && !scheme.eq_ignore_ascii_case("https") {
            return Err(invalid());
        }

        let remainder = &url[scheme_end + 3..];
        let host_end = remainder.find([':', '/']).unwrap_or(remainder.len());
        if host_end == 0 || remainder.contains(['?', '#']) {
            return Err(invalid());
        }

        Ok(Self { url, scheme_end })
    }

    /// Builds the standard Candlepin base URL `https://{host}:{port}/candlepin`.
    #[must_use]
    pub fn from_host_port(host: &Host, port: u16) -> Self {
        Self {
            url: format!("https://{}:{port}/candlepin", host.as_ref()),
            scheme_end: "https".len(),
        }
    }

    /// Returns the URL scheme (e.g., "https").
    #[must_use]
    pub fn scheme(&self) -> &str {
        &self.url[..self.scheme_end]
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_username_rejects_empty() {
        assert_eq!(Username::new(""), Err(ConfigError::EmptyUsername));
        assert_eq!(Username::new("   "), Err(ConfigError::EmptyUsername));
    }

    #[test]
    fn test_password_debug_is_masked() {
        let password = Password::new("redhat");
        assert!(!format!("{password:?}").contains("redhat"));
    }

    #[test]
    fn test_host_rejects_urls_and_ports() {
        assert!(Host::new("localhost").is_ok());
        assert!(matches!(
            Host::new("localhost:8443"),
            Err(ConfigError::InvalidHost { .. })
        ));
        assert!(Host::new("https://localhost").is_err());
        assert!(Host::new("").is_err());
        assert!(Host::new("bad host").is_err());
    }

    #[test]
    fn test_host_accepts_bracketed_ipv6() {
        let host = Host::new("[::1]").unwrap();
        assert_eq!(
            BaseUrl::from_host_port(&host, 8443).as_ref(),
            "https://[::1]:8443/candlepin"
        );
        assert!(Host::new("[fe80::1]").is_ok());
        assert!(Host::new("[]").is_err());
        assert!(Host::new("[::1]:8443").is_err());
        assert!(Host::new("::1").is_err());
    }

    #[test]
    fn test_default_host_is_localhost() {
        assert_eq!(Host::default().as_ref(), "localhost");
    }

    #[test]
    fn test_base_url_from_host_port() {
        let url = BaseUrl::from_host_port(&Host::new("cp.example.com").unwrap(), 8443);
        assert_eq!(url.as_ref(), "https://cp.example.com:8443/candlepin");
        assert_eq!(url.scheme(), "https");
    }

    #[test]
    fn test_base_url_validation() {
        assert!(BaseUrl::new("https://localhost:8443/candlepin").is_ok());
        assert!(BaseUrl::new("http://127.0.0.1:1234").is_ok());
        assert!(matches!(
            BaseUrl::new("localhost:8443/candlepin"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(BaseUrl::new("ftp://localhost/candlepin").is_err());
        assert!(BaseUrl::new("https:///candlepin").is_err());
        assert!(BaseUrl::new("https://localhost/candlepin?x=1").is_err());
    }

    #[test]
    fn test_base_url_strips_trailing_slashes() {
        let url = BaseUrl::new("https://localhost:8443/candlepin//").unwrap();
        assert_eq!(url.to_string(), "https://localhost:8443/candlepin");
    }
}
