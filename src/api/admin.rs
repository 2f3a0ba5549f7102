//! Server status, rules and satellite certificate endpoints.

use base64::prelude::*;

use crate::api::{path, CandlepinClient};
use crate::error::CandlepinError;
use crate::models::Status;

impl CandlepinClient {
    /// Uploads a satellite certificate.
    ///
    /// The raw bytes are sent as a single base64 JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn upload_satellite_certificate(
        &self,
        certificate: &[u8],
    ) -> Result<serde_json::Value, CandlepinError> {
        let encoded = BASE64_STANDARD.encode(certificate);
        self.post(&path::certificates(), &encoded).await
    }

    /// Fetches the server status.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_status(&self) -> Result<Status, CandlepinError> {
        self.get(&path::status()).await
    }

    /// Downloads the entitlement rules as text.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure.
    pub async fn list_rules(&self) -> Result<String, CandlepinError> {
        self.get_text(&path::rules()).await
    }

    /// Replaces the entitlement rules and returns the server's reply text.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure.
    pub async fn upload_rules(&self, rules: &str) -> Result<String, CandlepinError> {
        self.post_text(&path::rules_upload(), rules).await
    }
}
