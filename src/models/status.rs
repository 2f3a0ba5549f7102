//! Server status payload.

use serde::{Deserialize, Serialize};

/// The response of `GET /status/`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Status {
    /// Whether the server considers itself healthy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<bool>,

    /// Server version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Server release.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release: Option<String>,
}
