//! Content payloads.

use serde::{Deserialize, Serialize};

/// A content set as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub vendor: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpg_url: Option<String>,
}

/// Body for creating a content set.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewContent {
    pub name: String,
    pub hash: String,
    pub label: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub vendor: String,
    pub content_url: String,
    pub gpg_url: String,
}
