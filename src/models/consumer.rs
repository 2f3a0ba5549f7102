//! Consumer and consumer type payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{EntitlementCertificate, Owner};

/// A consumer type (e.g., `system`, `person`, `candlepin`).
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConsumerType {
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,

    /// The type label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// Body for creating a consumer type.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewConsumerType {
    /// The type label.
    pub label: String,
}

/// A reference to a consumer type by label.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConsumerTypeRef {
    /// The type label.
    pub label: String,
}

/// A registered consumer.
///
/// Returned by `register` and cached on the client; its `uuid` is what
/// consumer-scoped operations address.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Consumer {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The consumer UUID.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub consumer_type: Option<ConsumerType>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<Owner>,

    /// The identity certificate issued at registration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_cert: Option<EntitlementCertificate>,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub facts: BTreeMap<String, String>,
}

/// Body for registering a consumer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewConsumer {
    /// The consumer type.
    #[serde(rename = "type")]
    pub consumer_type: ConsumerTypeRef,

    /// Display name of the consumer.
    pub name: String,

    /// Requested UUID; the server generates one when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

impl NewConsumer {
    /// Creates a registration body for `name` with the given type label.
    #[must_use]
    pub fn new(name: impl Into<String>, type_label: impl Into<String>) -> Self {
        Self {
            consumer_type: ConsumerTypeRef {
                label: type_label.into(),
            },
            name: name.into(),
            uuid: None,
        }
    }

    /// Requests a specific UUID.
    #[must_use]
    pub fn with_uuid(mut self, uuid: impl Into<String>) -> Self {
        self.uuid = Some(uuid.into());
        self
    }
}
