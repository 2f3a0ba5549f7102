//! Subscription and subscription token payloads.
//!
//! Callers compose these bodies themselves, so any member the client does
//! not model is carried through `extra` in both directions.

use serde::{Deserialize, Serialize};

use crate::models::{OwnerRef, ProductRef};

/// A subscription held by an owner.
///
/// # Example
///
/// ```rust
/// use candlepin_api::models::{ProductRef, Subscription};
///
/// let subscription = Subscription {
///     product: Some(ProductRef { id: "rhel-server".to_string() }),
///     quantity: Some(10),
///     start_date: Some("2024-01-01".to_string()),
///     end_date: Some("2025-01-01".to_string()),
///     ..Default::default()
/// };
/// let body = serde_json::to_value(&subscription).unwrap();
/// assert_eq!(body["product"]["id"], "rhel-server");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product: Option<ProductRef>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,

    /// Members not modelled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A reference to a subscription by id.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SubscriptionRef {
    pub id: String,
}

/// A token that can be redeemed for a subscription.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SubscriptionToken {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription: Option<SubscriptionRef>,

    /// Members not modelled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
