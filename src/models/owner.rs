//! Owner and user payloads.

use serde::{Deserialize, Serialize};

/// An owner (organization) as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Owner {
    /// Server-assigned identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// The unique owner key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Human readable name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// Body for creating an owner.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewOwner {
    /// The unique owner key.
    pub key: String,
    /// Human readable name.
    pub display_name: String,
}

impl NewOwner {
    /// An owner whose key and display name are both `name`.
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            key: name.clone(),
            display_name: name,
        }
    }
}

/// A reference to an owner by id, as embedded in pools and subscriptions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct OwnerRef {
    /// The owner id.
    pub id: String,
}

/// A user account.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub super_admin: Option<bool>,
}

/// Body for creating a user under an owner.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewUser {
    /// Login name.
    pub login: String,
    /// Initial password.
    pub password: String,
}

impl std::fmt::Debug for NewUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewUser")
            .field("login", &self.login)
            .field("password", &"*****")
            .finish()
    }
}
