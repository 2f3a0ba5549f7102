//! Owner and user endpoints.

use crate::api::{path, CandlepinClient};
use crate::error::CandlepinError;
use crate::models::{NewOwner, NewUser, Owner, User};

impl CandlepinClient {
    /// Lists all owners.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_owners(&self) -> Result<Vec<Owner>, CandlepinError> {
        self.get(&path::owners()).await
    }

    /// Fetches one owner.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_owner(&self, owner_id: &str) -> Result<Owner, CandlepinError> {
        self.get(&path::owner(owner_id)).await
    }

    /// Creates an owner whose key and display name are both `name`.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn create_owner(&self, name: &str) -> Result<Owner, CandlepinError> {
        self.post(&path::owners(), &NewOwner::named(name)).await
    }

    /// Deletes an owner.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure.
    pub async fn delete_owner(&self, owner_id: &str) -> Result<(), CandlepinError> {
        self.delete(&path::owner(owner_id)).await
    }

    /// Creates a user under an owner.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn create_user(
        &self,
        owner_id: &str,
        login: &str,
        password: &str,
    ) -> Result<User, CandlepinError> {
        let user = NewUser {
            login: login.to_string(),
            password: password.to_string(),
        };
        self.post(&path::owner_users(owner_id), &user).await
    }
}
