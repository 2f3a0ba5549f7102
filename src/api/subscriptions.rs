//! Subscription and subscription token endpoints.

use crate::api::{path, CandlepinClient};
use crate::error::CandlepinError;
use crate::models::{Subscription, SubscriptionToken};

impl CandlepinClient {
    /// Lists an owner's subscriptions.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_subscriptions(
        &self,
        owner_key: &str,
    ) -> Result<Vec<Subscription>, CandlepinError> {
        self.get(&path::owner_subscriptions(owner_key)).await
    }

    /// Creates a subscription for an owner.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn create_subscription(
        &self,
        owner_key: &str,
        subscription: &Subscription,
    ) -> Result<Subscription, CandlepinError> {
        self.post(&path::owner_subscriptions(owner_key), subscription)
            .await
    }

    /// Deletes a subscription.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure.
    pub async fn delete_subscription(&self, subscription_id: &str) -> Result<(), CandlepinError> {
        self.delete(&path::subscription(subscription_id)).await
    }

    /// Lists subscription tokens.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_subscription_tokens(
        &self,
    ) -> Result<Vec<SubscriptionToken>, CandlepinError> {
        self.get(&path::subscription_tokens()).await
    }

    /// Creates a subscription token.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn create_subscription_token(
        &self,
        token: &SubscriptionToken,
    ) -> Result<SubscriptionToken, CandlepinError> {
        self.post(&path::subscription_tokens(), token).await
    }

    /// Deletes a subscription token.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure.
    pub async fn delete_subscription_token(&self, token_id: &str) -> Result<(), CandlepinError> {
        self.delete(&path::subscription_token(token_id)).await
    }
}
