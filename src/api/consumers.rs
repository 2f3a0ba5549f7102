//! Consumer and consumer type endpoints.

use crate::api::{path, CandlepinClient};
use crate::error::CandlepinError;
use crate::models::{Consumer, ConsumerType, NewConsumer, NewConsumerType};

/// Consumer type used by [`CandlepinClient::register`] when none is given.
pub const DEFAULT_CONSUMER_TYPE: &str = "system";

impl CandlepinClient {
    /// Lists consumer types.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_consumer_types(&self) -> Result<Vec<ConsumerType>, CandlepinError> {
        self.get(&path::consumer_types()).await
    }

    /// Fetches one consumer type.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_consumer_type(&self, type_id: &str) -> Result<ConsumerType, CandlepinError> {
        self.get(&path::consumer_type(type_id)).await
    }

    /// Creates a consumer type.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn create_consumer_type(&self, label: &str) -> Result<ConsumerType, CandlepinError> {
        let consumer_type = NewConsumerType {
            label: label.to_string(),
        };
        self.post(&path::consumer_types(), &consumer_type).await
    }

    /// Deletes a consumer type.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure.
    pub async fn delete_consumer_type(&self, type_id: &str) -> Result<(), CandlepinError> {
        self.delete(&path::consumer_type(type_id)).await
    }

    /// Registers a consumer and caches the result on this client.
    ///
    /// `type_label` defaults to [`DEFAULT_CONSUMER_TYPE`]; `uuid` asks the
    /// server for a specific UUID.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    /// The cached consumer is left untouched on error.
    pub async fn register(
        &mut self,
        name: &str,
        type_label: Option<&str>,
        uuid: Option<&str>,
    ) -> Result<Consumer, CandlepinError> {
        let mut consumer = NewConsumer::new(name, type_label.unwrap_or(DEFAULT_CONSUMER_TYPE));
        if let Some(uuid) = uuid {
            consumer = consumer.with_uuid(uuid);
        }

        let registered: Consumer = self.post(&path::consumers(), &consumer).await?;
        tracing::debug!(
            "Registered consumer {} as {}",
            name,
            registered.uuid.as_deref().unwrap_or("<no uuid>")
        );
        self.cache_consumer(registered.clone());
        Ok(registered)
    }

    /// Fetches a consumer by id or UUID.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_consumer(&self, consumer_id: &str) -> Result<Consumer, CandlepinError> {
        self.get(&path::consumer(consumer_id)).await
    }

    /// Deletes a consumer.
    ///
    /// Without an explicit UUID this unregisters the session's own consumer
    /// (see [`current_consumer`](Self::current_consumer)).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoConsumer`](crate::ConfigError::NoConsumer)
    /// when no UUID is given and the session has none, and
    /// [`CandlepinError`] on transport failure.
    pub async fn unregister(&self, uuid: Option<&str>) -> Result<(), CandlepinError> {
        match uuid {
            Some(uuid) => self.delete(&path::consumer(uuid)).await,
            None => self.current_consumer()?.unregister().await,
        }
    }
}
