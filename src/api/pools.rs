//! Pool endpoints.

use chrono::Local;

use crate::api::{path, CandlepinClient};
use crate::error::CandlepinError;
use crate::models::{Entitlement, NewPool, Pool};

/// Filters for [`CandlepinClient::get_pools`].
///
/// Unset filters are left out of the query string.
///
/// ```rust
/// use candlepin_api::api::PoolFilter;
///
/// let filter = PoolFilter::default().owner("acme").listall(true);
/// assert_eq!(filter.owner.as_deref(), Some("acme"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolFilter {
    /// Only pools available to this consumer UUID.
    pub consumer: Option<String>,
    /// Only pools of this owner.
    pub owner: Option<String>,
    /// Only pools providing this product.
    pub product: Option<String>,
    /// Sends `listall=true` when set.
    pub listall: bool,
}

impl PoolFilter {
    /// Filters by consumer UUID.
    #[must_use]
    pub fn consumer(mut self, consumer_uuid: impl Into<String>) -> Self {
        self.consumer = Some(consumer_uuid.into());
        self
    }

    /// Filters by owner.
    #[must_use]
    pub fn owner(mut self, owner_id: impl Into<String>) -> Self {
        self.owner = Some(owner_id.into());
        self
    }

    /// Filters by product.
    #[must_use]
    pub fn product(mut self, product_id: impl Into<String>) -> Self {
        self.product = Some(product_id.into());
        self
    }

    /// Includes pools the consumer could not currently bind to.
    #[must_use]
    pub const fn listall(mut self, listall: bool) -> Self {
        self.listall = listall;
        self
    }
}

impl CandlepinClient {
    /// Fetches one pool.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_pool(&self, pool_id: &str) -> Result<Pool, CandlepinError> {
        self.get(&path::pool(pool_id)).await
    }

    /// Lists pools matching `filter`.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_pools(&self, filter: &PoolFilter) -> Result<Vec<Pool>, CandlepinError> {
        self.get(&path::pools(filter)).await
    }

    /// Creates a pool, resolving omitted dates against today's local date.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn create_pool(&self, pool: NewPool) -> Result<Pool, CandlepinError> {
        let request = pool.into_request(Local::now().date_naive());
        self.post(&path::pool_collection(), &request).await
    }

    /// Asks the server to regenerate an owner's pools from its subscriptions.
    ///
    /// Returns `None` when the server answers with an empty body.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn refresh_pools(
        &self,
        owner_key: &str,
    ) -> Result<Option<serde_json::Value>, CandlepinError> {
        self.put_empty(&path::owner_subscriptions(owner_key)).await
    }

    /// Fetches one entitlement by id.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_entitlement(&self, entitlement_id: &str) -> Result<Entitlement, CandlepinError> {
        self.get(&path::entitlement(entitlement_id)).await
    }
}
