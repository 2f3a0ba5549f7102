//! Operations performed on behalf of a single consumer.

use crate::api::{path, CandlepinClient};
use crate::error::CandlepinError;
use crate::models::{CertificateSerial, Entitlement, EntitlementCertificate};

/// A [`CandlepinClient`] bound to one consumer UUID.
///
/// Obtained from [`CandlepinClient::consumer_scope`] or
/// [`CandlepinClient::current_consumer`]. Borrowing the client keeps the
/// UUID fixed for the lifetime of the scope.
///
/// # Example
///
/// ```rust,ignore
/// let consumer = client.current_consumer()?;
/// let entitlements = consumer.consume_product("rhel-server", Some(2)).await?;
/// for serial in consumer.get_certificate_serials().await? {
///     println!("{:?}", serial.serial);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ConsumerClient<'a> {
    client: &'a CandlepinClient,
    uuid: String,
}

impl<'a> ConsumerClient<'a> {
    pub(crate) const fn new(client: &'a CandlepinClient, uuid: String) -> Self {
        Self { client, uuid }
    }

    /// Returns the consumer UUID requests are scoped to.
    #[must_use]
    pub fn uuid(&self) -> &str {
        &self.uuid
    }

    /// Binds the consumer to a pool.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn consume_pool(&self, pool_id: &str) -> Result<Vec<Entitlement>, CandlepinError> {
        self.client
            .post_empty(&path::consume_pool(&self.uuid, pool_id))
            .await
    }

    /// Binds the consumer to a product, optionally for a given quantity.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn consume_product(
        &self,
        product_id: &str,
        quantity: Option<u32>,
    ) -> Result<Vec<Entitlement>, CandlepinError> {
        self.client
            .post_empty(&path::consume_product(&self.uuid, product_id, quantity))
            .await
    }

    /// Binds the consumer using a subscription token.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn consume_token(&self, token: &str) -> Result<Vec<Entitlement>, CandlepinError> {
        self.client
            .post_empty(&path::consume_token(&self.uuid, token))
            .await
    }

    /// Lists the consumer's entitlements, optionally for one product.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn list_entitlements(
        &self,
        product_id: Option<&str>,
    ) -> Result<Vec<Entitlement>, CandlepinError> {
        self.client
            .get(&path::list_entitlements(&self.uuid, product_id))
            .await
    }

    /// Returns one entitlement.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure.
    pub async fn unbind_entitlement(&self, entitlement_id: &str) -> Result<(), CandlepinError> {
        self.client
            .delete(&path::consumer_entitlement(&self.uuid, entitlement_id))
            .await
    }

    /// Returns every entitlement the consumer holds.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure.
    pub async fn revoke_all_entitlements(&self) -> Result<(), CandlepinError> {
        self.client
            .delete(&path::consumer_entitlements(&self.uuid))
            .await
    }

    /// Fetches entitlement certificates, all of them when `serials` is empty.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_certificates(
        &self,
        serials: &[u64],
    ) -> Result<Vec<EntitlementCertificate>, CandlepinError> {
        self.client
            .get(&path::consumer_certificates(&self.uuid, serials))
            .await
    }

    /// Lists the serials of the consumer's entitlement certificates.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_certificate_serials(&self) -> Result<Vec<CertificateSerial>, CandlepinError> {
        self.client
            .get(&path::consumer_certificate_serials(&self.uuid))
            .await
    }

    /// Deletes the consumer.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure.
    pub async fn unregister(&self) -> Result<(), CandlepinError> {
        tracing::debug!("Unregistering consumer {}", self.uuid);
        self.client.delete(&path::consumer(&self.uuid)).await
    }
}
