//! Product and content endpoints.

use crate::api::{path, CandlepinClient};
use crate::error::CandlepinError;
use crate::models::{Content, NewContent, NewProduct, Product, ProductCertificate};

impl CandlepinClient {
    /// Lists all products.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn list_products(&self) -> Result<Vec<Product>, CandlepinError> {
        self.get(&path::products(&[])).await
    }

    /// Fetches one product.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_product(&self, product_id: &str) -> Result<Product, CandlepinError> {
        self.get(&path::product(product_id)).await
    }

    /// Creates a product. The product id is its label; child products are
    /// passed as `childId` query parameters.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product, CandlepinError> {
        self.post(&path::products(&product.child_products), &product.to_product())
            .await
    }

    /// Fetches the certificate generated for a product.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_product_cert(
        &self,
        product_id: &str,
    ) -> Result<ProductCertificate, CandlepinError> {
        self.get(&path::product_certificate(product_id)).await
    }

    /// Attaches existing content to a product.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn add_content_to_product(
        &self,
        product_id: &str,
        content_label: &str,
        enabled: bool,
    ) -> Result<Product, CandlepinError> {
        self.post_empty(&path::product_content(product_id, content_label, enabled))
            .await
    }

    /// Lists all content sets.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn list_content(&self) -> Result<Vec<Content>, CandlepinError> {
        self.get(&path::content()).await
    }

    /// Fetches one content set.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn get_content(&self, content_id: &str) -> Result<Content, CandlepinError> {
        self.get(&path::content_item(content_id)).await
    }

    /// Creates a content set.
    ///
    /// # Errors
    ///
    /// Returns [`CandlepinError`] on transport failure or an unreadable body.
    pub async fn create_content(&self, content: &NewContent) -> Result<Content, CandlepinError> {
        self.post(&path::content(), content).await
    }
}
