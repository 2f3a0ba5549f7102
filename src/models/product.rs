//! Product payloads.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{CertificateSerial, Content};

/// A free-form product attribute.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductAttribute {
    pub name: String,
    pub value: String,
}

/// Content attached to a product.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// A product, as returned by the server and as sent by `create_product`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub arch: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub product_type: Option<String>,

    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub product_content: Vec<ProductContent>,
}

impl Product {
    /// Returns the value of the named attribute.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|attr| attr.name == name)
            .map(|attr| attr.value.as_str())
    }
}

/// A reference to a product by id.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductRef {
    pub id: String,
}

/// Parameters for creating a product.
///
/// The product id is its label. Child products are linked through the
/// `childId` query parameter rather than the body.
///
/// # Example
///
/// ```rust
/// use candlepin_api::models::NewProduct;
///
/// let product = NewProduct::new("rhel-server", "Red Hat Enterprise Linux Server", "1234")
///     .child_product("rhel-addon")
///     .attribute("sockets", "2");
///
/// let body = product.to_product();
/// assert_eq!(body.id.as_deref(), Some("rhel-server"));
/// assert_eq!(body.attribute("sockets"), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub label: String,
    pub name: String,
    pub hash: String,
    pub version: String,
    pub variant: String,
    pub arch: String,
    pub product_type: String,
    pub child_products: Vec<String>,
    pub attributes: BTreeMap<String, String>,
}

impl NewProduct {
    /// Creates product parameters with version `1`, variant and arch `ALL`
    /// and type `SVC`.
    #[must_use]
    pub fn new(label: impl Into<String>, name: impl Into<String>, hash: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            hash: hash.into(),
            version: "1".to_string(),
            variant: "ALL".to_string(),
            arch: "ALL".to_string(),
            product_type: "SVC".to_string(),
            child_products: Vec::new(),
            attributes: BTreeMap::new(),
        }
    }

    /// Overrides the version attribute.
    #[must_use]
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Overrides the variant attribute.
    #[must_use]
    pub fn variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = variant.into();
        self
    }

    /// Overrides the arch attribute.
    #[must_use]
    pub fn arch(mut self, arch: impl Into<String>) -> Self {
        self.arch = arch.into();
        self
    }

    /// Overrides the type attribute.
    #[must_use]
    pub fn product_type(mut self, product_type: impl Into<String>) -> Self {
        self.product_type = product_type.into();
        self
    }

    /// Links a child product by id.
    #[must_use]
    pub fn child_product(mut self, product_id: impl Into<String>) -> Self {
        self.child_products.push(product_id.into());
        self
    }

    /// Adds a free-form attribute.
    #[must_use]
    pub fn attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }

    /// Builds the request body.
    #[must_use]
    pub fn to_product(&self) -> Product {
        Product {
            id: Some(self.label.clone()),
            name: Some(self.name.clone()),
            label: Some(self.label.clone()),
            hash: Some(self.hash.clone()),
            arch: Some(self.arch.clone()),
            version: Some(self.version.clone()),
            variant: Some(self.variant.clone()),
            product_type: Some(self.product_type.clone()),
            attributes: self
                .attributes
                .iter()
                .map(|(name, value)| ProductAttribute {
                    name: name.clone(),
                    value: value.clone(),
                })
                .collect(),
            product_content: Vec::new(),
        }
    }
}

/// A product certificate.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ProductCertificate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<serde_json::Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cert: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<CertificateSerial>,
}

impl std::fmt::Debug for ProductCertificate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductCertificate")
            .field("id", &self.id)
            .field("key", &self.key.as_ref().map(|_| "*****"))
            .field("cert", &self.cert)
            .field("serial", &self.serial)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_product_defaults_and_wire_format() {
        let body = serde_json::to_value(NewProduct::new("mkt", "Marketing", "99").to_product())
            .unwrap();

        assert_eq!(
            body,
            json!({
                "id": "mkt",
                "name": "Marketing",
                "label": "mkt",
                "hash": "99",
                "arch": "ALL",
                "version": "1",
                "variant": "ALL",
                "type": "SVC",
                "attributes": []
            })
        );
    }

    #[test]
    fn test_attributes_become_name_value_pairs() {
        let product = NewProduct::new("p", "P", "1")
            .attribute("sockets", "4")
            .attribute("arch", "x86_64")
            .to_product();

        assert_eq!(product.attributes.len(), 2);
        assert_eq!(product.attribute("sockets"), Some("4"));
        assert_eq!(product.attribute("arch"), Some("x86_64"));
        assert_eq!(product.attribute("missing"), None);
    }

    #[test]
    fn test_child_products_are_not_in_the_body() {
        let product = NewProduct::new("p", "P", "1").child_product("c1");
        let body = serde_json::to_value(product.to_product()).unwrap();
        assert!(body.get("childProducts").is_none());
        assert_eq!(product.child_products, vec!["c1".to_string()]);
    }

    #[test]
    fn test_product_body_round_trips() {
        let product = NewProduct::new("p", "P", "1")
            .arch("x86_64")
            .variant("Server")
            .version("6.1")
            .product_type("MKT")
            .attribute("virt_limit", "4")
            .to_product();

        let text = serde_json::to_string(&product).unwrap();
        let read_back: Product = serde_json::from_str(&text).unwrap();
        assert_eq!(read_back, product);
    }
}
