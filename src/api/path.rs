//! Request path construction for Candlepin endpoints.
//!
//! Every function returns a path relative to the client base URL, query
//! string included. Path segments and query values are percent-encoded;
//! optional filters that are absent are left out of the query entirely.
//!
//! # Example
//!
//! ```rust
//! use candlepin_api::api::{path, PoolFilter};
//!
//! assert_eq!(path::pools(&PoolFilter::default()), "/pools?");
//! assert_eq!(path::pools(&PoolFilter::default().owner("X")), "/pools?owner=X&");
//! assert_eq!(path::list_entitlements("abc", Some("p1")), "/consumers/abc/entitlements?product=p1");
//! ```

use std::borrow::Cow;
use std::fmt::Write;

use crate::api::PoolFilter;

fn enc(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// All owners.
pub fn owners() -> String {
    "/owners".to_string()
}

/// A single owner.
pub fn owner(owner_id: &str) -> String {
    format!("/owners/{}", enc(owner_id))
}

/// Users of an owner.
pub fn owner_users(owner_id: &str) -> String {
    format!("/owners/{}/users", enc(owner_id))
}

/// Subscriptions belonging to an owner.
pub fn owner_subscriptions(owner_key: &str) -> String {
    format!("/owners/{}/subscriptions", enc(owner_key))
}

/// All consumer types.
pub fn consumer_types() -> String {
    "/consumertypes".to_string()
}

/// A single consumer type.
pub fn consumer_type(type_id: &str) -> String {
    format!("/consumertypes/{}", enc(type_id))
}

/// The consumer collection, used for registration.
pub fn consumers() -> String {
    "/consumers".to_string()
}

/// A single consumer.
pub fn consumer(uuid: &str) -> String {
    format!("/consumers/{}", enc(uuid))
}

/// A single pool.
pub fn pool(pool_id: &str) -> String {
    format!("/pools/{}", enc(pool_id))
}

/// The pool collection, without a query string.
pub fn pool_collection() -> String {
    "/pools".to_string()
}

/// `/pools?` followed by one `name=value&` pair per filter that is set.
pub fn pools(filter: &PoolFilter) -> String {
    let mut path = String::from("/pools?");
    let pairs = [
        ("consumer", filter.consumer.as_deref()),
        ("owner", filter.owner.as_deref()),
        ("product", filter.product.as_deref()),
        ("listall", filter.listall.then_some("true")),
    ];
    for (name, value) in pairs {
        if let Some(value) = value {
            let _ = write!(path, "{name}={}&", enc(value));
        }
    }
    path
}

/// Entitlements held by a consumer.
pub fn consumer_entitlements(uuid: &str) -> String {
    format!("/consumers/{}/entitlements", enc(uuid))
}

/// Binds a consumer to a pool.
pub fn consume_pool(uuid: &str, pool_id: &str) -> String {
    format!("{}?pool={}", consumer_entitlements(uuid), enc(pool_id))
}

/// Binds a consumer by product, with an optional quantity.
pub fn consume_product(uuid: &str, product_id: &str, quantity: Option<u32>) -> String {
    let mut path = format!("{}?product={}", consumer_entitlements(uuid), enc(product_id));
    if let Some(quantity) = quantity {
        let _ = write!(path, "&quantity={quantity}");
    }
    path
}

/// Binds a consumer with a subscription token.
pub fn consume_token(uuid: &str, token: &str) -> String {
    format!("{}?token={}", consumer_entitlements(uuid), enc(token))
}

/// Entitlements of a consumer, optionally filtered by product.
pub fn list_entitlements(uuid: &str, product_id: Option<&str>) -> String {
    let path = consumer_entitlements(uuid);
    match product_id {
        Some(product_id) => format!("{path}?product={}", enc(product_id)),
        None => path,
    }
}

/// One entitlement held by a consumer.
pub fn consumer_entitlement(uuid: &str, entitlement_id: &str) -> String {
    format!("{}/{}", consumer_entitlements(uuid), enc(entitlement_id))
}

/// A single entitlement, addressed without a consumer.
pub fn entitlement(entitlement_id: &str) -> String {
    format!("/entitlements/{}", enc(entitlement_id))
}

/// Certificates of a consumer, optionally filtered to a comma separated serial list.
pub fn consumer_certificates(uuid: &str, serials: &[u64]) -> String {
    let path = format!("/consumers/{}/certificates", enc(uuid));
    if serials.is_empty() {
        return path;
    }
    let serials: Vec<String> = serials.iter().map(u64::to_string).collect();
    format!("{path}?serials={}", serials.join(","))
}

/// Certificate serials of a consumer.
pub fn consumer_certificate_serials(uuid: &str) -> String {
    format!("/consumers/{}/certificates/serials", enc(uuid))
}

/// `/products`, with one `childId` parameter per child product.
pub fn products(child_ids: &[String]) -> String {
    let mut path = String::from("/products");
    for (i, child_id) in child_ids.iter().enumerate() {
        let separator = if i == 0 { '?' } else { '&' };
        let _ = write!(path, "{separator}childId={}", enc(child_id));
    }
    path
}

/// A single product.
pub fn product(product_id: &str) -> String {
    format!("/products/{}", enc(product_id))
}

/// The certificate of a product.
pub fn product_certificate(product_id: &str) -> String {
    format!("/products/{}/certificate", enc(product_id))
}

/// Attaches content to a product, enabled or not.
pub fn product_content(product_id: &str, content_label: &str, enabled: bool) -> String {
    format!(
        "/products/{}/content/{}?enabled={enabled}",
        enc(product_id),
        enc(content_label)
    )
}

/// The content collection.
pub fn content() -> String {
    "/content".to_string()
}

/// A single content item.
pub fn content_item(content_id: &str) -> String {
    format!("/content/id/{}", enc(content_id))
}

/// A single subscription.
pub fn subscription(subscription_id: &str) -> String {
    format!("/subscriptions/{}", enc(subscription_id))
}

/// The subscription token collection.
pub fn subscription_tokens() -> String {
    "/subscriptiontokens".to_string()
}

/// A single subscription token.
pub fn subscription_token(token_id: &str) -> String {
    format!("/subscriptiontokens/{}", enc(token_id))
}

/// The satellite certificate upload endpoint.
pub fn certificates() -> String {
    "/certificates".to_string()
}

/// Server status.
pub fn status() -> String {
    "/status/".to_string()
}

/// The rules download endpoint.
pub fn rules() -> String {
    "/rules".to_string()
}

/// The rules upload endpoint.
pub fn rules_upload() -> String {
    "/rules/".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pools_without_filters_is_bare_query() {
        assert_eq!(pools(&PoolFilter::default()), "/pools?");
    }

    #[test]
    fn test_pools_with_owner_filter() {
        assert_eq!(pools(&PoolFilter::default().owner("X")), "/pools?owner=X&");
    }

    #[test]
    fn test_pools_with_all_filters_keeps_order() {
        let filter = PoolFilter::default()
            .listall(true)
            .product("rhel")
            .owner("acme")
            .consumer("c-1");
        assert_eq!(
            pools(&filter),
            "/pools?consumer=c-1&owner=acme&product=rhel&listall=true&"
        );
    }

    #[test]
    fn test_pools_listall_false_is_omitted() {
        assert_eq!(pools(&PoolFilter::default().listall(false)), "/pools?");
    }

    #[test]
    fn test_list_entitlements_product_filter() {
        assert_eq!(list_entitlements("u1", None), "/consumers/u1/entitlements");
        assert_eq!(
            list_entitlements("u1", Some("p1")),
            "/consumers/u1/entitlements?product=p1"
        );
    }

    #[test]
    fn test_consume_paths() {
        assert_eq!(consume_pool("u1", "pool9"), "/consumers/u1/entitlements?pool=pool9");
        assert_eq!(
            consume_product("u1", "rhel", None),
            "/consumers/u1/entitlements?product=rhel"
        );
        assert_eq!(
            consume_product("u1", "rhel", Some(3)),
            "/consumers/u1/entitlements?product=rhel&quantity=3"
        );
        assert_eq!(consume_token("u1", "t0k"), "/consumers/u1/entitlements?token=t0k");
    }

    #[test]
    fn test_certificate_paths() {
        assert_eq!(consumer_certificates("u1", &[]), "/consumers/u1/certificates");
        assert_eq!(
            consumer_certificates("u1", &[12, 34]),
            "/consumers/u1/certificates?serials=12,34"
        );
        assert_eq!(
            consumer_certificate_serials("u1"),
            "/consumers/u1/certificates/serials"
        );
    }

    #[test]
    fn test_products_with_children() {
        assert_eq!(products(&[]), "/products");
        assert_eq!(
            products(&["a".to_string(), "b".to_string()]),
            "/products?childId=a&childId=b"
        );
    }

    #[test]
    fn test_product_content_path() {
        assert_eq!(
            product_content("rhel", "base-os", true),
            "/products/rhel/content/base-os?enabled=true"
        );
        assert_eq!(
            product_content("rhel", "base-os", false),
            "/products/rhel/content/base-os?enabled=false"
        );
    }

    #[test]
    fn test_segments_are_percent_encoded() {
        assert_eq!(owner("Acme Corp"), "/owners/Acme%20Corp");
        assert_eq!(pool("a/b"), "/pools/a%2Fb");
        assert_eq!(pools(&PoolFilter::default().owner("a&b")), "/pools?owner=a%26b&");
    }

    #[test]
    fn test_fixed_paths() {
        assert_eq!(status(), "/status/");
        assert_eq!(pool_collection(), "/pools");
        assert_eq!(rules(), "/rules");
        assert_eq!(rules_upload(), "/rules/");
        assert_eq!(content_item("42"), "/content/id/42");
        assert_eq!(entitlement("e1"), "/entitlements/e1");
        assert_eq!(subscription("s1"), "/subscriptions/s1");
        assert_eq!(subscription_token("t1"), "/subscriptiontokens/t1");
        assert_eq!(owner_subscriptions("acme"), "/owners/acme/subscriptions");
        assert_eq!(consumer_entitlement("u1", "e1"), "/consumers/u1/entitlements/e1");
    }
}
