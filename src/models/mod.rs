//! Typed request and response bodies for the Candlepin REST API.
//!
//! Response types use `Option` fields throughout: Candlepin omits null
//! members and different server versions return different subsets. Fields
//! the client does not model are ignored on deserialization, except for
//! [`Subscription`] and [`SubscriptionToken`], which keep them in `extra`
//! because callers build those payloads themselves.
//!
//! Request types (`New*`) hold exactly what the client sends.

mod consumer;
mod content;
mod entitlement;
mod owner;
mod pool;
mod product;
mod status;
mod subscription;

pub use consumer::{Consumer, ConsumerType, ConsumerTypeRef, NewConsumer, NewConsumerType};
pub use content::{Content, NewContent};
pub use entitlement::{CertificateSerial, Entitlement, EntitlementCertificate};
pub use owner::{NewOwner, NewUser, Owner, OwnerRef, User};
pub use pool::{NewPool, Pool, PoolRequest, DEFAULT_POOL_DAYS, DEFAULT_POOL_QUANTITY};
pub use product::{
    NewProduct, Product, ProductAttribute, ProductCertificate, ProductContent, ProductRef,
};
pub use status::Status;
pub use subscription::{Subscription, SubscriptionRef, SubscriptionToken};
