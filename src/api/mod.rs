//! Candlepin REST operations.
//!
//! [`CandlepinClient`] carries the administrative operations (owners,
//! consumers, pools, products, subscriptions and server status).
//! Operations a consumer performs on its own behalf live on
//! [`ConsumerClient`]. Request paths are built by the functions in [`path`].
//!
//! # Example
//!
//! ```rust,ignore
//! use candlepin_api::api::PoolFilter;
//! use candlepin_api::CandlepinClient;
//!
//! let mut client = CandlepinClient::with_basic_auth("admin", "admin", "localhost", 8443)?;
//! let consumer = client.register("web-01", None, None).await?;
//!
//! let pools = client
//!     .get_pools(&PoolFilter::default().owner("admin").listall(true))
//!     .await?;
//! let entitlements = client
//!     .current_consumer()?
//!     .consume_pool(pools[0].id.as_deref().unwrap_or_default())
//!     .await?;
//! ```

mod admin;
mod client;
mod consumer;
mod consumers;
mod owners;
pub mod path;
mod pools;
mod products;
mod subscriptions;

pub use client::CandlepinClient;
pub use consumer::ConsumerClient;
pub use consumers::DEFAULT_CONSUMER_TYPE;
pub use pools::PoolFilter;
