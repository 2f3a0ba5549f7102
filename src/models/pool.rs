//! Pool payloads.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::OwnerRef;

/// Quantity used when a new pool does not specify one.
pub const DEFAULT_POOL_QUANTITY: i64 = 100;

/// Length of the validity window used when a new pool has no end date.
pub const DEFAULT_POOL_DAYS: i64 = 365;

/// A pool as returned by the server.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Pool {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_subscription: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub consumed: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerRef>,
}

/// Parameters for creating a pool.
///
/// Dates left unset are resolved when the request is built: the start date
/// defaults to the current date and the end date to
/// [`DEFAULT_POOL_DAYS`] days after the start date.
///
/// # Example
///
/// ```rust
/// use candlepin_api::models::NewPool;
/// use chrono::NaiveDate;
///
/// let today = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let request = NewPool::new("rhel-server", "owner-1", "sub-1").into_request(today);
///
/// assert_eq!(request.quantity, 100);
/// assert_eq!(request.end_date, NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPool {
    pub product_id: String,
    pub owner_id: String,
    pub subscription_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub quantity: i64,
}

impl NewPool {
    /// Creates pool parameters with the default quantity and validity window.
    #[must_use]
    pub fn new(
        product_id: impl Into<String>,
        owner_id: impl Into<String>,
        subscription_id: impl Into<String>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            owner_id: owner_id.into(),
            subscription_id: subscription_id.into(),
            start_date: None,
            end_date: None,
            quantity: DEFAULT_POOL_QUANTITY,
        }
    }

    /// Sets the first day of validity.
    #[must_use]
    pub const fn start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Sets the last day of validity.
    #[must_use]
    pub const fn end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Sets the pool quantity.
    #[must_use]
    pub const fn quantity(mut self, quantity: i64) -> Self {
        self.quantity = quantity;
        self
    }

    /// Resolves default dates against `today` and produces the wire body.
    #[must_use]
    pub fn into_request(self, today: NaiveDate) -> PoolRequest {
        let start_date = self.start_date.unwrap_or(today);
        let end_date = self
            .end_date
            .unwrap_or_else(|| start_date + Duration::days(DEFAULT_POOL_DAYS));

        PoolRequest {
            active_subscription: false,
            subscription_id: self.subscription_id,
            quantity: self.quantity,
            consumed: 0,
            start_date,
            end_date,
            product_id: self.product_id,
            owner: OwnerRef { id: self.owner_id },
        }
    }
}

/// The body sent by `create_pool`. Dates serialize as `YYYY-MM-DD`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PoolRequest {
    pub active_subscription: bool,
    pub subscription_id: String,
    pub quantity: i64,
    pub consumed: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub product_id: String,
    pub owner: OwnerRef,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_defaults_resolve_against_today() {
        let request = NewPool::new("prod", "owner", "sub").into_request(date(2023, 3, 1));

        assert_eq!(request.start_date, date(2023, 3, 1));
        assert_eq!(request.end_date, date(2024, 2, 29));
        assert_eq!(request.end_date - request.start_date, Duration::days(365));
        assert_eq!(request.quantity, DEFAULT_POOL_QUANTITY);
        assert_eq!(request.consumed, 0);
        assert!(!request.active_subscription);
    }

    #[test]
    fn test_end_date_follows_explicit_start_date() {
        let request = NewPool::new("prod", "owner", "sub")
            .start_date(date(2020, 6, 15))
            .into_request(date(2023, 3, 1));

        assert_eq!(request.end_date, date(2021, 6, 15));
    }

    #[test]
    fn test_explicit_dates_and_quantity_are_kept() {
        let request = NewPool::new("prod", "owner", "sub")
            .start_date(date(2020, 1, 1))
            .end_date(date(2020, 2, 1))
            .quantity(5)
            .into_request(date(2023, 3, 1));

        assert_eq!(request.start_date, date(2020, 1, 1));
        assert_eq!(request.end_date, date(2020, 2, 1));
        assert_eq!(request.quantity, 5);
    }

    #[test]
    fn test_pool_request_wire_format() {
        let request = NewPool::new("rhel", "owner-1", "sub-9").into_request(date(2024, 1, 1));
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(
            body,
            json!({
                "activeSubscription": false,
                "subscriptionId": "sub-9",
                "quantity": 100,
                "consumed": 0,
                "startDate": "2024-01-01",
                "endDate": "2024-12-31",
                "productId": "rhel",
                "owner": {"id": "owner-1"}
            })
        );
    }

    #[test]
    fn test_pool_request_body_reads_back_as_pool() {
        let request = NewPool::new("rhel", "owner-1", "sub-9").into_request(date(2024, 1, 1));
        let text = serde_json::to_string(&request).unwrap();

        let pool: Pool = serde_json::from_str(&text).unwrap();
        assert_eq!(pool.product_id.as_deref(), Some("rhel"));
        assert_eq!(pool.start_date.as_deref(), Some("2024-01-01"));
        assert_eq!(pool.owner, Some(OwnerRef { id: "owner-1".to_string() }));
    }
}
