use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::Serialize;

pub(crate) static DEFAULT_CURRENCY: &str = "USD";

/// Filters for listing the transactions of a business.
#[derive(Serialize, Builder, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct TransactionsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number_first6: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_number_last4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_expiration_month: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_expiration_year: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_holder_last_name: Option<String>,
    /// e.g. `AUTHORIZE`, `CAPTURE`, `REFUND`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unsettled_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credit_debit_only: Option<bool>,
    /// Which timestamp the time window applies to, e.g. `SETTLED_AT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_type: Option<String>,
}

/// Refund of a captured transaction.
///
/// Without an `amount` the whole transaction is refunded. When only the amount is given,
/// the currency of the original transaction is used.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[builder(default, setter(into, strip_option))]
pub struct RefundRequest {
    /// Amount in minor units.
    pub amount: Option<u64>,
    pub currency: Option<String>,
    /// Idempotency key for the refund.
    pub request_id: Option<String>,
}
