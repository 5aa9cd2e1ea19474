use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::Serialize;

/// Filters for listing the orders of a business.
#[derive(Serialize, Builder, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct OrdersQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
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
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    /// Also return orders that are still open.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub include_stays_all: Option<bool>,
}
