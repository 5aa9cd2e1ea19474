use chrono::NaiveDate;
use derive_builder::Builder;
use serde::Serialize;

/// Filters for listing the reports of a business.
#[derive(Serialize, Builder, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct ReportsQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device_id: Option<String>,
    /// Only return the latest report of each type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<bool>,
    /// e.g. `America/Los_Angeles`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Only return reports whose range overlaps this date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub including_date: Option<NaiveDate>,
}
