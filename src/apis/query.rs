use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::Serialize;

/// Time window and paging accepted by most listing endpoints.
#[derive(Serialize, Builder, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct ListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_offset: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

/// List of ids for the `lookup` endpoints, sent as a repeated `ids` query parameter.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub(crate) struct IdsQuery<'a> {
    pub(crate) ids: &'a [String],
}
