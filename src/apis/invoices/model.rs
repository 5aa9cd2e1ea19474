use chrono::{DateTime, Utc};
use derive_builder::Builder;
use serde::{Serialize, Serializer};

/// Filters for listing the invoices of a store.
#[derive(Serialize, Builder, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct InvoicesQuery {
    /// Any of `PAID`, `NOT_PAID`, `CANCELLED`, `DRAFT`.
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_comma_separated"
    )]
    pub status: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
    /// Starts at 1.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Defaults to 25 server side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_invoice_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
}

/// Business and store owning an invoice.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct InvoiceScope<'a> {
    pub business_id: &'a str,
    pub store_id: &'a str,
}

#[derive(Serialize, Debug)]
pub(crate) struct ScopedQuery<'a, T> {
    #[serde(flatten)]
    pub scope: InvoiceScope<'a>,
    #[serde(flatten)]
    pub query: &'a T,
}

fn serialize_comma_separated<S>(values: &Option<Vec<String>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match values {
        Some(values) => serializer.serialize_str(&values.join(",")),
        None => serializer.serialize_none(),
    }
}
