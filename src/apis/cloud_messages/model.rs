use derive_builder::Builder;
use serde::Serialize;

pub(crate) static DEFAULT_TTL_SECONDS: u32 = 900;
pub(crate) static DEFAULT_DATA: &str = "{}";

/// Message delivered to an application running on a terminal.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[builder(default, setter(into, strip_option))]
pub struct CloudMessageRequest {
    pub business_id: Option<String>,
    pub store_id: Option<String>,
    pub device_id: Option<String>,
    /// Fully qualified class name of the receiving component.
    pub recipient_class_name: Option<String>,
    pub recipient_package_name: Option<String>,
    /// Serial number of the terminal.
    pub serial_number: Option<String>,
    /// Payload, `{}` when not set.
    pub data: Option<String>,
    /// Time to live in seconds, 900 when not set.
    pub ttl: Option<u32>,
    /// Messages sharing the same key replace each other while undelivered.
    pub collapse_key: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CloudMessage<'a> {
    pub business_id: &'a str,
    pub store_id: &'a str,
    pub device_id: &'a str,
    pub ttl: u32,
    pub data: &'a str,
    pub recipient: Recipient<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_num: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collapse_key: Option<&'a str>,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Recipient<'a> {
    pub class_name: &'a str,
    pub package_name: &'a str,
}
