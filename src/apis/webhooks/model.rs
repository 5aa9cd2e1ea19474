use derive_builder::Builder;
use serde::Serialize;

/// Subscription to one or more webhook events.
///
/// `event_type` is a shorthand for a single event and is merged into `event_types`.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[builder(default, setter(into, strip_option))]
pub struct CreateHookRequest {
    pub business_id: Option<String>,
    /// URL receiving the event notifications.
    pub delivery_url: Option<String>,
    /// Secret used by Poynt to sign the notifications.
    pub secret: Option<String>,
    pub event_type: Option<String>,
    /// e.g. `TRANSACTION_AUTHORIZED`, `ORDER_COMPLETED`.
    pub event_types: Option<Vec<String>>,
}

impl CreateHookRequest {
    /// All the subscribed events, `None` if there are none.
    pub(crate) fn all_event_types(&self) -> Option<Vec<String>> {
        let mut event_types = self.event_types.clone().unwrap_or_default();
        if let Some(event_type) = &self.event_type {
            if !event_types.contains(event_type) {
                event_types.push(event_type.clone());
            }
        }

        Some(event_types).filter(|e| !e.is_empty())
    }
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct HookBody<'a> {
    pub application_id: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_url: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_types: Option<Vec<String>>,
}
