use derive_builder::Builder;
use serde::Serialize;

/// Changes to the Apple Pay registration of a business. Unset fields are not sent.
#[derive(Serialize, Builder, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct ApplePayRegistrationRequest {
    /// Fully qualified domain names no longer displaying the Apple Pay button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unregister_domains: Option<Vec<String>>,
    /// Fully qualified domain names displaying the Apple Pay button.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub register_domains: Option<Vec<String>>,
    /// Human readable reason for unregistering domains.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_name: Option<String>,
    /// Site hosting the e-commerce store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_url: Option<String>,
}
