use derive_builder::Builder;
use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};

pub(crate) static BASIC_APPLICATION_LEVEL: &str = "BASIC";

/// Identity document of a person or company, e.g. `SSN` or `EIN`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GovernmentIdentification {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Serialize, Deserialize, Builder, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct Address {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line1: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// State or province.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub territory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
}

/// Person applying for a merchant account.
///
/// Serialized the way the onboarding API expects it: `email` becomes
/// `{ "emailAddress": ... }` and `phone` becomes `{ "localPhoneNumber": ... }`.
#[derive(Serialize, Builder, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct Applicant {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_email"
    )]
    pub email: Option<String>,
    #[serde(
        skip_serializing_if = "Option::is_none",
        serialize_with = "serialize_phone"
    )]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub government_identification: Option<GovernmentIdentification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lead_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip: Option<String>,
}

#[derive(Serialize, Builder, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
#[builder(default, setter(into, strip_option))]
pub struct Company {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub government_identification: Option<GovernmentIdentification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub site: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_category: Option<String>,
    /// Merchant category code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mcc: Option<String>,
}

/// GoDaddy account the application is linked to.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[builder(default, setter(into, strip_option))]
pub struct GoDaddyAccount {
    pub customer_id: Option<String>,
    pub shopper_id: Option<String>,
    pub service_id: Option<String>,
    pub service_type: Option<String>,
    pub venture_id: Option<String>,
}

/// New onboarding application. The GoDaddy customer and shopper ids are required.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[builder(default, setter(into, strip_option))]
pub struct CreateApplicationRequest {
    pub account: GoDaddyAccount,
    pub applicant: Option<Applicant>,
    pub company: Option<Company>,
    /// `BASIC` when not set. Any other level also sends `medium`, `source` and `context`.
    pub application_level: Option<String>,
    pub referral_url_id: Option<String>,
    pub mock: Option<bool>,
    pub master_mid: Option<bool>,
    pub medium: Option<String>,
    pub source: Option<String>,
    pub context: Option<String>,
    /// Return the existing application of the customer, if any.
    pub find: bool,
    pub create_business: bool,
    pub skip_risk_application: bool,
    pub override_referral_url: bool,
    pub use_shopper_data: bool,
}

/// Changes to an existing onboarding application.
#[derive(Builder, Debug, Clone, Default, PartialEq, Eq)]
#[builder(default, setter(into, strip_option))]
pub struct UpdateApplicationRequest {
    pub account: GoDaddyAccount,
    pub applicant: Option<Applicant>,
    pub company: Option<Company>,
    /// `BASIC` when not set. Ignored when passing the full onboarding step-up.
    pub application_level: Option<String>,
    pub context: Option<String>,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplicationBody<'a> {
    pub application: ApplicationDetails<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applicant: Option<&'a Applicant>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<&'a Company>,
}

#[derive(Serialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplicationDetails<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mock: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_mid: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub godaddy_customer_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub godaddy_shopper_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub godaddy_service_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub godaddy_service_type: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub godaddy_venture_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub referral_url_id: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub application_level: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub medium: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<&'a str>,
}

impl<'a> ApplicationDetails<'a> {
    pub(crate) fn for_account(account: &'a GoDaddyAccount) -> Self {
        Self {
            godaddy_customer_id: account.customer_id.as_deref(),
            godaddy_shopper_id: account.shopper_id.as_deref(),
            godaddy_service_id: account.service_id.as_deref(),
            godaddy_service_type: account.service_type.as_deref(),
            godaddy_venture_id: account.venture_id.as_deref(),
            ..Default::default()
        }
    }
}

#[derive(Serialize, Debug)]
pub(crate) struct CreateApplicationFlags {
    #[serde(skip_serializing_if = "is_false")]
    pub find: bool,
    #[serde(rename = "create-business", skip_serializing_if = "is_false")]
    pub create_business: bool,
    #[serde(rename = "skip-risk-application", skip_serializing_if = "is_false")]
    pub skip_risk_application: bool,
    #[serde(rename = "override-referral-url", skip_serializing_if = "is_false")]
    pub override_referral_url: bool,
    #[serde(rename = "use-shopper-data", skip_serializing_if = "is_false")]
    pub use_shopper_data: bool,
}

fn is_false(value: &bool) -> bool {
    !value
}

fn serialize_email<S>(email: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("emailAddress", email)?;
    map.end()
}

fn serialize_phone<S>(phone: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut map = serializer.serialize_map(Some(1))?;
    map.serialize_entry("localPhoneNumber", phone)?;
    map.end()
}
