use crate::{
    apis::{apple_pay::ApplePayRegistrationRequest, PoyntClientInner},
    http::RequestSpec,
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Poynt Apple Pay APIs client.
#[derive(Clone, Debug)]
pub struct ApplePayApi {
    inner: Arc<PoyntClientInner>,
}

impl ApplePayApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    /// Gets the Apple Pay merchant details of a business.
    #[tracing::instrument(name = "Get Apple Pay Registration", skip(self))]
    pub async fn get_registration(&self, business_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(registration_url(business_id)))
            .await
    }

    /// Registers or unregisters domains, or updates the merchant details.
    #[tracing::instrument(name = "Update Apple Pay Registration", skip(self, request))]
    pub async fn update_registration(
        &self,
        business_id: &str,
        request: &ApplePayRegistrationRequest,
    ) -> Result<Value, Error> {
        let body = serde_json::to_value(request).map_err(|e| Error::Other(e.into()))?;

        self.inner
            .request(RequestSpec::post(registration_url(business_id)).with_body(body))
            .await
    }

    /// Gets the file to host under `/.well-known` on every registered domain.
    #[tracing::instrument(name = "Get Apple Pay Domain Association File", skip(self))]
    pub async fn get_domain_association_file(&self, business_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(format!(
                "/businesses/{}/apple-pay/domain-association-file",
                encode(business_id)
            )))
            .await
    }
}

fn registration_url(business_id: &str) -> String {
    format!("/businesses/{}/apple-pay/registration", encode(business_id))
}
