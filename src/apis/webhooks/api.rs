use crate::{
    apis::{
        webhooks::{model::HookBody, CreateHookRequest},
        PoyntClientInner,
    },
    common::with_query,
    http::RequestSpec,
    validation, Error,
};
use serde_json::{json, Value};
use std::sync::Arc;

/// Poynt webhooks APIs client.
#[derive(Clone, Debug)]
pub struct WebhooksApi {
    inner: Arc<PoyntClientInner>,
}

impl WebhooksApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    /// Lists the webhooks the business is subscribed to.
    #[tracing::instrument(name = "Get Hooks", skip(self))]
    pub async fn get_hooks(&self, business_id: &str) -> Result<Value, Error> {
        let url = with_query("/hooks".to_string(), &json!({ "businessId": business_id }), &[])?;

        self.inner.request(RequestSpec::get(url)).await
    }

    /// Subscribes the calling application to webhook events of a business.
    ///
    /// Business, delivery URL, secret and at least one event type are required.
    #[tracing::instrument(name = "Create Hook", skip(self, hook))]
    pub async fn create_hook(&self, hook: &CreateHookRequest) -> Result<Value, Error> {
        let body = HookBody {
            application_id: &self.inner.application_id,
            business_id: hook.business_id.as_deref(),
            delivery_url: hook.delivery_url.as_deref(),
            secret: hook.secret.as_deref(),
            event_types: hook.all_event_types(),
        };
        validation::validate(&body, &["eventTypes", "businessId", "deliveryUrl", "secret"])?;
        let body = serde_json::to_value(&body).map_err(|e| Error::Other(e.into()))?;

        self.inner
            .request(RequestSpec::post("/hooks/").with_body(body))
            .await
    }
}
