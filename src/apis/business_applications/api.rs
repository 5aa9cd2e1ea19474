use crate::{apis::PoyntClientInner, client::TargetApp, http::RequestSpec, Error};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Poynt business applications APIs client.
#[derive(Clone, Debug)]
pub struct BusinessApplicationsApi {
    inner: Arc<PoyntClientInner>,
}

impl BusinessApplicationsApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Get Business Application", skip(self))]
    pub async fn get_business_application(&self, business_id: &str) -> Result<Value, Error> {
        self.get(business_id, "").await
    }

    #[tracing::instrument(name = "Get Business Application Account", skip(self))]
    pub async fn get_business_application_account(
        &self,
        business_id: &str,
    ) -> Result<Value, Error> {
        self.get(business_id, "account").await
    }

    /// Lists the hardware orders placed with the application.
    #[tracing::instrument(name = "Get Business Application Orders", skip(self))]
    pub async fn get_business_application_orders(
        &self,
        business_id: &str,
    ) -> Result<Value, Error> {
        self.get(business_id, "orders").await
    }

    #[tracing::instrument(name = "Get Business Application Status", skip(self))]
    pub async fn get_business_application_status(
        &self,
        business_id: &str,
    ) -> Result<Value, Error> {
        self.get(business_id, "status").await
    }

    #[tracing::instrument(name = "Get Business Application Profile", skip(self))]
    pub async fn get_business_application_profile(
        &self,
        business_id: &str,
    ) -> Result<Value, Error> {
        self.get(business_id, "profile").await
    }

    async fn get(&self, business_id: &str, resource: &str) -> Result<Value, Error> {
        self.inner
            .request(
                RequestSpec::get(format!(
                    "/api/services/businesses/{}/payfac-application/{}",
                    encode(business_id),
                    resource
                ))
                .with_app(TargetApp::Web),
            )
            .await
    }
}
