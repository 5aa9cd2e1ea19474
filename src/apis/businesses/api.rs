use crate::{apis::PoyntClientInner, http::RequestSpec, Error};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Poynt businesses APIs client.
#[derive(Clone, Debug)]
pub struct BusinessesApi {
    inner: Arc<PoyntClientInner>,
}

impl BusinessesApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    /// Gets a business by id.
    #[tracing::instrument(name = "Get Business", skip(self))]
    pub async fn get_business(&self, business_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(format!("/businesses/{}", encode(business_id))))
            .await
    }

    /// Gets all the users of a business.
    #[tracing::instrument(name = "Get Business Users", skip(self))]
    pub async fn get_business_users(&self, business_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(format!(
                "/businesses/{}/businessUsers",
                encode(business_id)
            )))
            .await
    }

    #[tracing::instrument(name = "Get Business User", skip(self))]
    pub async fn get_business_user(
        &self,
        business_id: &str,
        business_user_id: &str,
    ) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(format!(
                "/businesses/{}/businessUsers/{}",
                encode(business_id),
                encode(business_user_id)
            )))
            .await
    }

    #[tracing::instrument(name = "Get Store", skip(self))]
    pub async fn get_store(&self, business_id: &str, store_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(format!(
                "/businesses/{}/stores/{}",
                encode(business_id),
                encode(store_id)
            )))
            .await
    }
}
