use crate::{
    apis::{customers::CustomersQuery, PoyntClientInner},
    common::with_query,
    http::RequestSpec,
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Poynt customers APIs client.
#[derive(Clone, Debug)]
pub struct CustomersApi {
    inner: Arc<PoyntClientInner>,
}

impl CustomersApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    /// Lists the customers of a business, optionally filtered by the cards they used.
    #[tracing::instrument(name = "Get Customers", skip(self, query))]
    pub async fn get_customers(
        &self,
        business_id: &str,
        query: &CustomersQuery,
    ) -> Result<Value, Error> {
        let url = with_query(
            format!("/businesses/{}/customers", encode(business_id)),
            query,
            &[],
        )?;

        self.inner.request(RequestSpec::get(url)).await
    }

    #[tracing::instrument(name = "Get Customer", skip(self))]
    pub async fn get_customer(&self, business_id: &str, customer_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(format!(
                "/businesses/{}/customers/{}",
                encode(business_id),
                encode(customer_id)
            )))
            .await
    }
}
