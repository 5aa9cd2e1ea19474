use crate::{
    apis::{orders::OrdersQuery, PoyntClientInner},
    common::with_query,
    http::RequestSpec,
    Error,
};
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Poynt orders APIs client.
#[derive(Clone, Debug)]
pub struct OrdersApi {
    inner: Arc<PoyntClientInner>,
}

impl OrdersApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    /// Lists the orders of a business.
    #[tracing::instrument(name = "Get Orders", skip(self, query))]
    pub async fn get_orders(&self, business_id: &str, query: &OrdersQuery) -> Result<Value, Error> {
        let url = with_query(format!("/businesses/{}/orders", encode(business_id)), query, &[])?;

        self.inner.request(RequestSpec::get(url)).await
    }

    #[tracing::instrument(name = "Get Order", skip(self))]
    pub async fn get_order(&self, business_id: &str, order_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(format!(
                "/businesses/{}/orders/{}",
                encode(business_id),
                encode(order_id)
            )))
            .await
    }
}
