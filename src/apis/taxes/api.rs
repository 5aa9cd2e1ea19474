use crate::{
    apis::{ListQuery, PoyntClientInner},
    common::with_query,
    http::RequestSpec,
    patch::{PatchOptions, ResourceUpdate},
    validation, Error,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Poynt taxes APIs client.
#[derive(Clone, Debug)]
pub struct TaxesApi {
    inner: Arc<PoyntClientInner>,
}

impl TaxesApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Get Taxes", skip(self, query))]
    pub async fn get_taxes(&self, business_id: &str, query: &ListQuery) -> Result<Value, Error> {
        let url = with_query(format!("/businesses/{}/taxes", encode(business_id)), query, &[])?;

        self.inner.request(RequestSpec::get(url)).await
    }

    #[tracing::instrument(name = "Get Tax", skip(self))]
    pub async fn get_tax(&self, business_id: &str, tax_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(tax_url(business_id, tax_id)))
            .await
    }

    /// Creates a tax. `name` is required.
    #[tracing::instrument(name = "Create Tax", skip(self, tax))]
    pub async fn create_tax<T>(&self, business_id: &str, tax: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        validation::validate(tax, &["name"])?;
        let body = serde_json::to_value(tax).map_err(|e| Error::Other(e.into()))?;

        self.inner
            .request(
                RequestSpec::post(format!("/businesses/{}/taxes", encode(business_id)))
                    .with_body(body),
            )
            .await
    }

    #[tracing::instrument(name = "Delete Tax", skip(self))]
    pub async fn delete_tax(&self, business_id: &str, tax_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::delete(tax_url(business_id, tax_id)))
            .await
    }

    #[tracing::instrument(name = "Update Tax", skip(self, update))]
    pub async fn update_tax(
        &self,
        business_id: &str,
        tax_id: &str,
        update: ResourceUpdate,
        options: &PatchOptions,
    ) -> Result<Value, Error> {
        self.inner
            .update_resource("tax", tax_url(business_id, tax_id), update, options)
            .await
    }
}

fn tax_url(business_id: &str, tax_id: &str) -> String {
    format!("/businesses/{}/taxes/{}", encode(business_id), encode(tax_id))
}
