use crate::{
    apis::{query::IdsQuery, ListQuery, PoyntClientInner},
    common::with_query,
    http::RequestSpec,
    pagination::PageOptions,
    patch::{PatchOptions, ResourceUpdate},
    validation, Error,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Poynt products APIs client.
#[derive(Clone, Debug)]
pub struct ProductsApi {
    inner: Arc<PoyntClientInner>,
}

impl ProductsApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Get Products", skip(self, query))]
    pub async fn get_products(&self, business_id: &str, query: &ListQuery) -> Result<Value, Error> {
        let url = with_query(format!("/businesses/{}/products", encode(business_id)), query, &[])?;

        self.inner.request(RequestSpec::get(url)).await
    }

    /// Lists product summaries: id, name, short code and price only.
    #[tracing::instrument(name = "Get Products Summary", skip(self, query))]
    pub async fn get_products_summary(
        &self,
        business_id: &str,
        query: &ListQuery,
    ) -> Result<Value, Error> {
        let url = with_query(
            format!("/businesses/{}/products/summary", encode(business_id)),
            query,
            &[],
        )?;

        self.inner.request(RequestSpec::get(url)).await
    }

    /// Looks up products by id, collecting every page of results.
    #[tracing::instrument(name = "Lookup Products", skip(self))]
    pub async fn lookup_products(
        &self,
        business_id: &str,
        ids: &[String],
    ) -> Result<Vec<Value>, Error> {
        validation::require([("ids", !ids.is_empty())])?;
        let url = with_query(
            format!("/businesses/{}/products/lookup", encode(business_id)),
            &IdsQuery { ids },
            &[],
        )?;

        self.inner
            .paged_request(RequestSpec::get(url), &PageOptions::new("products"))
            .await
    }

    #[tracing::instrument(name = "Get Product", skip(self))]
    pub async fn get_product(&self, business_id: &str, product_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(product_url(business_id, product_id)))
            .await
    }

    /// Creates a product. `name`, `shortCode` and `sku` are required.
    #[tracing::instrument(name = "Create Product", skip(self, product))]
    pub async fn create_product<T>(&self, business_id: &str, product: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        validation::validate(product, &["name", "shortCode", "sku"])?;
        let body = serde_json::to_value(product).map_err(|e| Error::Other(e.into()))?;

        self.inner
            .request(
                RequestSpec::post(format!("/businesses/{}/products", encode(business_id)))
                    .with_body(body),
            )
            .await
    }

    /// Deactivates a product, removing it from every catalog referencing it.
    #[tracing::instrument(name = "Delete Product", skip(self))]
    pub async fn delete_product(&self, business_id: &str, product_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::delete(product_url(business_id, product_id)))
            .await
    }

    /// Updates a product, either with explicit patch operations or with its desired state.
    #[tracing::instrument(name = "Update Product", skip(self, update))]
    pub async fn update_product(
        &self,
        business_id: &str,
        product_id: &str,
        update: ResourceUpdate,
        options: &PatchOptions,
    ) -> Result<Value, Error> {
        self.inner
            .update_resource("product", product_url(business_id, product_id), update, options)
            .await
    }
}

fn product_url(business_id: &str, product_id: &str) -> String {
    format!(
        "/businesses/{}/products/{}",
        encode(business_id),
        encode(product_id)
    )
}
