use crate::{
    apis::{query::IdsQuery, ListQuery, PoyntClientInner},
    common::with_query,
    http::RequestSpec,
    patch::{PatchOptions, ResourceUpdate},
    validation, Error,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Poynt catalogs APIs client.
#[derive(Clone, Debug)]
pub struct CatalogsApi {
    inner: Arc<PoyntClientInner>,
}

impl CatalogsApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Get Catalogs", skip(self, query))]
    pub async fn get_catalogs(&self, business_id: &str, query: &ListQuery) -> Result<Value, Error> {
        let url = with_query(format!("/businesses/{}/catalogs", encode(business_id)), query, &[])?;

        self.inner.request(RequestSpec::get(url)).await
    }

    #[tracing::instrument(name = "Get Catalog", skip(self))]
    pub async fn get_catalog(&self, business_id: &str, catalog_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(catalog_url(business_id, catalog_id)))
            .await
    }

    /// Gets a catalog with all its products and categories expanded.
    #[tracing::instrument(name = "Get Full Catalog", skip(self))]
    pub async fn get_full_catalog(
        &self,
        business_id: &str,
        catalog_id: &str,
    ) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(format!(
                "{}/full",
                catalog_url(business_id, catalog_id)
            )))
            .await
    }

    /// Creates a catalog referencing existing products. `name` is required.
    #[tracing::instrument(name = "Create Catalog", skip(self, catalog))]
    pub async fn create_catalog<T>(&self, business_id: &str, catalog: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        self.post_catalog(format!("/businesses/{}/catalogs", encode(business_id)), catalog)
            .await
    }

    /// Creates a catalog along with the products and categories it embeds. `name` is required.
    #[tracing::instrument(name = "Create Full Catalog", skip(self, catalog))]
    pub async fn create_full_catalog<T>(
        &self,
        business_id: &str,
        catalog: &T,
    ) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        self.post_catalog(
            format!("/businesses/{}/catalogs/full", encode(business_id)),
            catalog,
        )
        .await
    }

    async fn post_catalog<T>(&self, url: String, catalog: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        validation::validate(catalog, &["name"])?;
        let body = serde_json::to_value(catalog).map_err(|e| Error::Other(e.into()))?;

        self.inner
            .request(RequestSpec::post(url).with_body(body))
            .await
    }

    #[tracing::instrument(name = "Update Catalog", skip(self, update))]
    pub async fn update_catalog(
        &self,
        business_id: &str,
        catalog_id: &str,
        update: ResourceUpdate,
        options: &PatchOptions,
    ) -> Result<Value, Error> {
        self.inner
            .update_resource("catalog", catalog_url(business_id, catalog_id), update, options)
            .await
    }

    #[tracing::instrument(name = "Delete Catalog", skip(self))]
    pub async fn delete_catalog(&self, business_id: &str, catalog_id: &str) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::delete(catalog_url(business_id, catalog_id)))
            .await
    }

    #[tracing::instrument(name = "Get Category", skip(self))]
    pub async fn get_category(
        &self,
        business_id: &str,
        catalog_id: &str,
        category_id: &str,
    ) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(category_url(
                business_id,
                catalog_id,
                category_id,
            )))
            .await
    }

    /// Creates a category in a catalog. `name` and `shortCode` are required.
    #[tracing::instrument(name = "Create Category", skip(self, category))]
    pub async fn create_category<T>(
        &self,
        business_id: &str,
        catalog_id: &str,
        category: &T,
    ) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        validation::validate(category, &["name", "shortCode"])?;
        let body = serde_json::to_value(category).map_err(|e| Error::Other(e.into()))?;

        self.inner
            .request(
                RequestSpec::post(format!(
                    "{}/categories",
                    catalog_url(business_id, catalog_id)
                ))
                .with_body(body),
            )
            .await
    }

    #[tracing::instrument(name = "Lookup Categories", skip(self))]
    pub async fn lookup_categories(
        &self,
        business_id: &str,
        catalog_id: &str,
        ids: &[String],
    ) -> Result<Value, Error> {
        validation::require([("ids", !ids.is_empty())])?;
        let url = with_query(
            format!("{}/categories/lookup", catalog_url(business_id, catalog_id)),
            &IdsQuery { ids },
            &[],
        )?;

        self.inner.request(RequestSpec::get(url)).await
    }

    #[tracing::instrument(name = "Delete Category", skip(self))]
    pub async fn delete_category(
        &self,
        business_id: &str,
        catalog_id: &str,
        category_id: &str,
    ) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::delete(category_url(
                business_id,
                catalog_id,
                category_id,
            )))
            .await
    }

    #[tracing::instrument(name = "Update Category", skip(self, update))]
    pub async fn update_category(
        &self,
        business_id: &str,
        catalog_id: &str,
        category_id: &str,
        update: ResourceUpdate,
        options: &PatchOptions,
    ) -> Result<Value, Error> {
        self.inner
            .update_resource(
                "category",
                category_url(business_id, catalog_id, category_id),
                update,
                options,
            )
            .await
    }
}

fn catalog_url(business_id: &str, catalog_id: &str) -> String {
    format!(
        "/businesses/{}/catalogs/{}",
        encode(business_id),
        encode(catalog_id)
    )
}

fn category_url(business_id: &str, catalog_id: &str, category_id: &str) -> String {
    format!(
        "{}/categories/{}",
        catalog_url(business_id, catalog_id),
        encode(category_id)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{apis::testing::mock_inner, patch::PatchOperation};
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    #[tokio::test]
    async fn create_full_catalog() {
        let mock_server = MockServer::start().await;
        let api = CatalogsApi::new(mock_inner(&mock_server).await);
        Mock::given(method("POST"))
            .and(path("/businesses/b/catalogs/full"))
            .and(body_json(json!({ "name": "Menu", "products": [] })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "id": "c1" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let catalog = api
            .create_full_catalog("b", &json!({ "name": "Menu", "products": [] }))
            .await
            .unwrap();

        assert_eq!(catalog["id"], "c1");
    }

    #[tokio::test]
    async fn create_category_requires_keys() {
        let mock_server = MockServer::start().await;
        let api = CatalogsApi::new(mock_inner(&mock_server).await);

        let err = api
            .create_category("b", "c1", &json!({ "color": "red" }))
            .await
            .unwrap_err();

        assert_eq!(
            err.as_api_error().unwrap().message,
            "Missing params: name, shortCode"
        );
    }

    #[tokio::test]
    async fn lookup_categories() {
        let mock_server = MockServer::start().await;
        let api = CatalogsApi::new(mock_inner(&mock_server).await);
        Mock::given(method("GET"))
            .and(path("/businesses/b/catalogs/c1/categories/lookup"))
            .and(query_param("ids", "cat2"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "categories": [] })))
            .expect(1)
            .mount(&mock_server)
            .await;

        api.lookup_categories("b", "c1", &["cat1".to_string(), "cat2".to_string()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn update_category_with_operations() {
        let mock_server = MockServer::start().await;
        let api = CatalogsApi::new(mock_inner(&mock_server).await);
        Mock::given(method("PATCH"))
            .and(path("/businesses/b/catalogs/c1/categories/cat1"))
            .and(body_json(json!([{ "op": "replace", "path": "/name", "value": "Drinks" }])))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Drinks" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let ops = vec![PatchOperation::Replace {
            path: "/name".to_string(),
            value: json!("Drinks"),
        }];
        api.update_category("b", "c1", "cat1", ops.into(), &PatchOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn delete_catalog() {
        let mock_server = MockServer::start().await;
        let api = CatalogsApi::new(mock_inner(&mock_server).await);
        Mock::given(method("DELETE"))
            .and(path("/businesses/b/catalogs/c1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        assert_eq!(api.delete_catalog("b", "c1").await.unwrap(), Value::Null);
    }
}
