use crate::{
    apis::{processing_accounts::ProcessingAccountsQuery, PoyntClientInner},
    client::TargetApp,
    common::with_query,
    http::RequestSpec,
    Error,
};
use serde_json::Value;
use std::sync::Arc;

/// Poynt processing accounts APIs client.
#[derive(Clone, Debug)]
pub struct ProcessingAccountsApi {
    inner: Arc<PoyntClientInner>,
}

impl ProcessingAccountsApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Get Processing Accounts", skip(self, query))]
    pub async fn get_processing_accounts(
        &self,
        query: &ProcessingAccountsQuery,
    ) -> Result<Value, Error> {
        let url = with_query("/processing-accounts".to_string(), query, &[])?;

        self.inner
            .request(RequestSpec::get(url).with_app(TargetApp::Web))
            .await
    }
}
