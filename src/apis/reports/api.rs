use crate::{
    apis::{reports::ReportsQuery, PoyntClientInner},
    client::TargetApp,
    common::with_query,
    http::RequestSpec,
    validation, Error,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use urlencoding::encode;

/// Poynt reports APIs client.
#[derive(Clone, Debug)]
pub struct ReportsApi {
    inner: Arc<PoyntClientInner>,
}

impl ReportsApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Get Reports", skip(self, query))]
    pub async fn get_reports(
        &self,
        business_id: &str,
        query: &ReportsQuery,
    ) -> Result<Value, Error> {
        let url = with_query(
            format!("/businesses/{}/reports", encode(business_id)),
            query,
            &[],
        )?;

        self.inner
            .request(RequestSpec::get(url).with_app(TargetApp::Web))
            .await
    }

    /// Creates a report. `type`, `start` and `end` are required.
    ///
    /// Optional fields such as `storeId`, `tid`, `employeeId` or `employeeName` are sent
    /// as they are.
    #[tracing::instrument(name = "Create Report", skip(self, report))]
    pub async fn create_report<T>(&self, business_id: &str, report: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        validation::validate(report, &["type", "start", "end"])?;
        let mut body = serde_json::to_value(report).map_err(|e| Error::Other(e.into()))?;
        if let Some(body) = body.as_object_mut() {
            body.entry("businessId")
                .or_insert_with(|| Value::String(business_id.to_string()));
        }

        self.inner
            .request(
                RequestSpec::post(format!("/businesses/{}/reports", encode(business_id)))
                    .with_body(body)
                    .with_app(TargetApp::Web),
            )
            .await
    }
}
