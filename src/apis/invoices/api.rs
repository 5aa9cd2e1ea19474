use crate::{
    apis::{
        invoices::{
            defaults::fill_invoice_defaults,
            model::{InvoiceScope, ScopedQuery},
            InvoicesQuery,
        },
        PoyntClientInner,
    },
    client::TargetApp,
    common::with_query,
    error::ApiError,
    http::RequestSpec,
    validation, Error,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use urlencoding::encode;

static REQUIRED_INVOICE_KEYS: &[&str] = &[
    "firstName",
    "customerEmail",
    "title",
    "message",
    "dueAt",
    "order",
];

/// Poynt invoicing APIs client.
#[derive(Clone, Debug)]
pub struct InvoicesApi {
    inner: Arc<PoyntClientInner>,
}

impl InvoicesApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Get Invoices", skip(self, query))]
    pub async fn get_invoices(
        &self,
        business_id: &str,
        store_id: &str,
        query: &InvoicesQuery,
    ) -> Result<Value, Error> {
        let url = with_query(
            "/invoicing/invoices".to_string(),
            &ScopedQuery {
                scope: InvoiceScope {
                    business_id,
                    store_id,
                },
                query,
            },
            &[],
        )?;

        self.inner
            .request(RequestSpec::get(url).with_app(TargetApp::Web))
            .await
    }

    #[tracing::instrument(name = "Get Invoice", skip(self))]
    pub async fn get_invoice(
        &self,
        business_id: &str,
        store_id: &str,
        order_id: &str,
    ) -> Result<Value, Error> {
        let url = with_query(
            invoice_url(order_id),
            &InvoiceScope {
                business_id,
                store_id,
            },
            &[],
        )?;

        self.inner
            .request(RequestSpec::get(url).with_app(TargetApp::Web))
            .await
    }

    /// Creates and sends an invoice.
    ///
    /// `firstName`, `customerEmail`, `title`, `message`, `dueAt` and `order` are required,
    /// as well as the `netTotal` and `currency` of `order.amounts`. Anything else the
    /// invoicing service needs is defaulted: a single item for the whole amount, no
    /// discounts, fees or taxes, and an order opened by this application.
    #[tracing::instrument(name = "Create Invoice", skip(self, invoice))]
    pub async fn create_invoice<T>(
        &self,
        business_id: &str,
        store_id: &str,
        invoice: &T,
    ) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        validation::validate(invoice, REQUIRED_INVOICE_KEYS)?;
        let mut body = serde_json::to_value(invoice).map_err(|e| Error::Other(e.into()))?;
        let invoice = body
            .as_object_mut()
            .ok_or_else(|| ApiError::invalid_argument("Invoice must be a JSON object"))?;
        validation::validate(&invoice.get("order"), &["amounts"])?;
        validation::validate(
            &invoice.get("order").and_then(|order| order.get("amounts")),
            &["netTotal", "currency"],
        )?;

        invoice.insert("businessId".to_string(), json!(business_id));
        invoice.insert("storeId".to_string(), json!(store_id));
        fill_invoice_defaults(invoice, &self.inner.application_id);

        self.inner
            .request(
                RequestSpec::post("/invoicing/invoices")
                    .with_body(body)
                    .with_app(TargetApp::Web),
            )
            .await
    }

    #[tracing::instrument(name = "Send Invoice Reminder", skip(self))]
    pub async fn send_invoice_reminder(
        &self,
        business_id: &str,
        store_id: &str,
        order_id: &str,
    ) -> Result<Value, Error> {
        let body = json!({ "businessId": business_id, "storeId": store_id });

        self.inner
            .request(
                RequestSpec::post(format!("{}/reminder", invoice_url(order_id)))
                    .with_body(body)
                    .with_app(TargetApp::Web),
            )
            .await
    }

    #[tracing::instrument(name = "Cancel Invoice", skip(self))]
    pub async fn cancel_invoice(
        &self,
        business_id: &str,
        store_id: &str,
        order_id: &str,
    ) -> Result<Value, Error> {
        let url = with_query(
            invoice_url(order_id),
            &InvoiceScope {
                business_id,
                store_id,
            },
            &[],
        )?;

        self.inner
            .request(RequestSpec::delete(url).with_app(TargetApp::Web))
            .await
    }
}

fn invoice_url(order_id: &str) -> String {
    format!("/invoicing/invoices/{}", encode(order_id))
}
