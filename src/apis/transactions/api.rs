use crate::{
    apis::{
        transactions::{RefundRequest, TransactionsQuery, DEFAULT_CURRENCY},
        PoyntClientInner,
    },
    common::with_query,
    http::RequestSpec,
    Error,
};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::Arc;
use urlencoding::encode;

/// Poynt transactions APIs client.
///
/// Operations moving money accept an optional request id: retrying with the same id
/// will not process the operation twice.
#[derive(Clone, Debug)]
pub struct TransactionsApi {
    inner: Arc<PoyntClientInner>,
}

impl TransactionsApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    #[tracing::instrument(name = "Get Transactions", skip(self, query))]
    pub async fn get_transactions(
        &self,
        business_id: &str,
        query: &TransactionsQuery,
    ) -> Result<Value, Error> {
        let url = with_query(
            format!("/businesses/{}/transactions", encode(business_id)),
            query,
            &[],
        )?;

        self.inner.request(RequestSpec::get(url)).await
    }

    #[tracing::instrument(name = "Get Transaction", skip(self))]
    pub async fn get_transaction(
        &self,
        business_id: &str,
        transaction_id: &str,
    ) -> Result<Value, Error> {
        self.inner
            .request(RequestSpec::get(format!(
                "/businesses/{}/transactions/{}",
                encode(business_id),
                encode(transaction_id)
            )))
            .await
    }

    /// Returns the currency of a transaction, `USD` if it has none.
    #[tracing::instrument(name = "Get Transaction Currency", skip(self))]
    pub async fn get_transaction_currency(
        &self,
        business_id: &str,
        transaction_id: &str,
    ) -> Result<String, Error> {
        let transaction = self.get_transaction(business_id, transaction_id).await?;

        Ok(transaction
            .pointer("/amounts/currency")
            .and_then(Value::as_str)
            .filter(|c| !c.is_empty())
            .unwrap_or(DEFAULT_CURRENCY)
            .to_string())
    }

    /// Authorizes (or sales) a new transaction.
    ///
    /// Fails with [`Error::Rejected`] unless the transaction comes back `AUTHORIZED` or `CAPTURED`.
    #[tracing::instrument(name = "Create Transaction", skip(self, transaction))]
    pub async fn create_transaction<T>(
        &self,
        business_id: &str,
        transaction: &T,
        request_id: Option<String>,
    ) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_value(transaction).map_err(|e| Error::Other(e.into()))?;
        let transaction = self
            .inner
            .request(
                RequestSpec::post(format!("/businesses/{}/transactions", encode(business_id)))
                    .with_body(body)
                    .with_request_id(request_id),
            )
            .await?;

        expect_status(transaction, &["AUTHORIZED", "CAPTURED"], "Authorization failed")
    }

    /// Refunds a transaction, fully or partially.
    ///
    /// Fails with [`Error::Rejected`] unless the refund comes back `REFUNDED`.
    #[tracing::instrument(name = "Refund Transaction", skip(self, refund))]
    pub async fn refund_transaction(
        &self,
        business_id: &str,
        transaction_id: &str,
        refund: &RefundRequest,
    ) -> Result<Value, Error> {
        let mut body = json!({
            "action": "REFUND",
            "parentId": transaction_id,
        });

        // A zero amount refunds the whole transaction
        if let Some(amount) = refund.amount.filter(|amount| *amount > 0) {
            let currency = match &refund.currency {
                Some(currency) => currency.clone(),
                None => {
                    self.get_transaction_currency(business_id, transaction_id)
                        .await?
                }
            };
            body["amounts"] = json!({
                "transactionAmount": amount,
                "orderAmount": amount,
                "tipAmount": 0,
                "currency": currency,
            });
        }

        let transaction = self
            .inner
            .request(
                RequestSpec::post(format!("/businesses/{}/transactions", encode(business_id)))
                    .with_body(body)
                    .with_request_id(refund.request_id.clone()),
            )
            .await?;

        expect_status(transaction, &["REFUNDED"], "Refund failed")
    }

    /// Voids an authorized transaction.
    ///
    /// Fails with [`Error::Rejected`] unless the transaction comes back `VOIDED` or `DECLINED`.
    #[tracing::instrument(name = "Void Transaction", skip(self))]
    pub async fn void_transaction(
        &self,
        business_id: &str,
        transaction_id: &str,
        request_id: Option<String>,
    ) -> Result<Value, Error> {
        let transaction = self
            .inner
            .request(
                RequestSpec::post(format!(
                    "/businesses/{}/transactions/{}/void",
                    encode(business_id),
                    encode(transaction_id)
                ))
                .with_request_id(request_id),
            )
            .await?;

        expect_status(transaction, &["VOIDED", "DECLINED"], "Void failed")
    }

    /// Cancels a transaction which never completed, e.g. after a timeout on the terminal.
    ///
    /// Fails with [`Error::Rejected`] unless the transaction comes back `DECLINED`.
    #[tracing::instrument(name = "Cancel Transaction", skip(self, cancel_request))]
    pub async fn cancel_transaction(
        &self,
        business_id: &str,
        transaction_id: &str,
        cancel_request: Option<Value>,
        request_id: Option<String>,
    ) -> Result<Value, Error> {
        let body = match cancel_request {
            Some(cancel_request) => json!({ "cancelRequest": cancel_request }),
            None => json!({}),
        };

        let transaction = self
            .inner
            .request(
                RequestSpec::post(format!(
                    "/businesses/{}/transactions/cancel?transaction-id={}",
                    encode(business_id),
                    encode(transaction_id)
                ))
                .with_body(body)
                .with_request_id(request_id),
            )
            .await?;

        expect_status(transaction, &["DECLINED"], "Cancel failed")
    }
}

fn expect_status(transaction: Value, accepted: &[&str], message: &str) -> Result<Value, Error> {
    match transaction.get("status").and_then(Value::as_str) {
        Some(status) if accepted.contains(&status) => Ok(transaction),
        status => {
            tracing::warn!(?status, "{}", message);
            Err(Error::Rejected {
                message: message.to_string(),
                resource: Box::new(transaction),
            })
        }
    }
}
