use crate::{apis::PoyntClientInner, http::RequestSpec, validation, Error};
use serde_json::{json, Value};
use std::sync::Arc;
use urlencoding::encode;

/// Poynt Collect APIs client.
#[derive(Clone, Debug)]
pub struct CollectApi {
    inner: Arc<PoyntClientInner>,
}

impl CollectApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    /// Exchanges a card nonce obtained in the browser for a payment token.
    #[tracing::instrument(name = "Tokenize Card", skip(self, nonce))]
    pub async fn tokenize_card(&self, business_id: &str, nonce: &str) -> Result<Value, Error> {
        validation::require([("nonce", !nonce.is_empty())])?;

        self.inner
            .request(
                RequestSpec::post(format!("/businesses/{}/cards/tokenize", encode(business_id)))
                    .with_body(json!({ "nonce": nonce })),
            )
            .await
    }
}
