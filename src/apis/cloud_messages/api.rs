use crate::{
    apis::{
        cloud_messages::{
            model::{CloudMessage, Recipient, DEFAULT_DATA, DEFAULT_TTL_SECONDS},
            CloudMessageRequest,
        },
        PoyntClientInner,
    },
    http::RequestSpec,
    validation, Error,
};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Poynt cloud messages APIs client.
#[derive(Clone, Debug)]
pub struct CloudMessagesApi {
    inner: Arc<PoyntClientInner>,
}

impl CloudMessagesApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    /// Sends a fully specified cloud message.
    #[tracing::instrument(name = "Send Raw Cloud Message", skip(self, message))]
    pub async fn send_raw_cloud_message<T>(&self, message: &T) -> Result<Value, Error>
    where
        T: Serialize + ?Sized,
    {
        let body = serde_json::to_value(message).map_err(|e| Error::Other(e.into()))?;

        self.inner
            .request(RequestSpec::post("/cloudMessages").with_body(body))
            .await
    }

    /// Sends a message to an application running on a terminal.
    ///
    /// Business, store, device and the recipient class and package names are required.
    #[tracing::instrument(name = "Send Cloud Message", skip(self, request))]
    pub async fn send_cloud_message(&self, request: &CloudMessageRequest) -> Result<Value, Error> {
        validation::require([
            ("businessId", request.business_id.is_some()),
            ("storeId", request.store_id.is_some()),
            ("deviceId", request.device_id.is_some()),
            ("recipientClassName", request.recipient_class_name.is_some()),
            ("recipientPackageName", request.recipient_package_name.is_some()),
        ])?;

        let message = CloudMessage {
            business_id: request.business_id.as_deref().unwrap_or_default(),
            store_id: request.store_id.as_deref().unwrap_or_default(),
            device_id: request.device_id.as_deref().unwrap_or_default(),
            ttl: request.ttl.filter(|ttl| *ttl > 0).unwrap_or(DEFAULT_TTL_SECONDS),
            data: request
                .data
                .as_deref()
                .filter(|data| !data.is_empty())
                .unwrap_or(DEFAULT_DATA),
            recipient: Recipient {
                class_name: request.recipient_class_name.as_deref().unwrap_or_default(),
                package_name: request.recipient_package_name.as_deref().unwrap_or_default(),
            },
            serial_num: request.serial_number.as_deref().filter(|s| !s.is_empty()),
            collapse_key: request.collapse_key.as_deref().filter(|k| !k.is_empty()),
        };

        self.send_raw_cloud_message(&message).await
    }
}
