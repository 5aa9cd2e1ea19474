use crate::{
    common::REQUEST_ID_HEADER,
    error::{ApiError, Error},
};
use async_trait::async_trait;
use reqwest::{Request, Response, StatusCode};
use reqwest_middleware::{Middleware, Next};
use serde_json::{Map, Value};
use task_local_extensions::Extensions;

/// Reqwest middleware which translates error responses (any status from 300 upwards)
/// returned from Poynt APIs into [`Error::ApiError`](crate::error::Error)s.
pub struct ErrorHandlingMiddleware;

#[async_trait]
impl Middleware for ErrorHandlingMiddleware {
    async fn handle(
        &self,
        req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let request_id = req
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        let response = next.run(req, extensions).await?;
        let status = response.status();
        if status.as_u16() < 300 {
            return Ok(response);
        }

        let bytes = response.bytes().await?;

        tracing::debug!("Failed HTTP request. Status code: {}", status);

        // JSON bodies are used as they are, anything else non-empty is kept as text
        let payload = serde_json::from_slice::<Value>(&bytes).unwrap_or_else(|_| {
            if bytes.is_empty() {
                Value::Object(Map::new())
            } else {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            }
        });

        Err(Error::ApiError(into_api_error(payload, status, request_id)).into())
    }
}

fn into_api_error(payload: Value, status: StatusCode, request_id: Option<String>) -> ApiError {
    match payload {
        Value::Object(mut map) => {
            if let Some(request_id) = request_id {
                map.insert("requestId".to_string(), request_id.into());
            }
            let has_status = map
                .get("httpStatus")
                .and_then(Value::as_u64)
                .map_or(false, |s| s != 0);
            if !has_status {
                map.insert("httpStatus".to_string(), status.as_u16().into());
            }

            ApiError::from_payload(&Value::Object(map))
        }
        payload => {
            let payload = match payload {
                text @ Value::String(_) => text,
                _ => Value::Object(Map::new()),
            };
            ApiError {
                status_code: status.as_u16(),
                request_id,
                ..ApiError::from_payload(&payload)
            }
        }
    }
}
