//! Standard errors used by all functions in the crate.
//!
//! Every failure surfaced by the client goes through this module: loosely-typed error
//! payloads returned by the Poynt APIs (JSON objects or plain text) are normalized into
//! an [`ApiError`] by [`ApiError::from_payload`], while errors that are already
//! structured (transport failures, signing failures, ...) keep their own [`Error`] variant
//! and are never normalized a second time.

use serde::Serialize;
use serde_json::Value;
use std::{fmt, time::Duration};

pub(crate) static FALLBACK_MESSAGE: &str = "Something went wrong";
pub(crate) static GENERIC_ERROR_NAME: &str = "Error";
pub(crate) static INVALID_ARGUMENT_ERROR: &str = "InvalidArgumentError";
pub(crate) static NOT_FOUND_ERROR: &str = "NotFoundError";

/// Error collecting all possible failures of the Poynt client.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Transport error: the request never produced a response.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),
    /// The request did not complete before its timeout expired.
    #[error("Request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    /// Normalized error, either returned by a Poynt API endpoint or raised by the client
    /// before sending any request (e.g. `InvalidArgumentError`).
    #[error("{0}")]
    ApiError(#[from] ApiError),
    /// Error signing the JWT assertion used to obtain an access token.
    #[error("Error signing token assertion: {0}")]
    SigningError(#[from] jsonwebtoken::errors::Error),
    /// The server accepted the request, but the returned resource is not in the state
    /// the operation requires (e.g. an authorization that came back `DECLINED`).
    #[error("{message}")]
    Rejected {
        message: String,
        /// The resource returned by the server.
        resource: Box<Value>,
    },
    /// Catch-all variant for unexpected errors.
    #[error(transparent)]
    Other(anyhow::Error),
}

impl Error {
    /// HTTP status code associated with this error.
    ///
    /// Transport failures and timeouts are reported as `500`, errors without any status
    /// information default to `400`.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::ApiError(e) => e.status_code,
            Error::HttpError(_) | Error::Timeout(_) => 500,
            Error::SigningError(_) | Error::Rejected { .. } | Error::Other(_) => 400,
        }
    }

    /// Name of the error class, e.g. `InvalidArgumentError`.
    pub fn name(&self) -> &str {
        match self {
            Error::ApiError(e) => &e.name,
            Error::Timeout(_) => "TimeoutError",
            _ => GENERIC_ERROR_NAME,
        }
    }

    /// Returns the normalized [`ApiError`] if this is an API error.
    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            Error::ApiError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest_middleware::Error> for Error {
    fn from(e: reqwest_middleware::Error) -> Self {
        match e {
            reqwest_middleware::Error::Reqwest(e) => Error::HttpError(e),
            reqwest_middleware::Error::Middleware(e) => {
                e.downcast::<Error>().unwrap_or_else(Error::Other)
            }
        }
    }
}

impl From<Error> for reqwest_middleware::Error {
    fn from(e: Error) -> Self {
        reqwest_middleware::Error::Middleware(e.into())
    }
}

/// Poynt HTTP APIs error, normalized into a single shape.
///
/// Serializes to the error payload documented by Poynt:
/// `{ name, message, statusCode, developerMessage?, requestId? }`.
#[derive(thiserror::Error, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Error class, e.g. `InvalidArgumentError`, `NotFoundError` or the name reported by the server.
    pub name: String,
    /// Human readable description of the error.
    pub message: String,
    /// HTTP status associated with the error.
    pub status_code: u16,
    /// Additional details meant for the developer, if the server provided any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_message: Option<String>,
    /// The identifier sent in the `Poynt-Request-Id` header of the failed request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,
    /// Machine readable error code reported by the server, e.g. `INVALID_ACCESS_TOKEN`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl ApiError {
    /// Builds an [`ApiError`] from a loosely-typed error payload.
    ///
    /// - `message` is taken from `payload.message`, then `payload.name`, then the payload
    ///   itself if it is a string, falling back to a generic message.
    /// - `name` is `payload.name` only when a message was supplied, `Error` otherwise.
    /// - `status_code` is `payload.statusCode`, then `payload.httpStatus`, defaulting to `400`.
    pub fn from_payload(payload: &Value) -> Self {
        let message_field = string_field(payload, "message");
        let name_field = string_field(payload, "name");

        let message = message_field
            .clone()
            .or_else(|| name_field.clone())
            .or_else(|| {
                payload
                    .as_str()
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| FALLBACK_MESSAGE.to_string());

        let name = message_field
            .and(name_field)
            .unwrap_or_else(|| GENERIC_ERROR_NAME.to_string());

        let status_code = status_field(payload, "statusCode")
            .or_else(|| status_field(payload, "httpStatus"))
            .unwrap_or(400);

        Self {
            name,
            message,
            status_code,
            developer_message: string_field(payload, "developerMessage"),
            request_id: string_field(payload, "requestId"),
            code: string_field(payload, "code"),
        }
    }

    pub(crate) fn invalid_argument(message: impl Into<String>) -> Self {
        Self::with_name(INVALID_ARGUMENT_ERROR, message, 400)
    }

    pub(crate) fn not_found(message: impl Into<String>) -> Self {
        Self::with_name(NOT_FOUND_ERROR, message, 404)
    }

    fn with_name(name: &str, message: impl Into<String>, status_code: u16) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
            status_code,
            developer_message: None,
            request_id: None,
            code: None,
        }
    }
}

/// Normalizes a loosely-typed error payload into an [`Error`].
pub fn normalize(payload: &Value) -> Error {
    Error::ApiError(ApiError::from_payload(payload))
}

fn string_field(payload: &Value, key: &str) -> Option<String> {
    payload
        .get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn status_field(payload: &Value, key: &str) -> Option<u16> {
    payload
        .get(key)
        .and_then(Value::as_u64)
        .filter(|status| *status != 0)
        .and_then(|status| u16::try_from(status).ok())
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Poynt HTTP error {}: {} ({})",
            self.status_code, self.message, self.name
        )?;

        if let Some(ref code) = self.code {
            write!(f, "\nCode: {}", code)?;
        }

        if let Some(ref developer_message) = self.developer_message {
            write!(f, "\nAdditional details: {}", developer_message)?;
        }

        if let Some(ref request_id) = self.request_id {
            write!(f, "\nRequest ID: {}", request_id)?;
        }

        Ok(())
    }
}
