//! Single, unauthenticated HTTP calls to the Poynt APIs.

use crate::{
    apis::auth::AccessToken,
    client::{BaseUrls, TargetApp},
    common::{DEFAULT_TIMEOUT_MS, REQUEST_ID_HEADER},
    error::{normalize, ApiError},
    validation, Error,
};
use reqwest::{
    header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION},
    Method,
};
use reqwest_middleware::ClientWithMiddleware;
use serde_json::{Map, Value};
use std::{
    fmt::{Debug, Formatter},
    time::Duration,
};
use uuid::Uuid;

/// Description of a single request to the Poynt APIs.
///
/// `url` is a path relative to the base URL of the [`TargetApp`], for example
/// `/businesses/{businessId}/orders`. Absolute `http(s)://` URLs are used as they are.
#[derive(Debug, Clone, Default)]
pub struct RequestSpec {
    pub url: Option<String>,
    pub method: Option<Method>,
    /// Request body. JSON requests without a body send the JSON literal `true`.
    pub body: Option<Value>,
    /// Send `body` URL-encoded instead of as JSON.
    pub form: bool,
    /// Additional headers. Client identification, API version, request id and
    /// authorization headers always take precedence over these.
    pub headers: Vec<(String, String)>,
    /// Defaults to 30 seconds.
    pub timeout: Option<Duration>,
    /// Value of the `Poynt-Request-Id` header. Reusing the same id makes retries idempotent.
    pub request_id: Option<String>,
    pub app: TargetApp,
    /// Always fetch a new access token before sending the request.
    pub force_token_refresh: bool,
}

impl RequestSpec {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            method: Some(method),
            ..Default::default()
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn patch(url: impl Into<String>) -> Self {
        Self::new(Method::PATCH, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self.form = false;
        self
    }

    pub fn with_form(mut self, body: Value) -> Self {
        self.body = Some(body);
        self.form = true;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_request_id(mut self, request_id: Option<String>) -> Self {
        self.request_id = request_id;
        self
    }

    pub fn with_app(mut self, app: TargetApp) -> Self {
        self.app = app;
        self
    }

    pub fn with_force_token_refresh(mut self, force_token_refresh: bool) -> Self {
        self.force_token_refresh = force_token_refresh;
        self
    }
}

/// HTTP client sending naked requests: no token management, no retries.
#[derive(Clone)]
pub(crate) struct HttpClient {
    client: ClientWithMiddleware,
    urls: BaseUrls,
}

impl HttpClient {
    pub(crate) fn new(client: ClientWithMiddleware, urls: BaseUrls) -> Self {
        Self { client, urls }
    }

    pub(crate) fn urls(&self) -> &BaseUrls {
        &self.urls
    }

    /// Sends the request described by `spec`, attaching `access_token` if present.
    ///
    /// Resolves with the parsed response body for statuses below 300.
    #[tracing::instrument(
        name = "Send Request",
        level = "debug",
        skip_all,
        fields(method = ?spec.method, url = ?spec.url)
    )]
    pub(crate) async fn send(
        &self,
        spec: &RequestSpec,
        access_token: Option<&AccessToken>,
    ) -> Result<Value, Error> {
        validation::require([("url", spec.url.is_some()), ("method", spec.method.is_some())])?;
        let path = spec.url.as_deref().unwrap_or_default();
        let method = spec.method.clone().unwrap_or_default();

        let url = if path.starts_with("http://") || path.starts_with("https://") {
            path.to_string()
        } else {
            format!("{}{}", self.urls.url(spec.app), path)
        };
        let request_id = spec
            .request_id
            .clone()
            .unwrap_or_else(|| Uuid::new_v4().to_string());
        let timeout = spec
            .timeout
            .unwrap_or_else(|| Duration::from_millis(DEFAULT_TIMEOUT_MS));

        // Caller headers first, so that the standard ones always win
        let mut headers = HeaderMap::new();
        for (name, value) in &spec.headers {
            headers.insert(
                HeaderName::from_bytes(name.as_bytes()).map_err(|e| invalid_header(name, e))?,
                HeaderValue::from_str(value).map_err(|e| invalid_header(name, e))?,
            );
        }
        headers.insert(
            REQUEST_ID_HEADER,
            HeaderValue::from_str(&request_id).map_err(|e| invalid_header(REQUEST_ID_HEADER, e))?,
        );
        if let Some(access_token) = access_token {
            let mut header_value =
                HeaderValue::from_str(&format!("Bearer {}", access_token.expose_secret()))
                    .map_err(|e| invalid_header("Authorization", e))?;
            header_value.set_sensitive(true);
            headers.insert(AUTHORIZATION, header_value);
        }

        let builder = self
            .client
            .request(method.clone(), &url)
            .headers(headers)
            .timeout(timeout);
        let builder = if spec.form {
            builder.form(spec.body.as_ref().unwrap_or(&Value::Object(Map::new())))
        } else {
            builder.json(spec.body.as_ref().unwrap_or(&Value::Bool(true)))
        };

        tracing::debug!(%method, %url, %request_id, "Poynt API request");

        let response = builder
            .send()
            .await
            .map_err(|e| transport_error(e, timeout))?;

        tracing::debug!(status = %response.status(), "Poynt API response");

        let text = response
            .text()
            .await
            .map_err(|e| transport_error(e.into(), timeout))?;

        if spec.form {
            return match serde_json::from_str(&text) {
                Ok(body) => Ok(body),
                Err(_) => Err(normalize(&Value::String(text))),
            };
        }

        if text.is_empty() {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

impl Debug for HttpClient {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("urls", &self.urls)
            .finish_non_exhaustive()
    }
}

fn transport_error(e: reqwest_middleware::Error, timeout: Duration) -> Error {
    match e {
        reqwest_middleware::Error::Reqwest(e) if e.is_timeout() => Error::Timeout(timeout),
        e => e.into(),
    }
}

fn invalid_header(name: &str, e: impl std::fmt::Display) -> Error {
    ApiError::invalid_argument(format!("Invalid header {}: {}", name, e)).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        apis::auth::Token,
        middlewares::{
            error_handling::ErrorHandlingMiddleware, inject_headers::InjectClientHeadersMiddleware,
        },
    };
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, body_string, header, header_exists, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn mock_client(mock_server: &MockServer) -> HttpClient {
        let client = reqwest_middleware::ClientBuilder::new(reqwest::Client::new())
            .with(InjectClientHeadersMiddleware::new("mock-application-id"))
            .with(ErrorHandlingMiddleware)
            .build();

        HttpClient::new(client, BaseUrls::from_single_url(&mock_server.uri()))
    }

    #[tokio::test]
    async fn missing_url_and_method_fail_without_sending() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&mock_server)
            .await;

        let err = mock_client(&mock_server)
            .send(&RequestSpec::default(), None)
            .await
            .expect_err("Call succeeded");

        let api_error = err.as_api_error().unwrap();
        assert_eq!(api_error.name, "InvalidArgumentError");
        assert_eq!(api_error.message, "Missing params: url, method");
    }

    #[tokio::test]
    async fn standard_headers_are_attached() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/businesses/some-business"))
            .and(header("Poynt-Request-Id", "some-request-id"))
            .and(header("User-Agent", "rust-sdk-mock-application-id"))
            .and(header("Api-Version", "1.2"))
            .and(header("Authorization", "Bearer some-token"))
            .and(header("X-Custom", "custom"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": "some-business" })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let access_token = AccessToken {
            token: Token::new("some-token"),
            expires_at: None,
        };
        let spec = RequestSpec::get("/businesses/some-business")
            .with_request_id(Some("some-request-id".to_string()))
            .with_header("Api-Version", "0.1")
            .with_header("X-Custom", "custom");

        let body = mock_client(&mock_server)
            .send(&spec, Some(&access_token))
            .await
            .unwrap();

        assert_eq!(body, json!({ "id": "some-business" }));
    }

    #[tokio::test]
    async fn request_id_is_generated_when_missing() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(header_exists("Poynt-Request-Id"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = mock_client(&mock_server)
            .send(&RequestSpec::get("/"), None)
            .await
            .unwrap();

        assert_eq!(body, Value::Null);
    }

    #[tokio::test]
    async fn absent_json_body_is_sent_as_true() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_json(json!(true)))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = mock_client(&mock_server)
            .send(&RequestSpec::post("/onboard"), None)
            .await
            .unwrap();

        assert_eq!(body, json!("not json"));
    }

    #[tokio::test]
    async fn form_responses_are_parsed_as_json() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/token"))
            .and(body_string("assertion=jwt&grantType=bearer"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"accessToken":"a"}"#))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = mock_client(&mock_server)
            .send(
                &RequestSpec::post("/token")
                    .with_form(json!({ "assertion": "jwt", "grantType": "bearer" })),
                None,
            )
            .await
            .unwrap();

        assert_eq!(body, json!({ "accessToken": "a" }));
    }

    #[tokio::test]
    async fn unparsable_form_responses_are_normalized() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let err = mock_client(&mock_server)
            .send(&RequestSpec::post("/token").with_form(json!({})), None)
            .await
            .expect_err("Call succeeded");

        let api_error = err.as_api_error().unwrap();
        assert_eq!(api_error.message, "<html>oops</html>");
        assert_eq!(api_error.status_code, 400);
    }

    #[tokio::test]
    async fn web_requests_use_web_base_url() {
        let api_server = MockServer::start().await;
        let web_server = MockServer::start().await;
        Mock::given(path("/reports"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
            .expect(1)
            .mount(&web_server)
            .await;

        let client = reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build();
        let client = HttpClient::new(
            client,
            BaseUrls::new(&api_server.uri(), &web_server.uri()),
        );

        client
            .send(&RequestSpec::get("/reports").with_app(TargetApp::Web), None)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn timeouts_are_reported() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_millis(500)))
            .mount(&mock_server)
            .await;

        let err = mock_client(&mock_server)
            .send(
                &RequestSpec::get("/slow").with_timeout(Duration::from_millis(50)),
                None,
            )
            .await
            .expect_err("Call succeeded");

        assert!(matches!(err, Error::Timeout(t) if t == Duration::from_millis(50)));
        assert_eq!(err.status_code(), 500);
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_error() {
        let client = reqwest_middleware::ClientBuilder::new(reqwest::Client::new()).build();
        let client = HttpClient::new(client, BaseUrls::from_single_url("http://127.0.0.1:1"));

        let err = client
            .send(&RequestSpec::get("/"), None)
            .await
            .expect_err("Call succeeded");

        assert!(matches!(err, Error::HttpError(_)));
        assert_eq!(err.status_code(), 500);
    }
}
