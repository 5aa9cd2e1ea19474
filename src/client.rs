//! Module containing the main Poynt API client.

use crate::{
    apis::{
        applications::ApplicationsApi, apple_pay::ApplePayApi, auth::AuthApi,
        business_applications::BusinessApplicationsApi, businesses::BusinessesApi,
        catalogs::CatalogsApi, cloud_messages::CloudMessagesApi, collect::CollectApi,
        customers::CustomersApi, invoices::InvoicesApi, orders::OrdersApi,
        processing_accounts::ProcessingAccountsApi, products::ProductsApi, reports::ReportsApi,
        taxes::TaxesApi, transactions::TransactionsApi, webhooks::WebhooksApi, PoyntClientInner,
    },
    authenticator::Authenticator,
    common::{
        DEFAULT_API_URL, DEFAULT_CI_API_URL, DEFAULT_CI_WEB_URL, DEFAULT_DEV_WEB_URL,
        DEFAULT_EU_API_URL, DEFAULT_EU_WEB_URL, DEFAULT_ST_API_URL, DEFAULT_ST_WEB_URL,
        DEFAULT_WEB_URL,
    },
    http::{HttpClient, RequestSpec},
    middlewares::{
        error_handling::ErrorHandlingMiddleware, inject_headers::InjectClientHeadersMiddleware,
    },
    pagination::PageOptions,
    Error,
};
use anyhow::Context;
use reqwest_middleware::ClientWithMiddleware;
use reqwest_tracing::TracingMiddleware;
use secrecy::Secret;
use serde_json::Value;
use std::{fmt, path::Path, str::FromStr, sync::Arc};

/// Poynt deployment environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Production,
    Dev,
    Ci,
    St,
}

impl FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "prod" | "production" => Ok(Environment::Production),
            "dev" => Ok(Environment::Dev),
            "ci" => Ok(Environment::Ci),
            "st" => Ok(Environment::St),
            other => Err(Error::Other(anyhow::anyhow!("Unknown environment: {}", other))),
        }
    }
}

/// Poynt deployment region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[default]
    Us,
    Eu,
}

impl FromStr for Region {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "us" => Ok(Region::Us),
            "eu" => Ok(Region::Eu),
            other => Err(Error::Other(anyhow::anyhow!("Unknown region: {}", other))),
        }
    }
}

/// Which family of Poynt hosts a request is sent to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TargetApp {
    /// REST APIs, e.g. `https://services.poynt.net`.
    #[default]
    Api,
    /// Merchant web application, e.g. `https://poynt.net`.
    Web,
}

/// Returns the default base URL for the given target, environment and region.
///
/// The environment takes precedence over the region.
pub fn default_base_url(app: TargetApp, environment: Environment, region: Region) -> &'static str {
    match (app, environment, region) {
        (TargetApp::Web, Environment::Dev, _) => DEFAULT_DEV_WEB_URL,
        (TargetApp::Web, Environment::Ci, _) => DEFAULT_CI_WEB_URL,
        (TargetApp::Web, Environment::St, _) => DEFAULT_ST_WEB_URL,
        (TargetApp::Web, Environment::Production, Region::Eu) => DEFAULT_EU_WEB_URL,
        (TargetApp::Web, Environment::Production, Region::Us) => DEFAULT_WEB_URL,
        (TargetApp::Api, Environment::Dev | Environment::Ci, _) => DEFAULT_CI_API_URL,
        (TargetApp::Api, Environment::St, _) => DEFAULT_ST_API_URL,
        (TargetApp::Api, Environment::Production, Region::Eu) => DEFAULT_EU_API_URL,
        (TargetApp::Api, Environment::Production, Region::Us) => DEFAULT_API_URL,
    }
}

/// Resolved base URLs for every [`TargetApp`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseUrls {
    api: String,
    web: String,
}

impl BaseUrls {
    pub fn new(api: &str, web: &str) -> Self {
        Self {
            api: api.trim_end_matches('/').to_string(),
            web: web.trim_end_matches('/').to_string(),
        }
    }

    pub fn from_environment(environment: Environment, region: Region) -> Self {
        Self::new(
            default_base_url(TargetApp::Api, environment, region),
            default_base_url(TargetApp::Web, environment, region),
        )
    }

    /// Routes every target to the same base URL. Mostly useful for testing.
    pub fn from_single_url(url: &str) -> Self {
        Self::new(url, url)
    }

    pub fn url(&self, app: TargetApp) -> &str {
        match app {
            TargetApp::Api => &self.api,
            TargetApp::Web => &self.web,
        }
    }
}

/// Client for Poynt public APIs.
///
/// Every request is authenticated with an access token obtained by signing a JWT with the
/// application's private key. The token is cached and refreshed when it is about to expire,
/// or when the server reports it as invalid (the request is then retried once).
#[derive(Clone)]
pub struct PoyntClient {
    /// Authentication APIs client.
    pub auth: AuthApi,
    pub businesses: BusinessesApi,
    pub orders: OrdersApi,
    pub customers: CustomersApi,
    pub products: ProductsApi,
    pub catalogs: CatalogsApi,
    pub taxes: TaxesApi,
    pub transactions: TransactionsApi,
    pub webhooks: WebhooksApi,
    pub cloud_messages: CloudMessagesApi,
    pub reports: ReportsApi,
    pub applications: ApplicationsApi,
    pub business_applications: BusinessApplicationsApi,
    pub invoices: InvoicesApi,
    pub processing_accounts: ProcessingAccountsApi,
    pub apple_pay: ApplePayApi,
    pub collect: CollectApi,
    inner: Arc<PoyntClientInner>,
}

impl PoyntClient {
    /// Builds a new [`PoyntClient`](crate::client::PoyntClient) with the default configuration.
    pub fn new(application_id: &str, private_key_pem: &str) -> PoyntClient {
        PoyntClientBuilder::new(application_id, private_key_pem).build()
    }

    /// Returns a new builder to configure a new [`PoyntClient`](crate::client::PoyntClient).
    pub fn builder(application_id: &str, private_key_pem: &str) -> PoyntClientBuilder {
        PoyntClientBuilder::new(application_id, private_key_pem)
    }

    /// Returns a new builder reading the PEM encoded private key from `path`.
    pub fn builder_with_key_file(
        application_id: &str,
        path: impl AsRef<Path>,
    ) -> Result<PoyntClientBuilder, Error> {
        PoyntClientBuilder::from_key_file(application_id, path)
    }

    /// The id of the application this client authenticates as.
    pub fn application_id(&self) -> &str {
        &self.inner.application_id
    }

    /// Sends an authenticated request and returns the parsed response body.
    ///
    /// This is the escape hatch for endpoints without a dedicated API client.
    pub async fn request(&self, spec: RequestSpec) -> Result<Value, Error> {
        self.inner.request(spec).await
    }

    /// Follows the `links` of a paginated listing, returning every collected item.
    pub async fn paged_request(
        &self,
        spec: RequestSpec,
        options: &PageOptions,
    ) -> Result<Vec<Value>, Error> {
        self.inner.paged_request(spec, options).await
    }
}

impl fmt::Debug for PoyntClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoyntClient")
            .field("inner", &self.inner)
            .finish_non_exhaustive()
    }
}

/// Builder for a [`PoyntClient`](crate::client::PoyntClient).
pub struct PoyntClientBuilder {
    client: reqwest::Client,
    application_id: String,
    private_key: Secret<String>,
    environment: Environment,
    region: Region,
    api_url: Option<String>,
    web_url: Option<String>,
}

impl PoyntClientBuilder {
    /// Creates a new builder to configure a [`PoyntClient`](crate::client::PoyntClient).
    pub fn new(application_id: &str, private_key_pem: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            application_id: application_id.to_string(),
            private_key: Secret::new(private_key_pem.to_string()),
            environment: Environment::default(),
            region: Region::default(),
            api_url: None,
            web_url: None,
        }
    }

    /// Creates a new builder reading the PEM encoded private key from `path`.
    pub fn from_key_file(application_id: &str, path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let private_key_pem = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read private key from {}", path.display()))
            .map_err(Error::Other)?;

        Ok(Self::new(application_id, &private_key_pem))
    }

    /// Consumes the builder and builds a new [`PoyntClient`](crate::client::PoyntClient).
    pub fn build(self) -> PoyntClient {
        let defaults = BaseUrls::from_environment(self.environment, self.region);
        let urls = BaseUrls::new(
            self.api_url.as_deref().unwrap_or(&defaults.api),
            self.web_url.as_deref().unwrap_or(&defaults.web),
        );

        let client = HttpClient::new(
            build_client_with_middleware(self.client, &self.application_id),
            urls,
        );
        let authenticator = Authenticator::new(
            client.clone(),
            self.application_id.clone(),
            self.private_key,
        );

        let inner = Arc::new(PoyntClientInner {
            client,
            authenticator,
            application_id: self.application_id,
        });

        PoyntClient {
            auth: AuthApi::new(inner.clone()),
            businesses: BusinessesApi::new(inner.clone()),
            orders: OrdersApi::new(inner.clone()),
            customers: CustomersApi::new(inner.clone()),
            products: ProductsApi::new(inner.clone()),
            catalogs: CatalogsApi::new(inner.clone()),
            taxes: TaxesApi::new(inner.clone()),
            transactions: TransactionsApi::new(inner.clone()),
            webhooks: WebhooksApi::new(inner.clone()),
            cloud_messages: CloudMessagesApi::new(inner.clone()),
            reports: ReportsApi::new(inner.clone()),
            applications: ApplicationsApi::new(inner.clone()),
            business_applications: BusinessApplicationsApi::new(inner.clone()),
            invoices: InvoicesApi::new(inner.clone()),
            processing_accounts: ProcessingAccountsApi::new(inner.clone()),
            apple_pay: ApplePayApi::new(inner.clone()),
            collect: CollectApi::new(inner.clone()),
            inner,
        }
    }

    /// Sets a specific reqwest [`Client`](reqwest::Client) to use.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    /// Selects the environment used to resolve the default base URLs.
    ///
    /// Defaults to [`Environment::Production`].
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = environment;
        self
    }

    /// Selects the region used to resolve the default base URLs.
    ///
    /// Only relevant in production. Defaults to [`Region::Us`].
    pub fn with_region(mut self, region: Region) -> Self {
        self.region = region;
        self
    }

    /// Sets the base URL for API requests, overriding environment and region.
    ///
    /// Defaults to: `https://services.poynt.net`
    pub fn with_api_url(mut self, api_url: &str) -> Self {
        self.api_url = Some(api_url.to_string());
        self
    }

    /// Sets the base URL for requests to the merchant web application.
    ///
    /// Defaults to: `https://poynt.net`
    pub fn with_web_url(mut self, web_url: &str) -> Self {
        self.web_url = Some(web_url.to_string());
        self
    }

    /// Routes both API and web requests to the same base URL.
    pub fn with_base_url(self, url: &str) -> Self {
        self.with_api_url(url).with_web_url(url)
    }
}

impl fmt::Debug for PoyntClientBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PoyntClientBuilder")
            .field("application_id", &self.application_id)
            .field("environment", &self.environment)
            .field("region", &self.region)
            .field("api_url", &self.api_url)
            .field("web_url", &self.web_url)
            .finish_non_exhaustive()
    }
}

pub(crate) fn build_client_with_middleware(
    client: reqwest::Client,
    application_id: &str,
) -> ClientWithMiddleware {
    reqwest_middleware::ClientBuilder::new(client)
        .with(TracingMiddleware::default())
        .with(InjectClientHeadersMiddleware::new(application_id))
        .with(ErrorHandlingMiddleware)
        .build()
}
