use crate::{
    apis::{auth::AccessToken, PoyntClientInner},
    Error,
};
use std::sync::Arc;

/// Poynt authentication API client.
#[derive(Debug, Clone)]
pub struct AuthApi {
    inner: Arc<PoyntClientInner>,
}

impl AuthApi {
    pub(crate) fn new(inner: Arc<PoyntClientInner>) -> Self {
        Self { inner }
    }

    /// Returns the current [`AccessToken`](crate::apis::auth::AccessToken) used to authenticate to the Poynt APIs.
    /// If the client is not authenticated yet, or the current token is about to expire,
    /// a new one is requested using the application's private key.
    pub async fn get_access_token(&self) -> Result<AccessToken, Error> {
        self.inner.authenticator.get_access_token(false).await
    }

    /// Discards the cached token and requests a new one.
    pub async fn refresh_access_token(&self) -> Result<AccessToken, Error> {
        self.inner.authenticator.get_access_token(true).await
    }
}
