use crate::{
    apis::auth::{AccessToken, Token},
    client::TargetApp,
    error::Error,
    http::{HttpClient, RequestSpec},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::{
    fmt::{Debug, Formatter},
    sync::Arc,
};
use tokio::sync::RwLock;
use uuid::Uuid;

pub(crate) static JWT_BEARER_GRANT_TYPE: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime of the signed self-assertion.
const ASSERTION_LIFETIME_DAYS: i64 = 365;
/// Tokens expiring within this many seconds are considered expired.
const EXPIRY_MARGIN_SECONDS: i64 = 60;

/// Manager for the application's access tokens.
///
/// Tokens are obtained by exchanging a self-signed RS256 JWT at `POST /token` and cached
/// until they are about to expire.
#[derive(Clone)]
pub struct Authenticator {
    state: Arc<AuthenticatorState>,
}

struct AuthenticatorState {
    client: HttpClient,
    application_id: String,
    private_key: Secret<String>,
    access_token: RwLock<Option<AccessToken>>,
}

impl Authenticator {
    pub fn new(client: HttpClient, application_id: String, private_key: Secret<String>) -> Self {
        Self {
            state: Arc::new(AuthenticatorState {
                client,
                application_id,
                private_key,
                access_token: RwLock::new(None),
            }),
        }
    }

    /// Returns the cached access token, fetching a new one if there's none, if it is
    /// about to expire, or if `force_refresh` is set.
    #[tracing::instrument(name = "Get Access Token", level = "debug", skip(self))]
    pub async fn get_access_token(&self, force_refresh: bool) -> Result<AccessToken, Error> {
        if !force_refresh {
            if let Some(token) = self.state.access_token.read().await.as_ref() {
                if !is_expired(token) {
                    tracing::debug!("Reusing existing access token");
                    return Ok(token.clone());
                }
            }
        }

        let token = self.authenticate().await?;
        *self.state.access_token.write().await = Some(token.clone());

        tracing::info!("Got new access token");

        Ok(token)
    }

    /// Signs a new self-assertion and exchanges it for an access token.
    ///
    /// The cache is left untouched.
    #[tracing::instrument(name = "Authenticate", level = "debug", skip(self))]
    pub async fn authenticate(&self) -> Result<AccessToken, Error> {
        let assertion = self.sign_assertion()?;
        let spec = RequestSpec::post("/token").with_form(json!({
            "grantType": JWT_BEARER_GRANT_TYPE,
            "assertion": assertion,
        }));

        let res: RawAuthenticationResponse =
            serde_json::from_value(self.state.client.send(&spec, None).await?)
                .map_err(|e| Error::Other(e.into()))?;

        if let Some(token_type) = res.token_type.as_deref() {
            if !token_type.eq_ignore_ascii_case("bearer") {
                return Err(Error::Other(anyhow::anyhow!(
                    "Unsupported access token type: {}",
                    token_type,
                )));
            }
        }

        Ok(AccessToken {
            token: res.access_token.into(),
            expires_at: res.expires_in.map(|s| now() + Duration::seconds(s)),
        })
    }

    fn sign_assertion(&self) -> Result<String, Error> {
        let issued_at = now().timestamp();
        let claims = AssertionClaims {
            aud: vec![self.state.client.urls().url(TargetApp::Api).to_string()],
            iss: &self.state.application_id,
            sub: &self.state.application_id,
            iat: issued_at,
            exp: issued_at + Duration::days(ASSERTION_LIFETIME_DAYS).num_seconds(),
            jti: Uuid::new_v4().to_string(),
        };

        let key = EncodingKey::from_rsa_pem(self.state.private_key.expose_secret().as_bytes())?;

        Ok(jsonwebtoken::encode(
            &Header::new(Algorithm::RS256),
            &claims,
            &key,
        )?)
    }
}

impl Debug for Authenticator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("application_id", &self.state.application_id)
            .finish_non_exhaustive()
    }
}

/// Returns `true` if the token's `exp` claim is less than a minute away.
///
/// The claims are decoded without verifying the signature. Tokens which cannot be decoded
/// are considered expired, tokens without an `exp` claim never expire.
pub(crate) fn is_expired(token: &Token) -> bool {
    let mut validation = Validation::new(Algorithm::RS256);
    validation.insecure_disable_signature_validation();
    validation.validate_exp = false;
    validation.validate_aud = false;
    validation.required_spec_claims.clear();

    match jsonwebtoken::decode::<TokenClaims>(
        token.expose_secret(),
        &DecodingKey::from_secret(&[]),
        &validation,
    ) {
        Ok(data) => data
            .claims
            .exp
            .map_or(false, |exp| exp < (now().timestamp() + EXPIRY_MARGIN_SECONDS) as f64),
        Err(_) => true,
    }
}

// Select an implementation of `now()` depending on whether we are testing or not
#[cfg(not(test))]
fn now() -> chrono::DateTime<Utc> {
    Utc::now()
}
#[cfg(test)]
use tests::mocked_time::now;

#[derive(Serialize)]
struct AssertionClaims<'a> {
    aud: Vec<String>,
    iss: &'a str,
    sub: &'a str,
    iat: i64,
    exp: i64,
    jti: String,
}

#[derive(Deserialize)]
struct TokenClaims {
    exp: Option<f64>,
}

/// Successful response of a `POST /token` request.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawAuthenticationResponse {
    access_token: String,
    expires_in: Option<i64>,
    token_type: Option<String>,
}
