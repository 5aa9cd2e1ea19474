use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Bearer token returned by `POST /token` in exchange for a signed application assertion.
///
/// Poynt access tokens are JWTs: the client reads their `exp` claim to refresh them
/// a minute before they expire.
#[derive(Clone, Debug)]
pub struct AccessToken {
    pub(crate) token: Token,
    pub(crate) expires_at: Option<DateTime<Utc>>,
}

impl AccessToken {
    /// The encoded JWT, sent as `Authorization: Bearer <token>`.
    pub fn token(&self) -> &Token {
        &self.token
    }

    /// Expiry computed from the `expiresIn` seconds of the token response, if any.
    ///
    /// Informational only: refreshes are driven by the `exp` claim.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }
}

impl Deref for AccessToken {
    type Target = Token;

    fn deref(&self) -> &Self::Target {
        self.token()
    }
}

/// Encoded access token, redacted from `Debug` output and zeroed on drop.
///
/// ```rust
/// # use poynt_rust::apis::auth::Token;
/// let token = Token::new("eyJhbGciOiJSUzI1NiJ9.e30.c2ln");
///
/// assert!(!format!("{:?}", token).contains("eyJhbGci"));
/// assert_eq!(token.expose_secret(), "eyJhbGciOiJSUzI1NiJ9.e30.c2ln");
/// ```
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct Token(#[serde(serialize_with = "serialize_token")] Secret<String>);

impl Token {
    pub fn new<T: Into<String>>(s: T) -> Self {
        Self(Secret::new(s.into()))
    }

    /// The raw JWT. Avoid logging it.
    pub fn expose_secret(&self) -> &str {
        self.0.expose_secret()
    }
}

impl<T> From<T> for Token
where
    T: Into<String>,
{
    fn from(s: T) -> Self {
        Token::new(s)
    }
}

// Tokens are serialized in clear, e.g. to be handed over to another process.
fn serialize_token<S>(secret: &Secret<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::ser::Serializer,
{
    secret.expose_secret().serialize(serializer)
}
