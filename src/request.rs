use crate::{apis::PoyntClientInner, http::RequestSpec, Error};
use serde_json::Value;

/// API error code signalling that the access token has been rejected by the server.
pub(crate) static INVALID_ACCESS_TOKEN_CODE: &str = "INVALID_ACCESS_TOKEN";

impl PoyntClientInner {
    /// Sends an authenticated request.
    ///
    /// If the server rejects the access token, a new one is fetched and the request is
    /// retried exactly once.
    #[tracing::instrument(
        name = "Poynt Request",
        skip_all,
        fields(method = ?spec.method, url = ?spec.url)
    )]
    pub(crate) async fn request(&self, mut spec: RequestSpec) -> Result<Value, Error> {
        loop {
            let access_token = self
                .authenticator
                .get_access_token(spec.force_token_refresh)
                .await?;

            match self.client.send(&spec, Some(&access_token)).await {
                Err(e) if !spec.force_token_refresh && is_invalid_access_token(&e) => {
                    tracing::info!("Access token rejected, retrying with a new one");
                    spec.force_token_refresh = true;
                }
                res => return res,
            }
        }
    }
}

fn is_invalid_access_token(e: &Error) -> bool {
    e.as_api_error().map_or(false, |e| {
        e.status_code == 401 && e.code.as_deref() == Some(INVALID_ACCESS_TOKEN_CODE)
    })
}
