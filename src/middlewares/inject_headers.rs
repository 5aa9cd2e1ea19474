use crate::common::{API_VERSION, API_VERSION_HEADER};
use async_trait::async_trait;
use reqwest::{
    header::{HeaderValue, USER_AGENT},
    Request, Response,
};
use reqwest_middleware::{Middleware, Next};
use task_local_extensions::Extensions;

pub(crate) static SDK_USER_AGENT: &str = "rust-sdk";

/// Middleware injecting the `User-Agent` and `Api-Version` headers to all outgoing requests.
///
/// Both headers overwrite any value set by the caller.
pub struct InjectClientHeadersMiddleware {
    user_agent: HeaderValue,
    api_version: HeaderValue,
}

impl InjectClientHeadersMiddleware {
    pub fn new(application_id: &str) -> Self {
        let user_agent = if application_id.is_empty() {
            HeaderValue::from_static(SDK_USER_AGENT)
        } else {
            HeaderValue::from_str(&format!("{}-{}", SDK_USER_AGENT, application_id))
                .unwrap_or_else(|_| HeaderValue::from_static(SDK_USER_AGENT))
        };

        Self {
            user_agent,
            api_version: HeaderValue::from_static(API_VERSION),
        }
    }
}

#[async_trait]
impl Middleware for InjectClientHeadersMiddleware {
    async fn handle(
        &self,
        mut req: Request,
        extensions: &mut Extensions,
        next: Next<'_>,
    ) -> reqwest_middleware::Result<Response> {
        let headers = req.headers_mut();
        headers.insert(USER_AGENT, self.user_agent.clone());
        headers.insert(API_VERSION_HEADER, self.api_version.clone());

        next.run(req, extensions).await
    }
}
