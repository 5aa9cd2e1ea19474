//! Clients for the various Poynt APIs.

use crate::{authenticator::Authenticator, http::HttpClient};
use std::fmt::{Debug, Formatter};

pub mod applications;
pub mod apple_pay;
pub mod auth;
pub mod business_applications;
pub mod businesses;
pub mod catalogs;
pub mod cloud_messages;
pub mod collect;
pub mod customers;
pub mod invoices;
pub mod orders;
pub mod processing_accounts;
pub mod products;
mod query;
pub mod reports;
pub mod taxes;
pub mod transactions;
pub mod webhooks;

pub use query::{ListQuery, ListQueryBuilder};

/// State shared by all the API clients: the HTTP client and the token cache.
///
/// Authenticated requests, pagination and resource updates are implemented on this type
/// in the `request`, `pagination` and `patch` modules.
pub(crate) struct PoyntClientInner {
    pub(crate) client: HttpClient,
    pub(crate) authenticator: Authenticator,
    pub(crate) application_id: String,
}

impl Debug for PoyntClientInner {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PoyntClientInner")
            .field("application_id", &self.application_id)
            .field("urls", self.client.urls())
            .finish_non_exhaustive()
    }
}
