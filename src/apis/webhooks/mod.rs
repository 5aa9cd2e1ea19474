//! APIs and models related to webhook subscriptions.

mod api;
mod model;

pub use api::WebhooksApi;
pub use model::*;
