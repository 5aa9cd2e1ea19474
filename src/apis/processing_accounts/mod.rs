//! Processing accounts of GoDaddy merchants, served by the Poynt web application.

mod api;
mod model;

pub use api::ProcessingAccountsApi;
pub use model::*;
