//! Merchant onboarding applications, served by the Poynt web application.

mod api;
mod model;

pub use api::ApplicationsApi;
pub use model::*;
