//! APIs related to business reports, served by the Poynt web application.

mod api;
mod model;

pub use api::ReportsApi;
pub use model::*;
