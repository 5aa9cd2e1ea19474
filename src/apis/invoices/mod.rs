//! APIs related to invoices, served by the Poynt web application.

mod api;
mod defaults;
mod model;

pub use api::InvoicesApi;
pub use model::*;
