//! APIs and models related to orders.

mod api;
mod model;

pub use api::OrdersApi;
pub use model::*;
