//! APIs and models related to payment transactions.

mod api;
mod model;

pub use api::TransactionsApi;
pub use model::*;
