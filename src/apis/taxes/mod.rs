//! APIs related to taxes.

mod api;

pub use api::TaxesApi;
