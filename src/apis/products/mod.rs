//! APIs related to products.

mod api;

pub use api::ProductsApi;
