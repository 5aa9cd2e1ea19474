//! APIs related to businesses, their users and their stores.

mod api;

pub use api::BusinessesApi;
