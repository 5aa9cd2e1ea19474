//! Payment facilitator application of an existing business, served by the Poynt web application.

mod api;

pub use api::BusinessApplicationsApi;
