//! APIs related to catalogs and their categories.

mod api;

pub use api::CatalogsApi;
