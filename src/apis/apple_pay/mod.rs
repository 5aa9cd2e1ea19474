//! Apple Pay merchant registration of a business.

mod api;
mod model;

pub use api::ApplePayApi;
pub use model::*;
