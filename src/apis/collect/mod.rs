//! Poynt Collect: exchange of card nonces for reusable payment tokens.

mod api;

pub use api::CollectApi;
