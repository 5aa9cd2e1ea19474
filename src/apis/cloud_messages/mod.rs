//! APIs to send messages from the cloud to applications running on Poynt terminals.

mod api;
mod model;

pub use api::CloudMessagesApi;
pub use model::*;
