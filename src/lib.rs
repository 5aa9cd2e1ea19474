//! Rust client for the [Poynt](https://poynt.com) REST APIs.
//!
//! Check out also the official Poynt [API documentation](https://docs.poynt.com).
//!
//! # Usage
//!
//! ## Prerequisites
//!
//! Create an application on the [Poynt developer portal](https://poynt.net) and download
//! its RSA key pair. The application id (`urn:aid:...`) and the PEM encoded private key
//! are all the client needs: access tokens are obtained by signing a JWT with that key,
//! cached and refreshed transparently.
//!
//! ## Initialize a new `PoyntClient`
//!
//! ```rust,no_run
//! # use poynt_rust::{PoyntClient, client::{Environment, Region}};
//! # let private_key_pem = "";
//! let poynt = PoyntClient::builder("urn:aid:my-application-id", private_key_pem)
//!     .with_environment(Environment::Production)
//!     .with_region(Region::Eu)
//!     .build();
//! ```
//!
//! By default, a `PoyntClient` connects to the US production hosts.
//! Base URLs can be overridden with
//! [`with_api_url`](crate::client::PoyntClientBuilder::with_api_url) and
//! [`with_web_url`](crate::client::PoyntClientBuilder::with_web_url).
//!
//! ## List the orders of a business
//!
//! ```rust,no_run
//! # use poynt_rust::{PoyntClient, Error, apis::orders::*};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let poynt: PoyntClient = unreachable!();
//! #
//! let query = OrdersQueryBuilder::default()
//!     .limit(50u32)
//!     .include_stays_all(true)
//!     .build()
//!     .unwrap();
//! let res = poynt.orders.get_orders("my-business-id", &query).await?;
//!
//! for order in res["orders"].as_array().into_iter().flatten() {
//!     println!("Order {}", order["id"]);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Refund a transaction
//!
//! Operations moving money accept an optional request id. Retrying with the same id
//! never processes the operation twice.
//!
//! ```rust,no_run
//! # use poynt_rust::{PoyntClient, Error, apis::transactions::*};
//! # use uuid::Uuid;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let poynt: PoyntClient = unreachable!();
//! #
//! let refund = RefundRequestBuilder::default()
//!     .amount(250u64)
//!     .request_id(Uuid::new_v4().to_string())
//!     .build()
//!     .unwrap();
//!
//! match poynt
//!     .transactions
//!     .refund_transaction("my-business-id", "my-transaction-id", &refund)
//!     .await
//! {
//!     Ok(refund) => println!("Refunded: {}", refund["id"]),
//!     Err(Error::Rejected { message, resource }) => {
//!         println!("{}: {}", message, resource["status"])
//!     }
//!     Err(e) => return Err(e),
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Update a product
//!
//! Updates are sent as JSON Patch documents. Either pass the operations yourself, or the
//! desired state of the resource and let the client compute the patch.
//!
//! ```rust,no_run
//! # use poynt_rust::{PoyntClient, Error, patch::PatchOptions};
//! # use serde_json::json;
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let poynt: PoyntClient = unreachable!();
//! #
//! let product = poynt
//!     .products
//!     .update_product(
//!         "my-business-id",
//!         "my-product-id",
//!         json!({ "name": "Cold brew", "price": { "amount": 450, "currency": "USD" } }).into(),
//!         &PatchOptions::default(),
//!     )
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Anything else
//!
//! Endpoints without a dedicated client can be reached with
//! [`PoyntClient::request`](crate::client::PoyntClient::request), which still takes care of
//! authentication, standard headers and error normalization.
//!
//! ```rust,no_run
//! # use poynt_rust::{PoyntClient, Error, RequestSpec};
//! #
//! # #[tokio::main]
//! # async fn main() -> Result<(), Error> {
//! # let poynt: PoyntClient = unreachable!();
//! #
//! let terminals = poynt
//!     .request(RequestSpec::get("/businesses/my-business-id/stores/my-store-id/storeDevices"))
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! A small command line tool exercising the client lives in the `cli` directory.

#![deny(missing_debug_implementations)]
#![forbid(unsafe_code)]

pub mod apis;
pub(crate) mod authenticator;
pub mod client;
mod common;
pub mod error;
pub mod http;
mod middlewares;
pub mod pagination;
pub mod patch;
mod request;
pub mod validation;

pub use client::PoyntClient;
pub use error::{ApiError, Error};
pub use http::RequestSpec;
pub use pagination::PageOptions;
pub use patch::{PatchOperation, PatchOptions, ResourceUpdate};
