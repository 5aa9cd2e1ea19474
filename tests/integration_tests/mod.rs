mod auth;
mod businesses;
mod pagination;
mod transactions;
