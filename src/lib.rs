//! casafind - search a real-estate listings API and flatten the results
//!
//! The flow is three blocking steps:
//!
//! 1. [`SearchApi::acquire_token`](client::SearchApi::acquire_token) exchanges
//!    an API key and secret for a bearer token.
//! 2. [`build_search_url`](client::build_search_url) turns filters into a
//!    query URL and [`SearchApi::execute_search`](client::SearchApi::execute_search)
//!    runs it.
//! 3. [`flatten_listings`](listings::flatten_listings) reduces the returned
//!    `elementList` to the fields every listing shares.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod listings;
pub mod output;

pub use error::{ApiError, ConfigError, Error, Result};
