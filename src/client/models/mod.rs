//! Search API data models
//!
//! Credentials and tokens live in [`auth`]; response shapes in [`search`].

mod auth;
mod search;

pub use auth::{BearerToken, Credentials};
pub use search::{RawListing, SearchSummary, listings_from_response};
