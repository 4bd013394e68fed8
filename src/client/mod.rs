//! Listings search API client

use serde_json::Value;

use crate::error::Result;

#[cfg(test)]
pub mod mock;
pub mod models;
pub mod query;
pub mod search;

#[cfg(test)]
pub use mock::MockSearchClient;
pub use models::{BearerToken, Credentials, RawListing, SearchSummary, listings_from_response};
pub use query::{MAX_ITEMS_CEILING, SearchFilters, build_search_url, build_search_url_with_base};
pub use search::SearchClient;

/// Default API host
pub const DEFAULT_API_HOST: &str = "https://api.idealista.com";

/// OAuth2 token endpoint, relative to the API host
pub const TOKEN_PATH: &str = "/oauth/token";

/// Search endpoint, relative to the API host
pub const SEARCH_PATH: &str = "/3.5/es/search";

/// Fully-qualified default search endpoint
pub const SEARCH_BASE_URL: &str = "https://api.idealista.com/3.5/es/search";

/// The two calls a search needs.
///
/// Each call is a single blocking round trip with no retry.
pub trait SearchApi {
    /// Exchange an API key and secret for a bearer token.
    fn acquire_token(&self, credentials: &Credentials) -> Result<BearerToken>;

    /// Build the search URL for `filters` against this client's endpoint.
    fn search_url(&self, filters: &SearchFilters) -> String;

    /// Run a search and return the raw JSON body.
    fn execute_search(&self, token: &BearerToken, url: &str) -> Result<Value>;
}
