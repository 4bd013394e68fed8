//! Mock search client for testing
//!
//! Provides an in-memory [`SearchApi`] so the command pipeline can be
//! exercised without a network.

use std::sync::Mutex;

use reqwest::Url;
use serde_json::{Value, json};

use super::{
    BearerToken, Credentials, SEARCH_BASE_URL, SearchApi, SearchFilters, build_search_url_with_base,
};
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// # Example
/// ```ignore
/// let mock = MockSearchClient::new()
///     .with_response(json!({"elementList": [{"address": "A"}]}));
/// ```
pub struct MockSearchClient {
    /// Endpoint that search URLs are built against
    base: Url,
    /// Token to hand out; `None` makes authentication fail
    token: Option<BearerToken>,
    /// Body returned by `execute_search`
    response: Value,
    /// Reject every search as if the token had expired
    expired: bool,
    /// URLs passed to `execute_search`, in call order
    searched: Mutex<Vec<String>>,
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self {
            base: Url::parse(SEARCH_BASE_URL).unwrap(),
            token: Some(BearerToken::new("mock-token")),
            response: json!({ "elementList": [] }),
            expired: false,
            searched: Mutex::new(Vec::new()),
        }
    }

    pub fn with_response(mut self, response: Value) -> Self {
        self.response = response;
        self
    }

    pub fn rejecting_credentials(mut self) -> Self {
        self.token = None;
        self
    }

    pub fn with_expired_token(mut self) -> Self {
        self.expired = true;
        self
    }

    pub fn searched_urls(&self) -> Vec<String> {
        self.searched.lock().map(|urls| urls.clone()).unwrap_or_default()
    }
}

impl SearchApi for MockSearchClient {
    fn acquire_token(&self, _credentials: &Credentials) -> Result<BearerToken> {
        self.token
            .clone()
            .ok_or_else(|| ApiError::Auth("token endpoint returned HTTP 401 Unauthorized".to_string()).into())
    }

    fn search_url(&self, filters: &SearchFilters) -> String {
        build_search_url_with_base(&self.base, filters)
    }

    fn execute_search(&self, _token: &BearerToken, url: &str) -> Result<Value> {
        if let Ok(mut urls) = self.searched.lock() {
            urls.push(url.to_string());
        }
        if self.expired {
            return Err(ApiError::AuthExpired.into());
        }
        Ok(self.response.clone())
    }
}
