//! HTTP implementation of [`SearchApi`]

use std::time::Duration;

use log::debug;
use reqwest::blocking::Client as HttpClient;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{StatusCode, Url};
use serde_json::Value;

use super::{
    BearerToken, Credentials, DEFAULT_API_HOST, SEARCH_PATH, SearchApi, SearchFilters, TOKEN_PATH,
    build_search_url_with_base,
};
use crate::error::{ApiError, ConfigError, Error, Result, describe_transport};

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const TOKEN_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";
const TOKEN_REQUEST_BODY: &str = "grant_type=client_credentials&scope=read";

/// Blocking client for the listings search API
pub struct SearchClient {
    http: HttpClient,
    token_url: Url,
    search_url: Url,
}

impl SearchClient {
    /// Create a client against the default API host
    pub fn new() -> Result<Self> {
        Self::with_host(None, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a client against a custom API host (e.g. a local stub server)
    pub fn with_host(host: Option<&str>, timeout: Duration) -> Result<Self> {
        let host = host.unwrap_or(DEFAULT_API_HOST).trim_end_matches('/');

        let endpoint = |path: &str| {
            Url::parse(&format!("{}{}", host, path))
                .map_err(|e| ConfigError::Invalid(format!("API host '{}': {}", host, e)))
        };
        let token_url = endpoint(TOKEN_PATH)?;
        let search_url = endpoint(SEARCH_PATH)?;

        let http = HttpClient::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::Other(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            http,
            token_url,
            search_url,
        })
    }

    pub fn token_url(&self) -> &Url {
        &self.token_url
    }
}

impl SearchApi for SearchClient {
    fn acquire_token(&self, credentials: &Credentials) -> Result<BearerToken> {
        debug!("Requesting bearer token from {}", self.token_url);

        let response = self
            .http
            .post(self.token_url.clone())
            .header(AUTHORIZATION, credentials.basic_auth_header())
            .header(CONTENT_TYPE, TOKEN_CONTENT_TYPE)
            .body(TOKEN_REQUEST_BODY)
            .send()
            .map_err(|e| ApiError::Auth(describe_transport(&e)))?;

        let status = response.status();
        debug!("Token endpoint responded {}", status);

        let body = response
            .text()
            .map_err(|e| ApiError::Auth(format!("failed to read token response: {}", e)))?;

        if !status.is_success() {
            return Err(ApiError::Auth(format!("token endpoint returned HTTP {}", status)).into());
        }

        let json: Value = serde_json::from_str(&body)
            .map_err(|e| ApiError::Auth(format!("token response is not valid JSON: {}", e)))?;

        if !json.get("access_token").is_some_and(Value::is_string) {
            return Err(ApiError::Auth("token response has no access_token".to_string()).into());
        }

        let token: BearerToken = serde_json::from_value(json)
            .map_err(|e| ApiError::Auth(format!("failed to parse token response: {}", e)))?;

        Ok(token)
    }

    fn search_url(&self, filters: &SearchFilters) -> String {
        build_search_url_with_base(&self.search_url, filters)
    }

    fn execute_search(&self, token: &BearerToken, url: &str) -> Result<Value> {
        debug!("POST {}", url);

        let response = self
            .http
            .post(url)
            .header(AUTHORIZATION, token.bearer_header())
            .send()
            .map_err(|e| ApiError::Search(describe_transport(&e)))?;

        let status = response.status();
        debug!("Search endpoint responded {}", status);

        match status {
            StatusCode::UNAUTHORIZED => Err(ApiError::AuthExpired.into()),
            StatusCode::TOO_MANY_REQUESTS => Err(ApiError::Search(
                "rate limit exceeded (HTTP 429); wait for the quota to reset".to_string(),
            )
            .into()),
            status if status.is_success() => {
                let body = response
                    .text()
                    .map_err(|e| ApiError::Search(format!("failed to read response: {}", e)))?;
                let json = serde_json::from_str(&body).map_err(|e| {
                    ApiError::Search(format!("response is not valid JSON: {}", e))
                })?;
                Ok(json)
            }
            status => {
                let body = response.text().unwrap_or_default();
                Err(ApiError::Search(format!("HTTP {}: {}", status, body.trim())).into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        assert!(SearchClient::new().is_ok());
    }

    #[test]
    fn test_default_endpoints() {
        let client = SearchClient::new().unwrap();
        assert_eq!(client.token_url().as_str(), "https://api.idealista.com/oauth/token");
        assert_eq!(
            client.search_url(&SearchFilters::new()),
            super::super::SEARCH_BASE_URL
        );
    }

    #[test]
    fn test_custom_host_strips_trailing_slash() {
        let client =
            SearchClient::with_host(Some("http://127.0.0.1:8080/"), Duration::from_secs(5)).unwrap();

        assert_eq!(client.token_url().as_str(), "http://127.0.0.1:8080/oauth/token");
        assert_eq!(
            client.search_url(&SearchFilters::new().country("es")),
            "http://127.0.0.1:8080/3.5/es/search?country=es"
        );
    }

    #[test]
    fn test_invalid_host_rejected() {
        let result = SearchClient::with_host(Some("not a host"), Duration::from_secs(5));
        assert!(result.is_err());
    }
}
