//! JSON output formatting

use chrono::Utc;
use serde::Serialize;

use crate::client::SearchSummary;

/// Wrapper for JSON output with metadata
#[derive(Debug, Serialize)]
pub struct JsonOutput<T> {
    /// The actual data
    pub data: T,

    /// Pagination metadata reported by the search endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<SearchSummary>,

    /// Metadata about the response
    pub meta: Metadata,
}

/// Metadata included in JSON output
#[derive(Debug, Serialize)]
pub struct Metadata {
    /// Timestamp of the response
    pub timestamp: String,

    /// CLI version
    pub version: String,
}

impl<T> JsonOutput<T> {
    /// Create a new JSON output with metadata
    pub fn new(data: T) -> Self {
        Self {
            data,
            page: None,
            meta: Metadata {
                timestamp: Utc::now().to_rfc3339(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        }
    }

    pub fn with_page(mut self, page: SearchSummary) -> Self {
        self.page = Some(page);
        self
    }
}

/// Format data as pretty-printed JSON
pub fn format_json<T: Serialize>(output: &JsonOutput<T>) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(output)
}
