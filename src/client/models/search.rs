//! Search response models

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{ApiError, Error, Result};

/// One property record from `elementList`. Field presence varies per listing.
pub type RawListing = Map<String, Value>;

/// Pagination metadata that accompanies a page of listings.
///
/// Built by [`SearchSummary::from_response`]; serialized for JSON output.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchSummary {
    pub total: Option<u64>,
    pub actual_page: Option<u64>,
    pub items_per_page: Option<u64>,
    pub total_pages: Option<u64>,
    pub paginable: Option<bool>,

    /// Human-readable description of the applied filters
    pub summary: Vec<String>,
}

impl SearchSummary {
    /// Read the metadata fields from a raw search response.
    ///
    /// Fields with an unexpected type are treated as absent.
    pub fn from_response(response: &Value) -> Self {
        let u64_field = |name: &str| response.get(name).and_then(Value::as_u64);

        Self {
            total: u64_field("total"),
            actual_page: u64_field("actualPage"),
            items_per_page: u64_field("itemsPerPage"),
            total_pages: u64_field("totalPages"),
            paginable: response.get("paginable").and_then(Value::as_bool),
            summary: response
                .get("summary")
                .and_then(Value::as_array)
                .map(|items| {
                    items
                        .iter()
                        .filter_map(|s| s.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
        }
    }
}

/// Extract the `elementList` array of a search response.
pub fn listings_from_response(response: &Value) -> Result<Vec<RawListing>> {
    let elements = response
        .get("elementList")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::Search("response is missing the elementList array".to_string()))?;

    elements
        .iter()
        .enumerate()
        .map(|(idx, element)| {
            element.as_object().cloned().ok_or_else(|| {
                Error::from(ApiError::Search(format!(
                    "elementList[{}] is not a JSON object",
                    idx
                )))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_summary_from_response() {
        let response = json!({
            "total": 245,
            "actualPage": 1,
            "itemsPerPage": 50,
            "totalPages": 5,
            "paginable": true,
            "summary": ["Pisos en alquiler en Madrid"],
            "elementList": []
        });

        let summary = SearchSummary::from_response(&response);

        assert_eq!(summary.total, Some(245));
        assert_eq!(summary.actual_page, Some(1));
        assert_eq!(summary.items_per_page, Some(50));
        assert_eq!(summary.total_pages, Some(5));
        assert_eq!(summary.paginable, Some(true));
        assert_eq!(summary.summary, vec!["Pisos en alquiler en Madrid"]);
    }

    #[test]
    fn test_summary_missing_fields() {
        let summary = SearchSummary::from_response(&json!({"total": "many"}));
        assert_eq!(summary, SearchSummary::default());
    }

    #[test]
    fn test_listings_from_response() {
        let response = json!({
            "elementList": [
                {"propertyCode": "1", "price": 1200.0},
                {"propertyCode": "2", "detailedType": {"typology": "flat"}}
            ]
        });

        let listings = listings_from_response(&response).unwrap();

        assert_eq!(listings.len(), 2);
        assert_eq!(listings[0]["propertyCode"], json!("1"));
        assert_eq!(listings[1]["detailedType"]["typology"], json!("flat"));
    }

    #[test]
    fn test_listings_missing_element_list() {
        let err = listings_from_response(&json!({"total": 0})).unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::Search(_))));
    }

    #[test]
    fn test_listings_non_object_element() {
        let err = listings_from_response(&json!({"elementList": [{"a": 1}, 7]})).unwrap_err();
        assert!(err.to_string().contains("elementList[1]"));
    }
}
