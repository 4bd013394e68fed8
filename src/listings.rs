//! Flattening heterogeneous listings into a uniform table
//!
//! Listings in one batch do not share a fixed schema: optional fields are
//! simply absent. [`flatten_listings`] keeps only the fields present in
//! every listing, so each row has the same columns. Fields missing from any
//! single listing are dropped for the whole batch; nothing is padded with
//! nulls.

use std::collections::HashSet;

use log::{debug, warn};
use serde::Serialize;
use serde_json::Value;

use crate::client::RawListing;
use crate::error::{Error, Result};

/// Rectangular view over a batch of listings.
///
/// Every row holds exactly the keys in `columns`. Nested values (such as
/// `detailedType`) are kept as-is in their cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListingTable {
    columns: Vec<String>,
    rows: Vec<RawListing>,
}

impl ListingTable {
    /// Column names, in the key order of the first listing.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[RawListing] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Narrow the table to `wanted`, in that order.
    ///
    /// Names that are not columns of this table are skipped with a warning.
    /// An empty `wanted` leaves the table unchanged.
    pub fn select_columns(self, wanted: &[String]) -> Self {
        if wanted.is_empty() {
            return self;
        }

        let mut columns = Vec::with_capacity(wanted.len());
        for name in wanted {
            if !self.columns.contains(name) {
                warn!("Column '{}' is not present in every listing; skipping", name);
            } else if !columns.contains(name) {
                columns.push(name.clone());
            }
        }

        let rows = self
            .rows
            .into_iter()
            .map(|row| project(row, &columns))
            .collect();

        Self { columns, rows }
    }

    /// Display text for one cell.
    ///
    /// Strings are shown unquoted, `null` as empty, and nested arrays or
    /// objects as compact JSON.
    pub fn cell_text(value: &Value) -> String {
        match value {
            Value::Null => String::new(),
            Value::String(s) => s.clone(),
            other => other.to_string(),
        }
    }

    /// Rows rendered as display text, one `Vec` per row in column order.
    pub fn text_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|col| row.get(col).map(Self::cell_text).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Flatten `listings` onto the fields common to all of them.
///
/// Fails with [`Error::EmptyBatch`] when `listings` is empty.
pub fn flatten_listings(listings: &[RawListing]) -> Result<ListingTable> {
    let (first, rest) = listings.split_first().ok_or(Error::EmptyBatch)?;

    let mut common: HashSet<&str> = first.keys().map(String::as_str).collect();
    for listing in rest {
        common.retain(|key| listing.contains_key(*key));
    }

    let columns: Vec<String> = first
        .keys()
        .filter(|key| common.contains(key.as_str()))
        .cloned()
        .collect();

    debug!(
        "Flattened {} listings onto {} common columns",
        listings.len(),
        columns.len()
    );

    let rows = listings
        .iter()
        .map(|listing| project(listing.clone(), &columns))
        .collect();

    Ok(ListingTable { columns, rows })
}

fn project(mut row: RawListing, columns: &[String]) -> RawListing {
    row.retain(|key, _| columns.contains(key));
    row
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn listing(value: Value) -> RawListing {
        value.as_object().cloned().unwrap()
    }

    fn column_set(table: &ListingTable) -> HashSet<String> {
        table.columns().iter().cloned().collect()
    }

    fn names(names: &[&str]) -> HashSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_batch_is_an_error() {
        let result = flatten_listings(&[]);
        assert!(matches!(result, Err(Error::EmptyBatch)));
    }

    #[test]
    fn test_single_listing_keeps_all_keys() {
        let table = flatten_listings(&[listing(json!({
            "address": "Calle Mayor 1",
            "price": 1500.0,
            "detailedType": {"typology": "flat", "subTypology": "studio"}
        }))])
        .unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(
            column_set(&table),
            names(&["address", "price", "detailedType"])
        );
    }

    #[test]
    fn test_identical_key_sets() {
        let listings = vec![
            listing(json!({"address": "A", "rooms": 2})),
            listing(json!({"address": "B", "rooms": 3})),
            listing(json!({"address": "C", "rooms": 1})),
        ];

        let table = flatten_listings(&listings).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(column_set(&table), names(&["address", "rooms"]));
    }

    #[test]
    fn test_intersection_not_union() {
        let listings = vec![
            listing(json!({"address": "A", "bathrooms": 1})),
            listing(json!({"address": "B", "bathrooms": 2, "rooms": 3})),
        ];

        let table = flatten_listings(&listings).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(column_set(&table), names(&["address", "bathrooms"]));
        assert!(table.rows().iter().all(|row| !row.contains_key("rooms")));
    }

    #[test]
    fn test_field_missing_from_last_listing_is_dropped_everywhere() {
        let listings = vec![
            listing(json!({"propertyCode": "1", "floor": "3", "price": 900})),
            listing(json!({"propertyCode": "2", "floor": "bj", "price": 950})),
            listing(json!({"propertyCode": "3", "price": 1000})),
        ];

        let table = flatten_listings(&listings).unwrap();

        assert_eq!(column_set(&table), names(&["propertyCode", "price"]));
        assert_eq!(table.rows()[0].len(), 2);
    }

    #[test]
    fn test_disjoint_key_sets_yield_no_columns() {
        let listings = vec![listing(json!({"a": 1})), listing(json!({"b": 2}))];

        let table = flatten_listings(&listings).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.columns().is_empty());
        assert!(table.rows().iter().all(|row| row.is_empty()));
    }

    #[test]
    fn test_rows_keep_input_order_and_nested_values() {
        let listings = vec![
            listing(json!({"propertyCode": "first", "detailedType": {"typology": "flat"}})),
            listing(json!({"propertyCode": "second", "detailedType": {"typology": "chalet"}})),
        ];

        let table = flatten_listings(&listings).unwrap();

        assert_eq!(table.rows()[0]["propertyCode"], json!("first"));
        assert_eq!(table.rows()[1]["propertyCode"], json!("second"));
        assert_eq!(table.rows()[1]["detailedType"], json!({"typology": "chalet"}));
    }

    #[test]
    fn test_select_columns() {
        let listings = vec![
            listing(json!({"address": "A", "price": 1, "rooms": 2})),
            listing(json!({"address": "B", "price": 3, "rooms": 4})),
        ];
        let table = flatten_listings(&listings).unwrap();

        let narrowed = table.select_columns(&[
            "price".to_string(),
            "missing".to_string(),
            "address".to_string(),
            "price".to_string(),
        ]);

        assert_eq!(narrowed.columns(), ["price", "address"]);
        assert_eq!(narrowed.rows()[1].len(), 2);
        assert_eq!(narrowed.text_rows()[1], vec!["3", "B"]);
    }

    #[test]
    fn test_select_no_columns_is_identity() {
        let table = flatten_listings(&[listing(json!({"a": 1}))]).unwrap();
        let same = table.clone().select_columns(&[]);
        assert_eq!(same, table);
    }

    #[test]
    fn test_cell_text() {
        assert_eq!(ListingTable::cell_text(&json!("Calle Mayor")), "Calle Mayor");
        assert_eq!(ListingTable::cell_text(&json!(null)), "");
        assert_eq!(ListingTable::cell_text(&json!(2)), "2");
        assert_eq!(ListingTable::cell_text(&json!(true)), "true");
        assert_eq!(
            ListingTable::cell_text(&json!({"typology": "flat"})),
            r#"{"typology":"flat"}"#
        );
    }
}
