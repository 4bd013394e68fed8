//! Table output formatting

use tabled::{
    Table,
    builder::Builder,
    settings::{Alignment, Modify, Style, object::Rows},
};

use crate::listings::ListingTable;

/// Message shown instead of an empty table
pub const NO_RESULTS: &str = "No listings matched the filters.";

/// Format a listing table with one column per common field
pub fn format_listing_table(listings: &ListingTable) -> String {
    if listings.is_empty() {
        return NO_RESULTS.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(listings.columns().iter().cloned());
    for row in listings.text_rows() {
        builder.push_record(row);
    }

    style(builder.build())
}

fn style(mut table: Table) -> String {
    table
        .with(Style::rounded())
        .with(Modify::new(Rows::first()).with(Alignment::center()));

    table.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listings::flatten_listings;
    use serde_json::json;

    fn table_of(values: Vec<serde_json::Value>) -> ListingTable {
        let listings: Vec<_> = values
            .into_iter()
            .map(|v| v.as_object().cloned().unwrap())
            .collect();
        flatten_listings(&listings).unwrap()
    }

    #[test]
    fn test_format_single_row() {
        let table = table_of(vec![json!({"address": "Calle Mayor 1", "price": 1500})]);

        let result = format_listing_table(&table);

        assert!(result.contains("address"));
        assert!(result.contains("price"));
        assert!(result.contains("Calle Mayor 1"));
        assert!(result.contains("1500"));
    }

    #[test]
    fn test_format_drops_uncommon_columns() {
        let table = table_of(vec![
            json!({"address": "A", "bathrooms": 1}),
            json!({"address": "B", "bathrooms": 2, "floor": "3"}),
        ]);

        let result = format_listing_table(&table);

        assert!(result.contains("bathrooms"));
        assert!(!result.contains("floor"));
    }

    #[test]
    fn test_format_nested_value_as_json() {
        let table = table_of(vec![json!({"detailedType": {"typology": "flat"}})]);
        let result = format_listing_table(&table);
        assert!(result.contains(r#"{"typology":"flat"}"#));
    }

    #[test]
    fn test_format_uses_rounded_style() {
        let table = table_of(vec![json!({"address": "A"})]);

        let result = format_listing_table(&table);

        // Rounded style uses ╭ for top-left corner
        assert!(result.contains("╭"));
        assert!(result.contains("╰"));
    }
}
