//! Search filter arguments
//!
//! Named flags cover the common filters; anything else the provider accepts
//! can be passed with `--filter KEY=VALUE`. Values are forwarded as-is.

use clap::Args;

use crate::client::SearchFilters;
use crate::error::ConfigError;

/// Filter arguments shared by `search` and `url`.
#[derive(Args, Debug, Default, Clone)]
pub struct SearchFilterArgs {
    /// Country code (es, it, pt)
    #[arg(long)]
    pub country: Option<String>,

    /// Locale for the listing texts
    #[arg(long)]
    pub locale: Option<String>,

    /// Language of the response
    #[arg(long)]
    pub language: Option<String>,

    /// Operation (sale, rent)
    #[arg(long, short = 'o')]
    pub operation: Option<String>,

    /// Property type (homes, offices, premises, garages, bedrooms)
    #[arg(long, short = 't')]
    pub property_type: Option<String>,

    /// Maximum price
    #[arg(long)]
    pub max_price: Option<String>,

    /// Minimum price
    #[arg(long)]
    pub min_price: Option<String>,

    /// Sort order (asc, desc)
    #[arg(long)]
    pub sort: Option<String>,

    /// Only listings published since (W, M, T, Y)
    #[arg(long)]
    pub since_date: Option<String>,

    /// Search centre as LAT,LON
    #[arg(long, allow_hyphen_values = true)]
    pub center: Option<String>,

    /// Radius around the centre, in metres
    #[arg(long)]
    pub distance: Option<String>,

    /// Listings per page (the provider caps this at 50)
    #[arg(long, short = 'n')]
    pub max_items: Option<String>,

    /// Extra filter as KEY=VALUE (repeatable)
    #[arg(long = "filter", short = 'f', value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub extra: Vec<(String, String)>,
}

impl SearchFilterArgs {
    /// Convert to search filters. `--filter` entries win over named flags.
    pub fn to_filters(&self) -> SearchFilters {
        let named = [
            ("country", &self.country),
            ("locale", &self.locale),
            ("language", &self.language),
            ("operation", &self.operation),
            ("propertyType", &self.property_type),
            ("maxPrice", &self.max_price),
            ("minPrice", &self.min_price),
            ("sort", &self.sort),
            ("sinceDate", &self.since_date),
            ("center", &self.center),
            ("distance", &self.distance),
            ("maxItems", &self.max_items),
        ];

        let mut filters = SearchFilters::new();
        for (key, value) in named {
            if let Some(value) = value {
                filters.insert(key, value);
            }
        }
        for (key, value) in &self.extra {
            filters.insert(key.as_str(), value);
        }
        filters
    }
}

/// Parse a `KEY=VALUE` filter. The value may be empty; the key may not.
pub fn parse_filter(raw: &str) -> Result<(String, String), String> {
    match raw.split_once('=') {
        Some((key, value)) if !key.trim().is_empty() => {
            Ok((key.trim().to_string(), value.to_string()))
        }
        _ => Err(ConfigError::InvalidFilter(raw.to_string()).to_string()),
    }
}
