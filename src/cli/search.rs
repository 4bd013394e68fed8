//! Search command implementation

use colored::Colorize;
use log::{debug, warn};

use crate::cli::OutputFormat;
use crate::cli::args::{GlobalOptions, SearchFilterArgs};
use crate::cli::context::CommandContext;
use crate::client::{
    Credentials, MAX_ITEMS_CEILING, SearchApi, SearchFilters, SearchSummary,
    listings_from_response,
};
use crate::error::{Error, Result};
use crate::listings::{ListingTable, flatten_listings};
use crate::output::json::{JsonOutput, format_json};
use crate::output::table::{NO_RESULTS, format_listing_table};
use crate::output::{self, Formattable};

/// One page of search results, flattened
#[derive(Debug)]
pub struct SearchResults {
    /// `None` when the search matched nothing
    pub table: Option<ListingTable>,
    pub page: SearchSummary,
}

impl SearchResults {
    /// Footer line describing how much of the result set is shown.
    pub fn summary_line(&self) -> String {
        let shown = self.table.as_ref().map_or(0, ListingTable::len);
        let mut line = match self.page.total {
            Some(total) => format!("Showing {} of {} listings", shown, total),
            None => format!("Showing {} listings", shown),
        };
        if let (Some(page), Some(pages)) = (self.page.actual_page, self.page.total_pages) {
            line.push_str(&format!(" (page {} of {})", page, pages));
        }
        line
    }
}

impl Formattable for SearchResults {
    fn format(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Table => {
                let body = match &self.table {
                    Some(table) => format_listing_table(table),
                    None => NO_RESULTS.to_string(),
                };
                Ok(format!("{}\n{}", body, self.summary_line().dimmed()))
            }
            OutputFormat::Json => {
                let rows = self
                    .table
                    .as_ref()
                    .map(|t| t.rows().to_vec())
                    .unwrap_or_default();
                let output = JsonOutput::new(rows).with_page(self.page.clone());
                Ok(format_json(&output)?)
            }
        }
    }
}

/// Run the search command
pub fn run(opts: &GlobalOptions, filter_args: &SearchFilterArgs, columns: &[String]) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let credentials = ctx.credentials()?;
    let filters = ctx.filters(filter_args);
    let columns = ctx.columns(columns);

    let results = search(&ctx.client, &credentials, &filters, columns)?;
    output::print(&results, ctx.format)
}

/// Authenticate, run one search and flatten the listings it returns.
///
/// An empty `elementList` is reported as a result with no table rather than
/// as [`Error::EmptyBatch`].
pub fn search<A: SearchApi>(
    api: &A,
    credentials: &Credentials,
    filters: &SearchFilters,
    columns: &[String],
) -> Result<SearchResults> {
    warn_on_page_size(filters);

    let token = api.acquire_token(credentials)?;
    let url = api.search_url(filters);
    let response = api.execute_search(&token, &url)?;

    let page = SearchSummary::from_response(&response);
    let listings = listings_from_response(&response)?;
    debug!("Search returned {} listings", listings.len());

    let table = match flatten_listings(&listings) {
        Ok(table) => Some(table.select_columns(columns)),
        Err(Error::EmptyBatch) => None,
        Err(err) => return Err(err),
    };

    Ok(SearchResults { table, page })
}

fn warn_on_page_size(filters: &SearchFilters) {
    let requested = filters.get("maxItems").and_then(|v| v.parse::<u32>().ok());
    if let Some(requested) = requested.filter(|n| *n > MAX_ITEMS_CEILING) {
        warn!(
            "maxItems={} exceeds the provider's page size of {}",
            requested, MAX_ITEMS_CEILING
        );
    }
}
