//! Url command implementation

use crate::cli::args::{GlobalOptions, SearchFilterArgs};
use crate::cli::context::CommandContext;
use crate::client::SearchApi;
use crate::error::Result;

/// Print the search URL the given filters produce. No network calls are made.
pub fn run(opts: &GlobalOptions, filter_args: &SearchFilterArgs) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let filters = ctx.filters(filter_args);

    println!("{}", ctx.client.search_url(&filters));
    Ok(())
}
