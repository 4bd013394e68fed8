//! Token command implementation

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::client::SearchApi;
use crate::error::Result;
use crate::output::json::{JsonOutput, format_json};

#[derive(Debug, Serialize)]
struct TokenDisplay<'a> {
    access_token: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    expires_in: Option<u64>,
}

/// Acquire a bearer token and print it, confirming the credentials work
pub fn run(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts)?;
    let credentials = ctx.credentials()?;

    let token = ctx.client.acquire_token(&credentials)?;

    match ctx.format {
        OutputFormat::Table => println!("{}", token.as_str()),
        OutputFormat::Json => {
            let display = TokenDisplay {
                access_token: token.as_str(),
                expires_in: token.expires_in(),
            };
            println!("{}", format_json(&JsonOutput::new(display))?);
        }
    }

    Ok(())
}
