//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use crate::cli::context::CommandContext;
use crate::client::DEFAULT_API_HOST;
use crate::config::Config;
use crate::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "casafind Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not found)".dimmed()
        );
    }

    let config = if config_path.exists() {
        CommandContext::resolve_config(opts)?
    } else {
        CommandContext::apply_overrides(Config::default(), opts)
    };
    println!();

    // Never print the credential values themselves
    if config.api_key.as_deref().is_some_and(|k| !k.is_empty()) {
        println!("{} API key configured", "✓".green());
    } else {
        println!("{} API key not configured", "✗".red());
        println!("  → Pass --api-key or set CASAFIND_API_KEY");
    }

    if config.secret.as_deref().is_some_and(|s| !s.is_empty()) {
        println!("{} API secret configured", "✓".green());
    } else {
        println!("{} API secret not configured", "✗".red());
        println!("  → Pass --secret or set CASAFIND_SECRET");
    }

    match config.api_host {
        Some(ref host) => println!("{} Custom API host: {}", "○".dimmed(), host.cyan()),
        None => println!("{} API host: {}", "○".dimmed(), DEFAULT_API_HOST),
    }

    if config.filters.is_empty() {
        println!("{} No default filters", "○".dimmed());
    } else {
        println!("{} Default filters:", "✓".green());
        for (key, value) in config.filters.iter() {
            println!("    {}={}", key, value);
        }
    }

    println!();
    Ok(())
}
