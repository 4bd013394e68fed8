//! casafind CLI

use clap::Parser;

use casafind::cli::{self, Cli, Commands, GlobalOptions};
use casafind::error::Result;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli) {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let level = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Search(args) => cli::search::run(&opts, &args.filters, &args.columns),
        Commands::Url(filters) => cli::url::run(&opts, &filters),
        Commands::Token => cli::token::run(&opts),
        Commands::Status => cli::status::run(&opts),
    }
}
