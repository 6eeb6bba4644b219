use clap::Parser;
use depcat::cli::{Cli, Commands};
use depcat::cli_handlers;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Order { root, json } => cli_handlers::handle_order(&root, json),
        Commands::Cat { root } => cli_handlers::handle_cat(&root),
        Commands::Deps { root, json } => cli_handlers::handle_deps(&root, json),
        Commands::Check { root } => cli_handlers::handle_check(&root),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
