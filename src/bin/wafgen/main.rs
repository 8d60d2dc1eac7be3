//! Wafgen CLI - Conan dependency and toolchain generator for waf

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Parse CLI
    let cli = Cli::parse();

    // Set up logging
    let filter = if cli.verbose {
        EnvFilter::new("wafgen=debug")
    } else {
        EnvFilter::new("wafgen=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .init();

    // Execute command
    match cli.command {
        Commands::Generate(args) => commands::generate::execute(args),
        Commands::Deps(args) => commands::deps::execute(args),
        Commands::Toolchain(args) => commands::toolchain::execute(args),
    }
}
