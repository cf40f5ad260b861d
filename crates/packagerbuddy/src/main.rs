//! PackagerBuddy CLI - JSON config based software packager
//!
//! This is the main entry point for the packagerbuddy command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize rustls crypto provider (required for rustls 0.23+)
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    let settings = cli.settings()?;

    match cli.command {
        Commands::Setup => commands::setup::run(&settings),
        Commands::Avail => commands::avail::run(&settings),
        Commands::Add(args) => commands::add::run(args, &settings),
        Commands::Remove(args) => commands::remove::run(args, &settings),
        Commands::Download(args) => commands::download::run(args, &settings, cli.quiet).await,
        Commands::Install(args) => commands::install::run(args, &settings, cli.quiet).await,
        Commands::List(args) => commands::list::run(args, &settings),
        Commands::Uninstall(args) => commands::uninstall::run(args, &settings),
    }
}

/// Initialize tracing with appropriate verbosity
///
/// Results go to stdout as plain text, so logging stays at `warn` unless
/// asked for more.
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("warn"),
            1 => EnvFilter::new("info"),
            2 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
