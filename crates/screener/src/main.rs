mod cli;
mod commands;

use clap::Parser;
use cli::{Cli, Commands};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing; stdout carries the report, so logs go to stderr
    let default_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .init();

    match cli.command {
        Commands::Screen(args) => commands::screen::run(&args),
        Commands::Rank(args) => commands::rank::run(&args),
        Commands::Skills { config } => commands::skills::run(config.as_deref()),
        Commands::Version => commands::version::run(),
    }
}
