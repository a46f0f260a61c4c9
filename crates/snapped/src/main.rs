pub mod cli;
pub mod commands;
pub mod error;

use clap::Parser;
use cli::{Cli, Commands};
use snapped_config::SnappedConfig;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(err) = run(cli).await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> error::Result<()> {
    let config = SnappedConfig::load()?;

    match cli.command {
        Commands::Search(args) => commands::run_search(&config, args).await,
        Commands::Results(args) => commands::run_results(&config, args).await,
        Commands::History => commands::run_history(&config).await,
        Commands::Layout(args) => commands::run_layout(&config, args),
    }
}
