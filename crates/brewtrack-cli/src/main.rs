mod cli;
mod commands;
mod render;

use std::time::Duration;

use anyhow::Result;
use brewtrack_config::Config;
use brewtrack_engine::Tracker;
use brewtrack_fetch::CatalogClient;
use brewtrack_store::SnapshotStore;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = cli::Cli::parse();

    match args.command {
        // Completions need neither config nor network.
        cli::Commands::Completions { shell } => {
            commands::completions::handle(shell);
            Ok(())
        }
        command => {
            let config = Config::load()?;
            let data_dir = args
                .data_dir
                .or(config.data_dir.clone())
                .unwrap_or_else(SnapshotStore::default_dir);
            let tracker = Tracker::new(SnapshotStore::open(data_dir)?);
            let client = CatalogClient::new(
                config.api.base_url.clone(),
                &config.api.user_agent,
                Duration::from_secs(config.api.timeout_secs),
            )?;

            match command {
                cli::Commands::List { limit } => commands::list::handle(&client, limit).await,
                cli::Commands::Update => commands::update::handle(&client, &tracker).await,
                cli::Commands::Diff => commands::diff::handle(&client, &tracker).await,
                cli::Commands::New { limit } => {
                    commands::new::handle(&client, &tracker, limit).await
                }
                cli::Commands::Info { name } => commands::info::handle(&client, &name).await,
                cli::Commands::Completions { .. } => unreachable!(),
            }
        }
    }
}
