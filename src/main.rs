//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use mineplex_stats::{
    cli::{Commands, MineplexCli},
    commands::{
        endpoint::handle_endpoint,
        leaderboard::{handle_leaderboard, handle_wins},
        list::handle_list,
    },
    logging::init_logging,
    MineplexClient,
};

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = MineplexCli::parse();
    init_logging(app.verbose);

    let client = MineplexClient::from_env().context("failed to build HTTP client")?;

    match app.command {
        Commands::Leaderboard { stat, args } => handle_leaderboard(&client, stat, args)
            .await
            .context("leaderboard request failed")?,

        Commands::Wins { args } => handle_wins(&client, args)
            .await
            .context("wins leaderboard request failed")?,

        Commands::Endpoint {
            kind,
            method,
            options,
            url_only,
        } => handle_endpoint(&client, &kind, &method, options, url_only)
            .await
            .with_context(|| format!("endpoint {kind}.{method} failed"))?,

        Commands::List { what } => handle_list(what, client.catalog()),
    }

    Ok(())
}
