//! Leaderboard command implementation

use crate::{
    cli::LeaderboardArgs,
    mineplex::{Board, Game, Leaderboard, LeaderboardQuery, MineplexClient},
    Result,
};

/// Canonical display name for known games and boards, otherwise the input as given.
fn canonical<T>(value: String) -> String
where
    T: std::str::FromStr + std::fmt::Display,
{
    value
        .parse::<T>()
        .map(|known| known.to_string())
        .unwrap_or(value)
}

/// Build the page query from CLI arguments.
pub fn build_query(stat: Option<String>, args: &LeaderboardArgs) -> LeaderboardQuery {
    LeaderboardQuery {
        game: args.game.clone().map(canonical::<Game>),
        stat,
        board: args.board.clone().map(canonical::<Board>),
    }
}

/// One line per entry, in page order.
pub fn format_leaderboard(leaderboard: &Leaderboard) -> String {
    let mut out = format!("{} ({} players)\n", leaderboard.title(), leaderboard.len());
    leaderboard.for_each(|entry| {
        out.push_str(&entry.to_string());
        out.push('\n');
    });
    out
}

/// Handle the leaderboard command
pub async fn handle_leaderboard(
    client: &MineplexClient,
    stat: Option<String>,
    args: LeaderboardArgs,
) -> Result<()> {
    let query = build_query(stat, &args);
    print_result(client.get_leaderboard(&query).await?, args.json)
}

/// Handle the wins command
pub async fn handle_wins(client: &MineplexClient, args: LeaderboardArgs) -> Result<()> {
    let query = build_query(Some("Wins".to_string()), &args);
    print_result(client.get_leaderboard(&query).await?, args.json)
}

fn print_result(leaderboard: Option<Leaderboard>, as_json: bool) -> Result<()> {
    match leaderboard {
        Some(lb) if as_json => println!("{}", serde_json::to_string_pretty(&lb)?),
        Some(lb) => print!("{}", format_leaderboard(&lb)),
        None => println!("No leaderboard found for the given parameters."),
    }
    Ok(())
}
