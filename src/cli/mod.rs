//! CLI argument definitions and parsing.

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::mineplex::EndpointOptions;
use crate::PLATFORM_ENV_VAR;

/// Arguments shared by the leaderboard commands
#[derive(Debug, Args)]
pub struct LeaderboardArgs {
    /// Game name, e.g. "Survival Games" or survival_games.
    #[clap(long, short)]
    pub game: Option<String>,

    /// Board: All, Yearly, Monthly, Weekly or Daily.
    #[clap(long, short)]
    pub board: Option<String>,

    /// Output results as JSON instead of text lines.
    #[clap(long)]
    pub json: bool,
}

/// Option fields substituted into endpoint paths
#[derive(Debug, Default, Args)]
pub struct EndpointArgs {
    /// Platform: java or bedrock (or set `MINEPLEX_PLATFORM` env var).
    #[clap(long, env = PLATFORM_ENV_VAR)]
    pub platform: Option<String>,

    #[clap(long)]
    pub board: Option<String>,

    #[clap(long)]
    pub category: Option<String>,

    #[clap(long)]
    pub game: Option<String>,

    #[clap(long)]
    pub group: Option<String>,

    #[clap(long)]
    pub player: Option<String>,

    #[clap(long)]
    pub stat: Option<String>,

    #[clap(long)]
    pub uuid: Option<String>,
}

impl From<EndpointArgs> for EndpointOptions {
    fn from(args: EndpointArgs) -> Self {
        EndpointOptions {
            board: args.board,
            category: args.category,
            game: args.game,
            group: args.group,
            platform: args.platform,
            player: args.player,
            stat: args.stat,
            uuid: args.uuid,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ListKind {
    Games,
    Boards,
    Platforms,
    Endpoints,
}

#[derive(Debug, Parser)]
#[clap(name = "mineplex-stats", about = "Mineplex player statistics and leaderboards")]
pub struct MineplexCli {
    /// Log request URLs and scraping details.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scrape the top 50 of a leaderboard from the Mineplex website.
    Leaderboard {
        /// Stat the leaderboard ranks, e.g. Wins or Kills.
        #[clap(long, short)]
        stat: Option<String>,

        #[clap(flatten)]
        args: LeaderboardArgs,
    },

    /// Scrape the wins leaderboard of a game.
    Wins {
        #[clap(flatten)]
        args: LeaderboardArgs,
    },

    /// Build, and unless --url-only is given call, a stats API endpoint.
    ///
    /// KIND is one of boards, filters, games, groups, leaderboards, players,
    /// stats, website. METHOD is e.g. get_all or getAll.
    Endpoint {
        kind: String,
        method: String,

        #[clap(flatten)]
        options: EndpointArgs,

        /// Print the URL instead of requesting it.
        #[clap(long)]
        url_only: bool,
    },

    /// List known names.
    List {
        #[clap(value_enum)]
        what: ListKind,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        MineplexCli::command().debug_assert();
    }

    #[test]
    fn test_parse_leaderboard_command() {
        let cli = MineplexCli::try_parse_from([
            "mineplex-stats",
            "leaderboard",
            "--game",
            "Survival Games",
            "-s",
            "Kills",
            "--board",
            "Weekly",
            "--json",
        ])
        .unwrap();

        match cli.command {
            Commands::Leaderboard { stat, args } => {
                assert_eq!(stat.as_deref(), Some("Kills"));
                assert_eq!(args.game.as_deref(), Some("Survival Games"));
                assert_eq!(args.board.as_deref(), Some("Weekly"));
                assert!(args.json);
            }
            other => panic!("Expected Leaderboard command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_endpoint_command() {
        let cli = MineplexCli::try_parse_from([
            "mineplex-stats",
            "-v",
            "endpoint",
            "players",
            "get_player_stat",
            "--platform",
            "java",
            "--player",
            "Notch",
            "--stat",
            "Wins",
            "--board",
            "All",
            "--url-only",
        ])
        .unwrap();

        assert!(cli.verbose);
        match cli.command {
            Commands::Endpoint {
                kind,
                method,
                options,
                url_only,
            } => {
                assert_eq!(kind, "players");
                assert_eq!(method, "get_player_stat");
                assert!(url_only);
                let options = EndpointOptions::from(options);
                assert_eq!(options.platform.as_deref(), Some("java"));
                assert_eq!(options.player.as_deref(), Some("Notch"));
            }
            other => panic!("Expected Endpoint command, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_command() {
        let cli = MineplexCli::try_parse_from(["mineplex-stats", "list", "boards"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::List {
                what: ListKind::Boards
            }
        ));
    }
}
