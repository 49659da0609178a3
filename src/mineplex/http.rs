//! Mineplex stats client: JSON endpoints and the scraped leaderboard page.

use crate::core::{ClientConfig, RawFetcher, RawResponse};
use crate::mineplex::endpoints::{EndpointCatalog, EndpointOptions};
use crate::mineplex::leaderboard::{Leaderboard, UNNAMED_LEADERBOARD};
use crate::mineplex::scrape::Scraper;
use crate::Result;
use reqwest::StatusCode;
use tracing::error;

/// Parameters of the leaderboard page. Unset values are left off the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LeaderboardQuery {
    pub game: Option<String>,
    pub stat: Option<String>,
    pub board: Option<String>,
}

impl LeaderboardQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn game(mut self, game: impl ToString) -> Self {
        self.game = Some(game.to_string());
        self
    }

    pub fn stat(mut self, stat: impl ToString) -> Self {
        self.stat = Some(stat.to_string());
        self
    }

    pub fn board(mut self, board: impl ToString) -> Self {
        self.board = Some(board.to_string());
        self
    }

    /// `game`, `type` and `boardType` pairs for whichever values are set.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        [
            ("game", self.game.as_deref()),
            ("type", self.stat.as_deref()),
            ("boardType", self.board.as_deref()),
        ]
        .into_iter()
        .filter_map(|(key, value)| value.map(|v| (key, v)))
        .collect()
    }

    /// Leaderboard title: the stat name, or a placeholder when none was given.
    pub fn title(&self) -> &str {
        self.stat.as_deref().unwrap_or(UNNAMED_LEADERBOARD)
    }
}

/// Client for the Mineplex stats service.
///
/// Holds no per-request state; clones share one connection pool and can be
/// used from concurrent tasks.
#[derive(Debug, Clone)]
pub struct MineplexClient {
    config: ClientConfig,
    catalog: EndpointCatalog,
    fetcher: RawFetcher,
    scraper: Scraper,
}

impl MineplexClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let fetcher = RawFetcher::new(&config.user_agent)?;
        Ok(Self {
            config,
            catalog: EndpointCatalog::standard(),
            fetcher,
            scraper: Scraper::new(),
        })
    }

    /// Client configured from the environment (see [`ClientConfig::from_env`]).
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env())
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn catalog(&self) -> &EndpointCatalog {
        &self.catalog
    }

    /// Full URL of `kind.method` without sending anything.
    pub fn endpoint_url(&self, kind: &str, method: &str, options: &EndpointOptions) -> Result<String> {
        let path = self.catalog.resolve(kind, method, options)?;
        Ok(self.config.api_endpoint_url(&path))
    }

    /// GET a path relative to the API base.
    pub async fn get(&self, endpoint: &str) -> Result<RawResponse> {
        let url = self.config.api_endpoint_url(endpoint);
        self.fetcher.fetch(&url).await
    }

    /// Call a JSON endpoint and hand back the unparsed response.
    pub async fn call_endpoint(
        &self,
        kind: &str,
        method: &str,
        options: &EndpointOptions,
    ) -> Result<RawResponse> {
        let url = self.endpoint_url(kind, method, options)?;
        self.fetcher.fetch(&url).await
    }

    /// Fetch and scrape the leaderboard page.
    ///
    /// `Ok(None)` means no leaderboard could be determined: the page was a 404
    /// or its content did not pass validation. Transport failures are `Err`.
    pub async fn get_leaderboard(&self, query: &LeaderboardQuery) -> Result<Option<Leaderboard>> {
        let response = self
            .fetcher
            .fetch_with_query(&self.config.leaderboard_url, &query.params())
            .await?;

        if response.status == StatusCode::NOT_FOUND {
            error!(
                request = ?query.params(),
                full_url = %response.url,
                status = response.status.as_u16(),
                "Error fetching request, url returned 404."
            );
            return Ok(None);
        }

        Ok(self.scraper.scrape(query.title(), &response.body))
    }

    /// Leaderboard of wins for `game` on `board`.
    pub async fn get_win_leaderboard(
        &self,
        game: Option<&str>,
        board: Option<&str>,
    ) -> Result<Option<Leaderboard>> {
        let mut query = LeaderboardQuery::new().stat("Wins");
        query.game = game.map(str::to_string);
        query.board = board.map(str::to_string);
        self.get_leaderboard(&query).await
    }
}
