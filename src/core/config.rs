//! Client configuration: service base URLs and user agent.

use crate::{API_URL_ENV_VAR, LEADERBOARD_URL_ENV_VAR};

/// Base URL of the JSON stats API.
pub const DEFAULT_API_URL: &str = "https://mpstats.timmi6790.de/";

/// The public leaderboard page that gets scraped.
pub const DEFAULT_LEADERBOARD_URL: &str =
    "https://www.mineplex.com/assets/www-mp/webtest/testy.php";

/// Where the client sends its requests.
///
/// # Examples
///
/// ```rust
/// use mineplex_stats::core::ClientConfig;
///
/// let config = ClientConfig::default().with_api_url("http://localhost:8080");
/// assert_eq!(config.api_endpoint_url("v1/java/board"), "http://localhost:8080/v1/java/board");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub leaderboard_url: String,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            leaderboard_url: DEFAULT_LEADERBOARD_URL.to_string(),
            user_agent: format!("mineplex-stats/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Defaults, overridden by `MINEPLEX_API_URL` / `MINEPLEX_LEADERBOARD_URL` when set.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(url) = non_empty_env(API_URL_ENV_VAR) {
            config.api_url = url;
        }
        if let Some(url) = non_empty_env(LEADERBOARD_URL_ENV_VAR) {
            config.leaderboard_url = url;
        }
        config
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api_url = url.into();
        self
    }

    pub fn with_leaderboard_url(mut self, url: impl Into<String>) -> Self {
        self.leaderboard_url = url.into();
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Join an endpoint path onto the API base with exactly one `/` between them.
    pub fn api_endpoint_url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.api_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.leaderboard_url, DEFAULT_LEADERBOARD_URL);
        assert!(config.user_agent.starts_with("mineplex-stats/"));
    }

    #[test]
    fn test_api_endpoint_url_joins_with_single_slash() {
        let config = ClientConfig::default();
        assert_eq!(
            config.api_endpoint_url("v1/java/board"),
            "https://mpstats.timmi6790.de/v1/java/board"
        );

        let config = config.with_api_url("http://127.0.0.1:9000");
        assert_eq!(
            config.api_endpoint_url("/v1/java/board"),
            "http://127.0.0.1:9000/v1/java/board"
        );
    }

    #[test]
    fn test_from_env_overrides() {
        std::env::set_var(API_URL_ENV_VAR, "http://api.test/");
        std::env::set_var(LEADERBOARD_URL_ENV_VAR, "http://web.test/lb.php");

        let config = ClientConfig::from_env();
        assert_eq!(config.api_url, "http://api.test/");
        assert_eq!(config.leaderboard_url, "http://web.test/lb.php");

        std::env::set_var(API_URL_ENV_VAR, "   ");
        std::env::remove_var(LEADERBOARD_URL_ENV_VAR);

        let config = ClientConfig::from_env();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.leaderboard_url, DEFAULT_LEADERBOARD_URL);

        std::env::remove_var(API_URL_ENV_VAR);
    }
}
