//! Endpoint catalog and URL builder for the JSON stats API.
//!
//! Every endpoint is a path template with positional `{i}` placeholders,
//! scoped under a platform base path (`v1/java`, `v1/bedrock`). The catalog
//! is a static table; [`EndpointCatalog::resolve`] turns a kind, a method
//! name and a set of [`EndpointOptions`] into a relative URL.

use crate::error::{MineplexError, Result};
use crate::mineplex::keys::{normalize_name, Platform};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

static PLACEHOLDER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{(\d+)\}").expect("placeholder pattern"));

/// Options an endpoint may draw its path arguments from.
///
/// Which fields are needed depends on the endpoint; see [`EndpointDef::fields`].
/// `platform` is needed by all of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointOptions {
    pub board: Option<String>,
    pub category: Option<String>,
    pub game: Option<String>,
    pub group: Option<String>,
    pub platform: Option<String>,
    pub player: Option<String>,
    pub stat: Option<String>,
    pub uuid: Option<String>,
}

impl EndpointOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_platform(mut self, platform: impl ToString) -> Self {
        self.platform = Some(platform.to_string());
        self
    }

    pub fn with_board(mut self, board: impl ToString) -> Self {
        self.board = Some(board.to_string());
        self
    }

    pub fn with_category(mut self, category: impl ToString) -> Self {
        self.category = Some(category.to_string());
        self
    }

    pub fn with_game(mut self, game: impl ToString) -> Self {
        self.game = Some(game.to_string());
        self
    }

    pub fn with_group(mut self, group: impl ToString) -> Self {
        self.group = Some(group.to_string());
        self
    }

    pub fn with_player(mut self, player: impl ToString) -> Self {
        self.player = Some(player.to_string());
        self
    }

    pub fn with_stat(mut self, stat: impl ToString) -> Self {
        self.stat = Some(stat.to_string());
        self
    }

    pub fn with_uuid(mut self, uuid: impl ToString) -> Self {
        self.uuid = Some(uuid.to_string());
        self
    }

    /// Value of a path-argument field, if set.
    pub fn get(&self, field: OptionField) -> Option<&str> {
        let value = match field {
            OptionField::Board => &self.board,
            OptionField::Category => &self.category,
            OptionField::Game => &self.game,
            OptionField::Group => &self.group,
            OptionField::Player => &self.player,
            OptionField::Stat => &self.stat,
            OptionField::Uuid => &self.uuid,
        };
        value.as_deref()
    }
}

/// Option fields that feed template placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionField {
    Board,
    Category,
    Game,
    Group,
    Player,
    Stat,
    Uuid,
}

impl OptionField {
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionField::Board => "board",
            OptionField::Category => "category",
            OptionField::Game => "game",
            OptionField::Group => "group",
            OptionField::Player => "player",
            OptionField::Stat => "stat",
            OptionField::Uuid => "uuid",
        }
    }
}

impl fmt::Display for OptionField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resource groups exposed by the stats API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointKind {
    Boards,
    Filters,
    Games,
    Groups,
    Leaderboards,
    Players,
    Stats,
    Website,
}

impl EndpointKind {
    pub const ALL: &'static [EndpointKind] = &[
        EndpointKind::Boards,
        EndpointKind::Filters,
        EndpointKind::Games,
        EndpointKind::Groups,
        EndpointKind::Leaderboards,
        EndpointKind::Players,
        EndpointKind::Stats,
        EndpointKind::Website,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EndpointKind::Boards => "boards",
            EndpointKind::Filters => "filters",
            EndpointKind::Games => "games",
            EndpointKind::Groups => "groups",
            EndpointKind::Leaderboards => "leaderboards",
            EndpointKind::Players => "players",
            EndpointKind::Stats => "stats",
            EndpointKind::Website => "website",
        }
    }
}

impl fmt::Display for EndpointKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndpointKind {
    type Err = MineplexError;

    /// Accepts the plural name or its singular (`board`, `game`, `stat`, ...).
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "boards" | "board" => Ok(EndpointKind::Boards),
            "filters" | "filter" => Ok(EndpointKind::Filters),
            "games" | "game" => Ok(EndpointKind::Games),
            "groups" | "group" => Ok(EndpointKind::Groups),
            "leaderboards" | "leaderboard" => Ok(EndpointKind::Leaderboards),
            "players" | "player" => Ok(EndpointKind::Players),
            "stats" | "stat" => Ok(EndpointKind::Stats),
            "website" | "websites" => Ok(EndpointKind::Website),
            _ => Err(MineplexError::UnknownEndpointType {
                kind: s.to_string(),
            }),
        }
    }
}

/// One catalog row: a named method on a resource kind and its path template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDef {
    pub kind: EndpointKind,
    pub method: &'static str,
    pub template: &'static str,
    /// Option fields substituted into the template, in placeholder order.
    pub fields: &'static [OptionField],
}

const fn def(
    kind: EndpointKind,
    method: &'static str,
    template: &'static str,
    fields: &'static [OptionField],
) -> EndpointDef {
    EndpointDef {
        kind,
        method,
        template,
        fields,
    }
}

use EndpointKind as K;
use OptionField as F;

static STANDARD_ENDPOINTS: &[EndpointDef] = &[
    def(K::Boards, "get_all", "/board", &[]),
    def(K::Boards, "get", "/board/{0}", &[F::Board]),
    def(K::Filters, "get_all", "/filter", &[]),
    def(K::Filters, "get_all_reasons", "/filter/reasons", &[]),
    def(K::Games, "get_all", "/game", &[]),
    def(K::Games, "get", "/game/{0}", &[F::Game]),
    def(K::Games, "get_all_categories", "/game/category", &[]),
    def(K::Games, "get_category", "/game/category/{0}", &[F::Category]),
    def(K::Groups, "get_all", "/group", &[]),
    def(K::Groups, "get", "/group/{0}", &[F::Group]),
    def(
        K::Groups,
        "get_player_stat",
        "/group/{0}/stat/player/{1}/{2}/{3}",
        &[F::Group, F::Player, F::Stat, F::Board],
    ),
    def(K::Leaderboards, "get_all", "/leaderboard", &[]),
    def(K::Leaderboards, "get_game", "/leaderboard/{0}", &[F::Game]),
    def(
        K::Leaderboards,
        "get_game_stat",
        "/leaderboard/{0}/{1}",
        &[F::Game, F::Stat],
    ),
    def(
        K::Leaderboards,
        "get_game_board",
        "/leaderboard/{0}/{1}/{2}",
        &[F::Game, F::Stat, F::Board],
    ),
    def(
        K::Leaderboards,
        "get_saves",
        "/leaderboard/{0}/{1}/{2}/save",
        &[F::Game, F::Stat, F::Board],
    ),
    def(
        K::Leaderboards,
        "get_save_times",
        "/leaderboard/{0}/{1}/{2}/saves",
        &[F::Game, F::Stat, F::Board],
    ),
    def(
        K::Players,
        "get_player_stat",
        "/player/{0}/stats/stat/{1}/{2}",
        &[F::Player, F::Stat, F::Board],
    ),
    def(
        K::Players,
        "get_game_stat",
        "/player/{0}/stats/game/{1}/{2}",
        &[F::Player, F::Game, F::Board],
    ),
    def(
        K::Players,
        "get_uuid_player_stat",
        "/player/uuid/{0}/stats/stat/{1}/{2}",
        &[F::Uuid, F::Stat, F::Board],
    ),
    def(
        K::Players,
        "get_uuid_player_game_stat",
        "/player/uuid/{0}/stats/game/{1}/{2}",
        &[F::Uuid, F::Game, F::Board],
    ),
    def(K::Stats, "get_all", "/stat", &[]),
    def(K::Stats, "get", "/stat/{0}", &[F::Stat]),
    def(K::Website, "get_player", "/website/{0}", &[F::Player]),
];

/// Read-only table of endpoint definitions.
#[derive(Debug, Clone, Copy)]
pub struct EndpointCatalog {
    defs: &'static [EndpointDef],
}

impl Default for EndpointCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl EndpointCatalog {
    /// The catalog of the public stats API.
    pub fn standard() -> Self {
        Self {
            defs: STANDARD_ENDPOINTS,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static EndpointDef> {
        self.defs.iter()
    }

    /// Method names available on a kind, in catalog order.
    pub fn methods(&self, kind: EndpointKind) -> impl Iterator<Item = &'static str> {
        self.defs
            .iter()
            .filter(move |d| d.kind == kind)
            .map(|d| d.method)
    }

    /// Look up a definition. Method names match in snake_case or camelCase.
    pub fn find(&self, kind: &str, method: &str) -> Result<&'static EndpointDef> {
        let endpoint_kind: EndpointKind = kind.parse()?;
        let wanted = normalize_name(method);

        self.defs
            .iter()
            .find(|d| d.kind == endpoint_kind && normalize_name(d.method) == wanted)
            .ok_or_else(|| MineplexError::UnknownEndpointMethod {
                kind: endpoint_kind.to_string(),
                method: method.to_string(),
            })
    }

    /// Build the platform-scoped path for `kind.method` from `options`.
    pub fn resolve(&self, kind: &str, method: &str, options: &EndpointOptions) -> Result<String> {
        let endpoint = self.find(kind, method)?;
        endpoint.url_path(options)
    }
}

impl EndpointDef {
    /// Substitute this endpoint's fields from `options` and prefix the platform path.
    pub fn url_path(&self, options: &EndpointOptions) -> Result<String> {
        let args = self
            .fields
            .iter()
            .map(|field| {
                options.get(*field).ok_or_else(|| MineplexError::MissingOption {
                    field: field.to_string(),
                })
            })
            .collect::<Result<Vec<&str>>>()?;

        let path = build(self.template, &args)?;
        platform_endpoint(&path, options.platform.as_deref())
    }
}

/// Replace `{0}`..`{n-1}` in `template` with `args`, whitespace removed.
///
/// The placeholder count is the number of `{` in the template and must equal
/// `args.len()`.
pub fn build(template: &str, args: &[&str]) -> Result<String> {
    let expected = template.matches('{').count();
    if expected != args.len() {
        return Err(MineplexError::ArgumentCountMismatch {
            template: template.to_string(),
            expected,
            supplied: args.len(),
        });
    }

    let args: Vec<String> = args
        .iter()
        .map(|arg| arg.chars().filter(|c| !c.is_whitespace()).collect())
        .collect();

    // Single pass over the template, so argument text is never rescanned
    let url = PLACEHOLDER.replace_all(template, |caps: &Captures| {
        caps[1]
            .parse::<usize>()
            .ok()
            .and_then(|i| args.get(i))
            .cloned()
            .unwrap_or_else(|| caps[0].to_string())
    });

    Ok(url.into_owned())
}

/// Prefix `path` with the base path of `platform` (case-insensitive).
pub fn platform_endpoint(path: &str, platform: Option<&str>) -> Result<String> {
    let platform = match platform {
        Some(p) if !p.is_empty() => p,
        _ => return Err(MineplexError::MissingPlatform),
    };

    let resolved = Platform::ALL
        .iter()
        .find(|p| p.as_str().eq_ignore_ascii_case(platform))
        .ok_or_else(|| MineplexError::UnknownPlatform {
            platform: platform.to_string(),
        })?;

    Ok(format!("{}{}", resolved.base_path(), path))
}
