//! Leaderboard scraper for the public leaderboard page.
//!
//! The page is HTML meant for people, not a data feed. Its text content,
//! after the column headers, is a flat run of `rank name score` triples.
//! Scraping is all-or-nothing: if any triple in the window is incomplete or
//! fails to parse, the whole page is rejected and `None` is returned.

use crate::mineplex::leaderboard::{Leaderboard, LeaderboardEntry};
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tracing::{debug, error};

/// Last column header; data starts right after its first occurrence.
pub const HEADER_MARKER: &str = "Wins";

/// Header words dropped from the data tokens.
pub const NOISE_TOKENS: &[&str] = &["IGN", "Wins"];

pub const FIELDS_PER_ENTRY: usize = 3;

/// The page never lists more than the top 50 players.
pub const MAX_ENTRIES: usize = 50;

/// Number of tokens considered after the header.
pub const WINDOW_SIZE: usize = MAX_ENTRIES * FIELDS_PER_ENTRY;

static TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").expect("tag pattern"));

/// Reduces a raw response body to plain text.
pub trait TextExtractor {
    fn extract_text<'a>(&self, raw: &'a str) -> Cow<'a, str>;
}

/// Replaces every `<...>` tag with a single space.
///
/// No structural parsing: nested or unbalanced markup is not understood.
#[derive(Debug, Default, Clone, Copy)]
pub struct TagStripper;

impl TextExtractor for TagStripper {
    fn extract_text<'a>(&self, raw: &'a str) -> Cow<'a, str> {
        TAG.replace_all(raw, " ")
    }
}

/// Split on single spaces, dropping blank tokens.
pub fn tokenize(text: &str) -> Vec<&str> {
    text.split(' ')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect()
}

/// Tokens after the first [`HEADER_MARKER`].
///
/// Without a marker nothing is skipped and scanning starts at the first token.
pub fn skip_header<'a, 'b>(tokens: &'b [&'a str]) -> &'b [&'a str] {
    let start = tokens
        .iter()
        .position(|token| *token == HEADER_MARKER)
        .map_or(0, |i| i + 1);
    &tokens[start..]
}

/// Header skip, noise filter and the fixed window, in that order.
pub fn data_tokens(text: &str) -> Vec<&str> {
    let tokens = tokenize(text);
    skip_header(&tokens)
        .iter()
        .copied()
        .filter(|token| !NOISE_TOKENS.contains(token))
        .take(WINDOW_SIZE)
        .collect()
}

/// Parse one `rank name score` group. Scores may use `,` thousands separators.
pub fn parse_entry(fields: &[&str]) -> Option<LeaderboardEntry> {
    let [rank, name, score] = fields else {
        return None;
    };

    let score = score.replace(',', "");
    if !is_digits(rank) || !is_digits(&score) {
        return None;
    }

    let rank = rank.parse::<u32>().ok()?;
    let score = score.parse::<u64>().ok()?;

    Some(LeaderboardEntry::new(rank, *name, score))
}

// `str::parse` alone would let a leading `+` through
fn is_digits(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit())
}

/// Parse every group in `tokens`, or nothing at all.
pub fn parse_entries(tokens: &[&str]) -> Option<Vec<LeaderboardEntry>> {
    if tokens.len() < FIELDS_PER_ENTRY {
        return None;
    }

    tokens.chunks(FIELDS_PER_ENTRY).map(parse_entry).collect()
}

/// Turns leaderboard page bodies into [`Leaderboard`] values.
#[derive(Debug, Default, Clone)]
pub struct Scraper<E = TagStripper> {
    extractor: E,
}

impl Scraper {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<E: TextExtractor> Scraper<E> {
    /// Use a different markup-to-text reduction.
    pub fn with_extractor(extractor: E) -> Self {
        Self { extractor }
    }

    /// Scrape `raw` into a leaderboard titled `title`.
    ///
    /// Returns `None` (and logs why) when the page holds no usable data.
    pub fn scrape(&self, title: &str, raw: &str) -> Option<Leaderboard> {
        let text = self.extractor.extract_text(raw);
        let tokens = data_tokens(&text);
        debug!(title, tokens = tokens.len(), "Scraping leaderboard page");

        let Some(entries) = parse_entries(&tokens) else {
            error!(
                title,
                tokens = tokens.len(),
                "Invalid request format for leaderboard. Data returned is invalid."
            );
            return None;
        };

        Some(Leaderboard::new(title, entries))
    }
}

/// Scrape with the default [`TagStripper`].
pub fn scrape(title: &str, raw: &str) -> Option<Leaderboard> {
    Scraper::new().scrape(title, raw)
}

#[cfg(test)]
mod tests;
