//! Leaderboard aggregate: ranked entries, unique by player name.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use tracing::{error, warn};

/// Title used when a leaderboard is requested without a stat name.
pub const UNNAMED_LEADERBOARD: &str = "Unnamed Leaderboard";

/// A single ranked player on a leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    rank: u32,
    name: String,
    score: u64,
}

impl LeaderboardEntry {
    pub fn new(rank: u32, name: impl Into<String>, score: u64) -> Self {
        Self {
            rank,
            name: name.into(),
            score,
        }
    }

    /// Position as reported by the source page (1-based).
    pub fn rank(&self) -> u32 {
        self.rank
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> u64 {
        self.score
    }
}

impl fmt::Display for LeaderboardEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:>2} ｜ {} - {}", self.rank, self.name, self.score)
    }
}

/// Ordered, name-unique collection of [`LeaderboardEntry`] values.
///
/// Entries keep arrival order. Adding an entry whose name is already present
/// is rejected: the first entry wins and a warning is logged. Pages that list
/// two players under the same display name therefore lose the later one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Leaderboard {
    title: String,
    entries: Vec<LeaderboardEntry>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl Leaderboard {
    /// Create a leaderboard, adding `entries` one by one through [`Leaderboard::add`].
    pub fn new(title: impl Into<String>, entries: impl IntoIterator<Item = LeaderboardEntry>) -> Self {
        let mut leaderboard = Self {
            title: title.into(),
            entries: Vec::new(),
            index: HashMap::new(),
        };
        for entry in entries {
            leaderboard.add(entry);
        }
        leaderboard
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Add an entry unless it is absent or its name is already taken.
    ///
    /// Returns `true` when the entry was inserted.
    pub fn add(&mut self, entry: impl Into<Option<LeaderboardEntry>>) -> bool {
        let Some(entry) = entry.into() else {
            error!(leaderboard = %self.title, "Cannot add undefined entry to leaderboard");
            return false;
        };

        if self.has(Some(&entry)) {
            warn!(
                leaderboard = %self.title,
                name = %entry.name,
                "Cannot add already existing entry to leaderboard"
            );
            return false;
        }

        self.index.insert(entry.name.clone(), self.entries.len());
        self.entries.push(entry);
        true
    }

    /// Name-based membership test; `None` is never a member.
    pub fn has(&self, entry: Option<&LeaderboardEntry>) -> bool {
        entry.is_some_and(|e| self.contains_name(&e.name))
    }

    pub fn contains_name(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&LeaderboardEntry> {
        self.index.get(name).map(|&i| &self.entries[i])
    }

    /// Visit entries in insertion order.
    pub fn for_each<F>(&self, visitor: F)
    where
        F: FnMut(&LeaderboardEntry),
    {
        self.entries.iter().for_each(visitor);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LeaderboardEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Leaderboard {
    type Item = &'a LeaderboardEntry;
    type IntoIter = std::slice::Iter<'a, LeaderboardEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
