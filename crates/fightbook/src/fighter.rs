//! Core fighter types for fightbook.
//!
//! This module defines the fundamental data structures for representing
//! a tracked fighter: the ranking tagged union, fight history entries,
//! and the fighter record itself.

use serde::{Deserialize, Serialize};

/// A fighter's standing within its weight class.
///
/// The three variants form a total order: the champion sorts first,
/// numbered ranks follow in ascending order, and unranked fighters
/// sort last.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ranking {
    /// Holder of the weight class title.
    Champion,
    /// A numbered contender position (1 is the top contender).
    Ranked(u32),
    /// Not currently ranked.
    #[default]
    Unranked,
}

impl Ranking {
    /// Parse a ranking from user input.
    ///
    /// The literal `"C"` denotes the champion, a numeric string parses
    /// to a numbered rank, and anything else is treated as unranked.
    /// Parsing is total and never fails.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if input == "C" {
            Self::Champion
        } else if let Ok(n) = input.parse::<u32>() {
            Self::Ranked(n)
        } else {
            Self::Unranked
        }
    }

    /// Sort key for ordering fighters within a weight class.
    ///
    /// Returns a `(tier, rank)` tuple: tier 0 for the champion, tier 1
    /// for numbered ranks (ordered by the rank value), tier 2 for
    /// unranked.
    #[must_use]
    pub fn sort_key(&self) -> (u8, u32) {
        match self {
            Self::Champion => (0, 0),
            Self::Ranked(n) => (1, *n),
            Self::Unranked => (2, 0),
        }
    }
}

impl PartialOrd for Ranking {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Ranking {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl std::fmt::Display for Ranking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Champion => write!(f, "C"),
            Self::Ranked(n) => write!(f, "{n}"),
            Self::Unranked => write!(f, "NR"),
        }
    }
}

/// One recorded bout in a fighter's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightEntry {
    /// Name of the opponent.
    pub opponent: String,
    /// Outcome label, e.g. `"win"` or `"loss"` (free text).
    pub result: String,
}

impl FightEntry {
    /// Create a new fight history entry.
    #[must_use]
    pub fn new(opponent: impl Into<String>, result: impl Into<String>) -> Self {
        Self {
            opponent: opponent.into(),
            result: result.into(),
        }
    }
}

/// A tracked fighter.
///
/// Identified within a roster by the `(name, weight_class)` pair.
/// Records are owned exclusively by the roster that created them and
/// are mutated in place by the roster's update operations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fighter {
    /// The fighter's name (not unique on its own).
    pub name: String,
    /// The weight class the fighter competes in.
    pub weight_class: String,
    /// Career win count.
    pub wins: u32,
    /// Career loss count.
    pub losses: u32,
    /// Current standing within the weight class.
    pub ranking: Ranking,
    /// Append-only log of recorded bouts, in insertion order.
    pub fight_history: Vec<FightEntry>,
}

impl Fighter {
    /// Create a new fighter with an empty fight history.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        weight_class: impl Into<String>,
        wins: u32,
        losses: u32,
        ranking: Ranking,
    ) -> Self {
        Self {
            name: name.into(),
            weight_class: weight_class.into(),
            wins,
            losses,
            ranking,
            fight_history: Vec::new(),
        }
    }

    /// Overwrite the stats fields that are supplied.
    ///
    /// Each `Some` value replaces the current one; `None` leaves the
    /// field untouched. The three fields are independent, so a caller
    /// can set wins to zero while leaving losses and ranking alone.
    pub fn update_stats(
        &mut self,
        wins: Option<u32>,
        losses: Option<u32>,
        ranking: Option<Ranking>,
    ) {
        if let Some(wins) = wins {
            self.wins = wins;
        }
        if let Some(losses) = losses {
            self.losses = losses;
        }
        if let Some(ranking) = ranking {
            self.ranking = ranking;
        }
    }

    /// Append a bout to the fight history.
    ///
    /// No deduplication; entries keep append order.
    pub fn add_fight(&mut self, opponent: impl Into<String>, result: impl Into<String>) {
        self.fight_history.push(FightEntry::new(opponent, result));
    }

    /// Sort key for ordering within a weight class.
    ///
    /// Delegates to [`Ranking::sort_key`]; fighters with equal keys
    /// keep their relative order under a stable sort.
    #[must_use]
    pub fn sort_key(&self) -> (u8, u32) {
        self.ranking.sort_key()
    }

    /// Check if this fighter matches the given roster key.
    #[must_use]
    pub fn matches(&self, name: &str, weight_class: &str) -> bool {
        self.name == name && self.weight_class == weight_class
    }
}

impl std::fmt::Display for Fighter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}. {}, Wins: {}, Losses: {}, Weight Class: {}",
            self.ranking, self.name, self.wins, self.losses, self.weight_class
        )
    }
}
