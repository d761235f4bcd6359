//! Roster management for fightbook.
//!
//! This module provides the in-memory collection of fighter records,
//! with lookup, mutation, deletion, and ordered listing. The roster is
//! the sole owner of every fighter it holds; records are created,
//! mutated, and removed only through its methods.

use tracing::debug;

use crate::fighter::{Fighter, Ranking};

/// An in-memory collection of fighter records.
///
/// Fighters are appended unordered and sorted in place on every
/// listing call. Lookup is a linear scan over the `(name,
/// weight_class)` key, which is fine at the expected scale of tens to
/// low hundreds of entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    fighters: Vec<Fighter>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from an existing list of fighters, keeping their
    /// order.
    #[must_use]
    pub fn from_fighters(fighters: Vec<Fighter>) -> Self {
        Self { fighters }
    }

    /// Borrow the fighters in their current order.
    #[must_use]
    pub fn fighters(&self) -> &[Fighter] {
        &self.fighters
    }

    /// Consume the roster, yielding the fighters in their current
    /// order.
    #[must_use]
    pub fn into_fighters(self) -> Vec<Fighter> {
        self.fighters
    }

    /// Number of fighters in the roster.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fighters.len()
    }

    /// Check whether the roster is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fighters.is_empty()
    }

    /// Construct a new fighter and append it to the roster.
    ///
    /// Does not check for an existing `(name, weight_class)` entry;
    /// duplicate keys are currently permitted and later lookups
    /// resolve to the first match.
    pub fn add_fighter(
        &mut self,
        name: impl Into<String>,
        weight_class: impl Into<String>,
        wins: u32,
        losses: u32,
        ranking: Ranking,
    ) {
        let fighter = Fighter::new(name, weight_class, wins, losses, ranking);
        debug!("Adding fighter {} ({})", fighter.name, fighter.weight_class);
        self.fighters.push(fighter);
    }

    /// Find the first fighter matching the given key.
    #[must_use]
    pub fn find_fighter(&self, name: &str, weight_class: &str) -> Option<&Fighter> {
        self.fighters.iter().find(|f| f.matches(name, weight_class))
    }

    /// Find the first fighter matching the given key, mutably.
    pub fn find_fighter_mut(&mut self, name: &str, weight_class: &str) -> Option<&mut Fighter> {
        self.fighters
            .iter_mut()
            .find(|f| f.matches(name, weight_class))
    }

    /// Remove the first fighter matching the given key.
    ///
    /// Returns `true` if a fighter was removed, `false` if none
    /// matched. The relative order of the remaining fighters is
    /// preserved.
    pub fn delete_fighter(&mut self, name: &str, weight_class: &str) -> bool {
        let Some(index) = self
            .fighters
            .iter()
            .position(|f| f.matches(name, weight_class))
        else {
            return false;
        };
        self.fighters.remove(index);
        debug!("Deleted fighter {name} ({weight_class})");
        true
    }

    /// Update the stats of the fighter matching the given key.
    ///
    /// Fields passed as `None` are left unchanged. Returns `true` if
    /// the fighter was found and updated, `false` otherwise.
    pub fn update_fighter(
        &mut self,
        name: &str,
        weight_class: &str,
        wins: Option<u32>,
        losses: Option<u32>,
        ranking: Option<Ranking>,
    ) -> bool {
        match self.find_fighter_mut(name, weight_class) {
            Some(fighter) => {
                fighter.update_stats(wins, losses, ranking);
                true
            }
            None => false,
        }
    }

    /// Append a bout to the history of the fighter matching the given
    /// key.
    ///
    /// Returns `true` if the fighter was found, `false` otherwise.
    pub fn record_fight(
        &mut self,
        name: &str,
        weight_class: &str,
        opponent: impl Into<String>,
        result: impl Into<String>,
    ) -> bool {
        match self.find_fighter_mut(name, weight_class) {
            Some(fighter) => {
                fighter.add_fight(opponent, result);
                true
            }
            None => false,
        }
    }

    /// Sort the roster in place for listing.
    ///
    /// Fighters are grouped by weight class (lexicographic), then
    /// ordered by ranking within each class: champion first, numbered
    /// ranks ascending, unranked last. The sort is stable, so fighters
    /// with equal keys keep their prior relative order.
    pub fn sort(&mut self) {
        self.fighters
            .sort_by(|a, b| match a.weight_class.cmp(&b.weight_class) {
                std::cmp::Ordering::Equal => a.sort_key().cmp(&b.sort_key()),
                other => other,
            });
    }

    /// Re-sort the roster and list fighters, optionally filtered by
    /// weight class.
    ///
    /// The sort happens on every call since add/update/delete may have
    /// invalidated any prior ordering.
    pub fn list_fighters(&mut self, weight_class: Option<&str>) -> Vec<&Fighter> {
        self.sort();
        match weight_class {
            Some(wc) => self
                .fighters
                .iter()
                .filter(|f| f.weight_class == wc)
                .collect(),
            None => self.fighters.iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster_with(entries: &[(&str, &str, u32, u32, Ranking)]) -> Roster {
        let mut roster = Roster::new();
        for (name, wc, wins, losses, ranking) in entries {
            roster.add_fighter(*name, *wc, *wins, *losses, *ranking);
        }
        roster
    }

    #[test]
    fn test_add_then_find() {
        let mut roster = Roster::new();
        roster.add_fighter("A", "Lightweight", 12, 3, Ranking::Ranked(5));

        let found = roster.find_fighter("A", "Lightweight").unwrap();
        assert_eq!(found.name, "A");
        assert_eq!(found.weight_class, "Lightweight");
        assert_eq!(found.wins, 12);
        assert_eq!(found.losses, 3);
        assert_eq!(found.ranking, Ranking::Ranked(5));
        assert!(found.fight_history.is_empty());
    }

    #[test]
    fn test_find_nonexistent() {
        let roster = Roster::new();
        assert!(roster.find_fighter("A", "Lightweight").is_none());
    }

    #[test]
    fn test_find_requires_both_key_parts() {
        let roster = roster_with(&[("A", "Lightweight", 0, 0, Ranking::Unranked)]);
        assert!(roster.find_fighter("A", "Welterweight").is_none());
        assert!(roster.find_fighter("B", "Lightweight").is_none());
        assert!(roster.find_fighter("A", "Lightweight").is_some());
    }

    #[test]
    fn test_duplicate_keys_permitted() {
        let mut roster = Roster::new();
        roster.add_fighter("A", "Lightweight", 1, 0, Ranking::Unranked);
        roster.add_fighter("A", "Lightweight", 2, 0, Ranking::Unranked);

        assert_eq!(roster.len(), 2);
        // Lookup resolves to the first inserted record.
        assert_eq!(roster.find_fighter("A", "Lightweight").unwrap().wins, 1);
    }

    #[test]
    fn test_delete_present() {
        let mut roster = roster_with(&[
            ("A", "Lightweight", 0, 0, Ranking::Unranked),
            ("B", "Lightweight", 0, 0, Ranking::Unranked),
            ("C", "Lightweight", 0, 0, Ranking::Unranked),
        ]);

        assert!(roster.delete_fighter("B", "Lightweight"));
        assert_eq!(roster.len(), 2);
        // Remaining fighters keep their relative order.
        assert_eq!(roster.fighters()[0].name, "A");
        assert_eq!(roster.fighters()[1].name, "C");
    }

    #[test]
    fn test_delete_absent_leaves_roster_unchanged() {
        let mut roster = roster_with(&[("A", "Lightweight", 0, 0, Ranking::Unranked)]);
        let before = roster.clone();

        assert!(!roster.delete_fighter("B", "Lightweight"));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_delete_removes_exactly_one_duplicate() {
        let mut roster = roster_with(&[
            ("A", "Lightweight", 1, 0, Ranking::Unranked),
            ("A", "Lightweight", 2, 0, Ranking::Unranked),
        ]);

        assert!(roster.delete_fighter("A", "Lightweight"));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.fighters()[0].wins, 2);
    }

    #[test]
    fn test_update_wins_only() {
        let mut roster = roster_with(&[("A", "Lightweight", 5, 2, Ranking::Ranked(4))]);

        assert!(roster.update_fighter("A", "Lightweight", Some(6), None, None));
        let fighter = roster.find_fighter("A", "Lightweight").unwrap();
        assert_eq!(fighter.wins, 6);
        assert_eq!(fighter.losses, 2);
        assert_eq!(fighter.ranking, Ranking::Ranked(4));
    }

    #[test]
    fn test_update_absent_returns_false() {
        let mut roster = Roster::new();
        assert!(!roster.update_fighter("A", "Lightweight", Some(1), None, None));
    }

    #[test]
    fn test_record_fight() {
        let mut roster = roster_with(&[("A", "Lightweight", 0, 0, Ranking::Unranked)]);

        assert!(roster.record_fight("A", "Lightweight", "B", "win"));
        assert!(roster.record_fight("A", "Lightweight", "C", "loss"));

        let history = &roster.find_fighter("A", "Lightweight").unwrap().fight_history;
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].opponent, "B");
        assert_eq!(history[1].result, "loss");
    }

    #[test]
    fn test_record_fight_absent_returns_false() {
        let mut roster = Roster::new();
        assert!(!roster.record_fight("A", "Lightweight", "B", "win"));
    }

    #[test]
    fn test_list_orders_by_ranking_tiers() {
        // Inserted as [Champion, 3, 1, unranked]; listing must return
        // [Champion, 1, 3, unranked].
        let mut roster = roster_with(&[
            ("Champ", "Lightweight", 0, 0, Ranking::Champion),
            ("Third", "Lightweight", 0, 0, Ranking::Ranked(3)),
            ("First", "Lightweight", 0, 0, Ranking::Ranked(1)),
            ("Nobody", "Lightweight", 0, 0, Ranking::Unranked),
        ]);

        let names: Vec<&str> = roster
            .list_fighters(None)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["Champ", "First", "Third", "Nobody"]);
    }

    #[test]
    fn test_list_groups_by_weight_class_first() {
        let mut roster = roster_with(&[
            ("W1", "Welterweight", 0, 0, Ranking::Champion),
            ("L2", "Lightweight", 0, 0, Ranking::Ranked(2)),
            ("L1", "Lightweight", 0, 0, Ranking::Champion),
            ("W2", "Welterweight", 0, 0, Ranking::Ranked(1)),
        ]);

        let names: Vec<&str> = roster
            .list_fighters(None)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["L1", "L2", "W1", "W2"]);
    }

    #[test]
    fn test_list_filter_by_weight_class() {
        let mut roster = roster_with(&[
            ("Jon Jones", "Heavyweight", 27, 1, Ranking::Champion),
            ("Islam Makhachev", "Lightweight", 26, 1, Ranking::Champion),
            ("Tom Aspinall", "Heavyweight", 15, 3, Ranking::Ranked(1)),
        ]);

        let heavyweights: Vec<String> = roster
            .list_fighters(Some("Heavyweight"))
            .iter()
            .map(|f| f.to_string())
            .collect();
        assert_eq!(
            heavyweights,
            [
                "C. Jon Jones, Wins: 27, Losses: 1, Weight Class: Heavyweight",
                "1. Tom Aspinall, Wins: 15, Losses: 3, Weight Class: Heavyweight",
            ]
        );
    }

    #[test]
    fn test_list_filter_unknown_class_is_empty() {
        let mut roster = roster_with(&[("A", "Lightweight", 0, 0, Ranking::Unranked)]);
        assert!(roster.list_fighters(Some("Strawweight")).is_empty());
    }

    #[test]
    fn test_list_sort_is_stable_for_equal_keys() {
        let mut roster = roster_with(&[
            ("First In", "Lightweight", 0, 0, Ranking::Unranked),
            ("Second In", "Lightweight", 0, 0, Ranking::Unranked),
        ]);

        let names: Vec<&str> = roster
            .list_fighters(None)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["First In", "Second In"]);
    }

    #[test]
    fn test_list_resorts_after_update() {
        let mut roster = roster_with(&[
            ("A", "Lightweight", 0, 0, Ranking::Ranked(1)),
            ("B", "Lightweight", 0, 0, Ranking::Ranked(2)),
        ]);
        let _ = roster.list_fighters(None);

        // Swap the order via an update; the next listing must reflect it.
        assert!(roster.update_fighter("B", "Lightweight", None, None, Some(Ranking::Champion)));
        let names: Vec<&str> = roster
            .list_fighters(None)
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["B", "A"]);
    }

    #[test]
    fn test_len_and_is_empty() {
        let mut roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);

        roster.add_fighter("A", "Lightweight", 0, 0, Ranking::Unranked);
        assert!(!roster.is_empty());
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn test_from_fighters_keeps_order() {
        let fighters = vec![
            Fighter::new("B", "Lightweight", 0, 0, Ranking::Unranked),
            Fighter::new("A", "Lightweight", 0, 0, Ranking::Champion),
        ];
        let roster = Roster::from_fighters(fighters.clone());
        assert_eq!(roster.fighters(), fighters.as_slice());
        assert_eq!(roster.into_fighters(), fighters);
    }
}
