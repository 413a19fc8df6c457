//! # Team Registry
//!
//! The in-memory mapping from team name to point total, and the only place
//! where teams and points are mutated.
//!
//! Teams are kept in insertion order in a `Vec`. Every lookup is a linear scan,
//! which keeps the name of each entry and its key the same thing: there is no
//! separate key that could drift from `Team::name`.
//!
//! Every operation either succeeds completely or returns an error and leaves
//! the registry as it was.

use crate::error::{PointsError, Result};
use crate::model::Team;
use tracing::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Registry {
    teams: Vec<Team>,
}

/// Trims a user supplied team name, rejecting names that are empty afterwards.
pub fn normalize_name(name: &str) -> Result<&str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(PointsError::InvalidTeamName);
    }
    Ok(trimmed)
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from already-named teams, keeping their order.
    ///
    /// Names are taken exactly as given. Fails on the first repeated name, or
    /// when the points together would not fit a `u64`.
    pub fn from_teams<I: IntoIterator<Item = Team>>(teams: I) -> Result<Self> {
        let mut registry = Self::new();
        let mut total = 0u64;
        for team in teams {
            if registry.teams.iter().any(|t| t.name == team.name) {
                return Err(PointsError::DuplicateTeam(team.name));
            }
            total = total.checked_add(team.points).ok_or_else(|| {
                PointsError::InvalidPointValue(format!(
                    "team '{}' pushes the total past {} points",
                    team.name,
                    u64::MAX
                ))
            })?;
            registry.teams.push(team);
        }
        Ok(registry)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Team> {
        self.teams.iter()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Team> {
        self.position(name).map(|i| &self.teams[i])
    }

    /// Exact name first, then the trimmed name as typed by a user.
    fn position(&self, name: &str) -> Option<usize> {
        self.teams
            .iter()
            .position(|t| t.name == name)
            .or_else(|| {
                let trimmed = name.trim();
                self.teams.iter().position(|t| t.name == trimmed)
            })
    }

    fn require(&self, name: &str) -> Result<usize> {
        self.position(name)
            .ok_or_else(|| PointsError::UnknownTeam(name.trim().to_string()))
    }

    /// Inserts a new team with zero points. An existing team is never overwritten.
    pub fn add_team(&mut self, name: &str) -> Result<&Team> {
        let name = normalize_name(name)?;
        if self.contains(name) {
            return Err(PointsError::DuplicateTeam(name.to_string()));
        }
        debug!(team = name, "adding team");
        self.teams.push(Team::new(name));
        Ok(&self.teams[self.teams.len() - 1])
    }

    /// Adds `delta` points and returns the team's new total.
    ///
    /// The points of all teams together always fit a `u64`; a delta that
    /// would break that is rejected.
    pub fn add_points(&mut self, name: &str, delta: u64) -> Result<u64> {
        let idx = self.require(name)?;
        if self.total_points().checked_add(delta).is_none() {
            return Err(PointsError::InvalidPointValue(format!(
                "adding {} points to team '{}' would overflow",
                delta, self.teams[idx].name
            )));
        }
        let team = &mut self.teams[idx];
        let total = team.points + delta;
        debug!(team = %team.name, delta, total, "adding points");
        team.points = total;
        Ok(total)
    }

    /// Subtracts `delta` points and returns the new total.
    ///
    /// A subtraction that would take the total below zero is rejected, not clamped.
    pub fn subtract_points(&mut self, name: &str, delta: u64) -> Result<u64> {
        let idx = self.require(name)?;
        let team = &mut self.teams[idx];
        if delta > team.points {
            return Err(PointsError::InsufficientPoints {
                team: team.name.clone(),
                requested: delta,
                available: team.points,
            });
        }
        team.points -= delta;
        debug!(team = %team.name, delta, total = team.points, "subtracting points");
        Ok(team.points)
    }

    /// Moves a team to a new name, keeping its points and its position.
    pub fn rename_team(&mut self, old: &str, new: &str) -> Result<()> {
        let idx = self.require(old)?;
        let new = normalize_name(new)?;
        if self.contains(new) {
            return Err(PointsError::DuplicateTeam(new.to_string()));
        }
        debug!(from = %self.teams[idx].name, to = new, "renaming team");
        self.teams[idx].name = new.to_string();
        Ok(())
    }

    /// Removes a team permanently and returns it.
    pub fn delete_team(&mut self, name: &str) -> Result<Team> {
        let idx = self.require(name)?;
        let team = self.teams.remove(idx);
        debug!(team = %team.name, "deleted team");
        Ok(team)
    }

    /// Returns a snapshot of the teams.
    ///
    /// Unsorted snapshots are in insertion order. Sorted snapshots are in
    /// descending point order; teams with equal points keep insertion order.
    pub fn list_teams(&self, sorted_by_points: bool) -> Vec<Team> {
        let mut teams = self.teams.clone();
        if sorted_by_points {
            teams.sort_by(|a, b| b.points.cmp(&a.points));
        }
        teams
    }

    pub fn total_points(&self) -> u64 {
        self.teams.iter().map(|t| t.points).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::registry_with;
    use proptest::prelude::*;

    fn names(teams: &[Team]) -> Vec<&str> {
        teams.iter().map(|t| t.name.as_str()).collect()
    }

    #[test]
    fn add_team_starts_at_zero() {
        let mut registry = Registry::new();
        let team = registry.add_team("Alpha").unwrap();
        assert_eq!(team.points, 0);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn add_team_twice_keeps_first_entry() {
        let mut registry = Registry::new();
        registry.add_team("X").unwrap();
        registry.add_points("X", 7).unwrap();

        let err = registry.add_team("X").unwrap_err();
        assert!(matches!(err, PointsError::DuplicateTeam(ref n) if n == "X"));
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("X").unwrap().points, 7);
    }

    #[test]
    fn add_team_trims_and_rejects_blank_names() {
        let mut registry = Registry::new();
        registry.add_team("  Gamma ").unwrap();
        assert!(registry.contains("Gamma"));
        assert!(matches!(
            registry.add_team("   "),
            Err(PointsError::InvalidTeamName)
        ));
    }

    #[test]
    fn add_points_to_unknown_team_fails() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.add_points("Nobody", 3),
            Err(PointsError::UnknownTeam(_))
        ));
    }

    #[test]
    fn add_points_rejects_overflow() {
        let mut registry = registry_with(&[("A", u64::MAX - 1)]);
        assert!(matches!(
            registry.add_points("A", 2),
            Err(PointsError::InvalidPointValue(_))
        ));
        assert_eq!(registry.get("A").unwrap().points, u64::MAX - 1);
    }

    #[test]
    fn subtract_more_than_available_is_rejected() {
        let mut registry = registry_with(&[("A", 5)]);
        let err = registry.subtract_points("A", 10).unwrap_err();
        assert!(matches!(
            err,
            PointsError::InsufficientPoints {
                requested: 10,
                available: 5,
                ..
            }
        ));
        assert_eq!(registry.get("A").unwrap().points, 5);
    }

    #[test]
    fn subtract_exact_total_reaches_zero() {
        let mut registry = registry_with(&[("A", 5)]);
        assert_eq!(registry.subtract_points("A", 5).unwrap(), 0);
    }

    #[test]
    fn subtract_from_unknown_team_fails() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.subtract_points("A", 1),
            Err(PointsError::UnknownTeam(_))
        ));
    }

    #[test]
    fn rename_keeps_points_and_position() {
        let mut registry = registry_with(&[("A", 1), ("B", 2), ("C", 3)]);
        registry.rename_team("B", "Bees").unwrap();

        let teams = registry.list_teams(false);
        assert_eq!(names(&teams), vec!["A", "Bees", "C"]);
        assert_eq!(registry.get("Bees").unwrap().points, 2);
        assert!(!registry.contains("B"));
    }

    #[test]
    fn rename_onto_existing_team_fails() {
        let mut registry = registry_with(&[("A", 1), ("B", 2)]);
        assert!(matches!(
            registry.rename_team("A", "B"),
            Err(PointsError::DuplicateTeam(_))
        ));
        assert!(matches!(
            registry.rename_team("A", "A"),
            Err(PointsError::DuplicateTeam(_))
        ));
        assert_eq!(registry, registry_with(&[("A", 1), ("B", 2)]));
    }

    #[test]
    fn rename_unknown_team_fails() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.rename_team("A", "B"),
            Err(PointsError::UnknownTeam(_))
        ));
    }

    #[test]
    fn delete_then_add_yields_fresh_team() {
        let mut registry = registry_with(&[("A", 40)]);
        let removed = registry.delete_team("A").unwrap();
        assert_eq!(removed.points, 40);
        assert!(registry.is_empty());

        registry.add_team("A").unwrap();
        assert_eq!(registry.get("A").unwrap().points, 0);
    }

    #[test]
    fn delete_unknown_team_fails() {
        let mut registry = Registry::new();
        assert!(matches!(
            registry.delete_team("A"),
            Err(PointsError::UnknownTeam(_))
        ));
    }

    #[test]
    fn list_unsorted_is_insertion_order() {
        let registry = registry_with(&[("A", 3), ("B", 9), ("C", 1)]);
        assert_eq!(names(&registry.list_teams(false)), vec!["A", "B", "C"]);
    }

    #[test]
    fn list_sorted_is_descending_by_points() {
        let registry = registry_with(&[("A", 3), ("B", 9), ("C", 1)]);
        assert_eq!(names(&registry.list_teams(true)), vec!["B", "A", "C"]);
    }

    #[test]
    fn sorted_ties_keep_insertion_order() {
        let registry = registry_with(&[("A", 2), ("B", 5), ("C", 2), ("D", 5)]);
        assert_eq!(
            names(&registry.list_teams(true)),
            vec!["B", "D", "A", "C"]
        );
    }

    #[test]
    fn snapshot_is_detached_from_later_mutations() {
        let mut registry = registry_with(&[("A", 3)]);
        let snapshot = registry.list_teams(false);
        registry.add_points("A", 10).unwrap();
        assert_eq!(snapshot[0].points, 3);
    }

    #[test]
    fn total_points_sums_all_teams() {
        assert_eq!(Registry::new().total_points(), 0);
        let registry = registry_with(&[("A", 3), ("B", 9), ("C", 1)]);
        assert_eq!(registry.total_points(), 13);
    }

    #[test]
    fn add_points_rejects_total_past_u64() {
        let mut registry = registry_with(&[("A", u64::MAX - 5), ("B", 0)]);
        assert!(matches!(
            registry.add_points("B", 6),
            Err(PointsError::InvalidPointValue(_))
        ));
        assert_eq!(registry.get("B").unwrap().points, 0);
        assert_eq!(registry.add_points("B", 5).unwrap(), 5);
        assert_eq!(registry.total_points(), u64::MAX);
    }

    #[test]
    fn from_teams_rejects_duplicates() {
        let result = Registry::from_teams(vec![Team::new("A"), Team::new("A")]);
        assert!(matches!(result, Err(PointsError::DuplicateTeam(_))));
    }

    #[test]
    fn from_teams_rejects_total_past_u64() {
        let result = Registry::from_teams(vec![
            Team::with_points("A", u64::MAX),
            Team::with_points("B", 5),
        ]);
        assert!(matches!(result, Err(PointsError::InvalidPointValue(_))));
    }

    #[test]
    fn from_teams_keeps_names_as_given() {
        let registry =
            Registry::from_teams(vec![Team::with_points(" Alpha ", 5), Team::new("")]).unwrap();
        assert_eq!(names(&registry.list_teams(false)), vec![" Alpha ", ""]);
        assert_eq!(registry.get(" Alpha ").unwrap().points, 5);
        assert!(!registry.contains("Alpha"));
    }

    #[test]
    fn stored_names_with_spaces_can_still_be_changed() {
        let mut registry = Registry::from_teams(vec![Team::with_points(" Alpha ", 5)]).unwrap();
        registry.add_points(" Alpha ", 1).unwrap();
        registry.rename_team(" Alpha ", "Alpha").unwrap();
        assert_eq!(registry.get("Alpha").unwrap().points, 6);
    }

    proptest! {
        #[test]
        fn final_total_is_sum_of_signed_deltas(
            deltas in proptest::collection::vec((any::<bool>(), 0u64..1_000), 0..64)
        ) {
            let mut registry = Registry::new();
            registry.add_team("T").unwrap();
            let mut expected: i128 = 0;

            for (add, delta) in deltas {
                if add {
                    registry.add_points("T", delta).unwrap();
                    expected += delta as i128;
                } else if (delta as i128) <= expected {
                    registry.subtract_points("T", delta).unwrap();
                    expected -= delta as i128;
                } else {
                    let before = registry.get("T").unwrap().points;
                    prop_assert!(registry.subtract_points("T", delta).is_err());
                    prop_assert_eq!(registry.get("T").unwrap().points, before);
                }
            }

            prop_assert_eq!(registry.get("T").unwrap().points as i128, expected);
        }
    }
}
