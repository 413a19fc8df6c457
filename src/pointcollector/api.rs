//! # API Facade
//!
//! A thin facade over the command layer and the single entry point for every
//! front end (the prompt loop, the dashboard session, one-shot commands).
//!
//! `PointsApi` owns the in-memory [`Registry`] and the [`TeamStore`]. Mutations
//! only touch the registry; the store is used on explicit `save`/`load` only.
//!
//! The API does no business logic (that lives in `commands/*.rs`), no I/O
//! beyond the store, and returns structured [`CmdResult`]s rather than strings.
//!
//! Generic over `TeamStore`:
//! - Production: `PointsApi<FileStore>`
//! - Testing: `PointsApi<InMemoryStore>`

use crate::commands;
use crate::error::Result;
use crate::registry::Registry;
use crate::store::TeamStore;

pub struct PointsApi<S: TeamStore> {
    registry: Registry,
    store: S,
}

impl<S: TeamStore> PointsApi<S> {
    /// Starts with an empty registry. Nothing is loaded until [`load`](Self::load).
    pub fn new(store: S) -> Self {
        Self {
            registry: Registry::new(),
            store,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_team(&mut self, name: &str) -> Result<CmdResult> {
        commands::teams::add(&mut self.registry, name)
    }

    pub fn rename_team(&mut self, old: &str, new: &str) -> Result<CmdResult> {
        commands::teams::rename(&mut self.registry, old, new)
    }

    pub fn delete_team(&mut self, name: &str) -> Result<CmdResult> {
        commands::teams::delete(&mut self.registry, name)
    }

    pub fn add_points(&mut self, name: &str, points: u64) -> Result<CmdResult> {
        commands::points::add(&mut self.registry, name, points)
    }

    pub fn subtract_points(&mut self, name: &str, points: u64) -> Result<CmdResult> {
        commands::points::subtract(&mut self.registry, name, points)
    }

    pub fn list_teams(&self, sorted_by_points: bool) -> Result<CmdResult> {
        commands::list::run(&self.registry, sorted_by_points)
    }

    pub fn total_points(&self) -> Result<CmdResult> {
        commands::list::total(&self.registry)
    }

    pub fn save(&mut self) -> Result<CmdResult> {
        commands::persist::save(&mut self.store, &self.registry)
    }

    pub fn load(&mut self) -> Result<CmdResult> {
        commands::persist::load(&self.store, &mut self.registry)
    }
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PointsError;
    use crate::store::memory::InMemoryStore;

    fn api() -> PointsApi<InMemoryStore> {
        PointsApi::new(InMemoryStore::new())
    }

    #[test]
    fn starts_empty() {
        assert!(api().registry().is_empty());
    }

    #[test]
    fn dispatches_team_and_point_commands() {
        let mut api = api();
        api.add_team("Alpha").unwrap();
        api.add_points("Alpha", 10).unwrap();
        api.subtract_points("Alpha", 4).unwrap();
        api.rename_team("Alpha", "Omega").unwrap();

        assert_eq!(api.registry().get("Omega").unwrap().points, 6);

        api.delete_team("Omega").unwrap();
        assert!(api.registry().is_empty());
    }

    #[test]
    fn save_and_load_go_through_store() {
        let mut api = api();
        api.add_team("Alpha").unwrap();
        api.add_points("Alpha", 12).unwrap();
        api.add_team("Beta").unwrap();
        api.save().unwrap();
        assert!(api.store().saved_content().is_some());

        api.delete_team("Alpha").unwrap();
        api.load().unwrap();

        let listed = api.list_teams(false).unwrap().listed_teams;
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].name, "Alpha");
        assert_eq!(listed[0].points, 12);
    }

    #[test]
    fn load_without_save_reports_file_not_found() {
        let mut api = api();
        api.add_team("Alpha").unwrap();

        assert!(matches!(api.load(), Err(PointsError::FileNotFound(_))));
        assert!(api.registry().contains("Alpha"));
    }

    #[test]
    fn total_points_reads_registry() {
        let mut api = api();
        api.add_team("A").unwrap();
        api.add_points("A", 3).unwrap();
        api.add_team("B").unwrap();
        api.add_points("B", 9).unwrap();
        assert_eq!(api.total_points().unwrap().total, Some(12));
    }
}
