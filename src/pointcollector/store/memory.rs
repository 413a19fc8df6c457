use super::{format, TeamStore};
use crate::error::{PointsError, Result};
use crate::registry::Registry;
use std::path::PathBuf;

/// In-memory store for testing.
///
/// Keeps the last save as encoded JSON, so loads go through the same
/// decoding path as the file store.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<String>,
    simulate_write_error: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the store with raw stored content, as if read from disk.
    pub fn with_content(content: impl Into<String>) -> Self {
        Self {
            saved: Some(content.into()),
            simulate_write_error: false,
        }
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&mut self, simulate: bool) {
        self.simulate_write_error = simulate;
    }

    pub fn saved_content(&self) -> Option<&str> {
        self.saved.as_deref()
    }
}

impl TeamStore for InMemoryStore {
    fn save(&mut self, registry: &Registry) -> Result<()> {
        if self.simulate_write_error {
            return Err(PointsError::Io(std::io::Error::other(
                "simulated write error",
            )));
        }
        self.saved = Some(format::encode(registry)?);
        Ok(())
    }

    fn load(&self) -> Result<Registry> {
        match &self.saved {
            Some(content) => format::decode(content),
            None => Err(PointsError::FileNotFound(PathBuf::from(self.location()))),
        }
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use crate::model::Team;
    use crate::registry::Registry;

    /// Builds a registry from `(name, points)` pairs.
    pub fn registry_with(teams: &[(&str, u64)]) -> Registry {
        Registry::from_teams(teams.iter().map(|(n, p)| Team::with_points(*n, *p)))
            .expect("fixture teams must be unique and named")
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::registry_with;
    use super::*;

    #[test]
    fn load_before_save_is_file_not_found() {
        let store = InMemoryStore::new();
        assert!(matches!(store.load(), Err(PointsError::FileNotFound(_))));
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let registry = registry_with(&[("Alpha", 12), ("Beta", 0)]);
        store.save(&registry).unwrap();
        assert_eq!(store.load().unwrap(), registry);
    }

    #[test]
    fn simulated_write_error_keeps_previous_save() {
        let mut store = InMemoryStore::new();
        store.save(&registry_with(&[("A", 1)])).unwrap();
        store.set_simulate_write_error(true);

        assert!(matches!(
            store.save(&registry_with(&[("B", 2)])),
            Err(PointsError::Io(_))
        ));
        assert!(store.load().unwrap().contains("A"));
    }
}
