use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;
use crate::store::TeamStore;

pub fn save<S: TeamStore>(store: &mut S, registry: &Registry) -> Result<CmdResult> {
    store.save(registry)?;
    Ok(CmdResult::default().with_message(CmdMessage::success(format!(
        "Teams saved to '{}'.",
        store.location()
    ))))
}

/// Replaces `registry` with the stored teams.
///
/// On any error `registry` is left exactly as it was.
pub fn load<S: TeamStore>(store: &S, registry: &mut Registry) -> Result<CmdResult> {
    let loaded = store.load()?;
    *registry = loaded;
    Ok(CmdResult::default()
        .with_listed_teams(registry.list_teams(false))
        .with_message(CmdMessage::success(format!(
            "Teams loaded from '{}'.",
            store.location()
        )))
        .mutated())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PointsError;
    use crate::store::memory::fixtures::registry_with;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn save_then_load_round_trips() {
        let mut store = InMemoryStore::new();
        let original = registry_with(&[("Alpha", 12), ("Beta", 0)]);
        save(&mut store, &original).unwrap();

        let mut registry = registry_with(&[("Other", 1)]);
        let result = load(&store, &mut registry).unwrap();

        assert_eq!(registry, original);
        assert!(result.mutated);
        assert_eq!(result.listed_teams.len(), 2);
    }

    #[test]
    fn load_missing_keeps_current_registry() {
        let store = InMemoryStore::new();
        let mut registry = registry_with(&[("Alpha", 12)]);

        let err = load(&store, &mut registry).unwrap_err();

        assert!(matches!(err, PointsError::FileNotFound(_)));
        assert_eq!(registry, registry_with(&[("Alpha", 12)]));
    }

    #[test]
    fn load_invalid_points_keeps_current_registry() {
        let store = InMemoryStore::with_content(r#"{"Alpha": "lots"}"#);
        let mut registry = registry_with(&[("Beta", 3)]);

        let err = load(&store, &mut registry).unwrap_err();

        assert!(matches!(err, PointsError::InvalidPointValue(_)));
        assert_eq!(registry, registry_with(&[("Beta", 3)]));
    }

    #[test]
    fn save_message_names_location() {
        let mut store = InMemoryStore::new();
        let result = save(&mut store, &Registry::new()).unwrap();
        assert_eq!(result.messages[0].content, "Teams saved to 'memory'.");
    }
}
