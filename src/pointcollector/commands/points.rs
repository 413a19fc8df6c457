use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;

pub fn add(registry: &mut Registry, name: &str, points: u64) -> Result<CmdResult> {
    registry.add_points(name, points)?;
    Ok(CmdResult::default().mutated().with_message(CmdMessage::success(format!(
        "Added {} points to team '{}'.",
        points,
        name.trim()
    ))))
}

pub fn subtract(registry: &mut Registry, name: &str, points: u64) -> Result<CmdResult> {
    registry.subtract_points(name, points)?;
    Ok(CmdResult::default().mutated().with_message(CmdMessage::success(format!(
        "Deleted {} points from team '{}'.",
        points,
        name.trim()
    ))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::PointsError;
    use crate::store::memory::fixtures::registry_with;

    #[test]
    fn add_updates_total() {
        let mut registry = registry_with(&[("A", 2)]);
        let result = add(&mut registry, "A", 5).unwrap();

        assert!(result.mutated);
        assert_eq!(registry.get("A").unwrap().points, 7);
        assert_eq!(result.messages[0].content, "Added 5 points to team 'A'.");
    }

    #[test]
    fn subtract_updates_total() {
        let mut registry = registry_with(&[("A", 7)]);
        let result = subtract(&mut registry, "A", 3).unwrap();

        assert_eq!(registry.get("A").unwrap().points, 4);
        assert_eq!(result.messages[0].content, "Deleted 3 points from team 'A'.");
    }

    #[test]
    fn subtract_too_much_leaves_total() {
        let mut registry = registry_with(&[("A", 5)]);
        let err = subtract(&mut registry, "A", 10).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Cannot subtract 10 points from team 'A' as it has only 5 points."
        );
        assert!(matches!(err, PointsError::InsufficientPoints { .. }));
        assert_eq!(registry.get("A").unwrap().points, 5);
    }

    #[test]
    fn points_for_unknown_team_fail() {
        let mut registry = Registry::new();
        assert!(matches!(
            add(&mut registry, "A", 1),
            Err(PointsError::UnknownTeam(_))
        ));
        assert!(matches!(
            subtract(&mut registry, "A", 1),
            Err(PointsError::UnknownTeam(_))
        ));
    }
}
