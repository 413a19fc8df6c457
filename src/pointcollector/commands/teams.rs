use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;

pub fn add(registry: &mut Registry, name: &str) -> Result<CmdResult> {
    let team = registry.add_team(name)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Team '{}' added.", team.name)))
        .mutated())
}

pub fn rename(registry: &mut Registry, old: &str, new: &str) -> Result<CmdResult> {
    registry.rename_team(old, new)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!(
            "Team '{}' renamed to '{}'.",
            old.trim(),
            new.trim()
        )))
        .mutated())
}

pub fn delete(registry: &mut Registry, name: &str) -> Result<CmdResult> {
    let team = registry.delete_team(name)?;
    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Team '{}' deleted.", team.name)))
        .mutated())
}
