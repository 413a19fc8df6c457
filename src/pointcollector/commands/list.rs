use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::registry::Registry;

pub fn run(registry: &Registry, sorted_by_points: bool) -> Result<CmdResult> {
    let mut result = CmdResult::default().with_listed_teams(registry.list_teams(sorted_by_points));
    if registry.is_empty() {
        result.add_message(CmdMessage::info("No teams yet."));
    }
    Ok(result)
}

pub fn total(registry: &Registry) -> Result<CmdResult> {
    Ok(CmdResult::default().with_total(registry.total_points()))
}
