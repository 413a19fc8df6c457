//! # Command Layer
//!
//! Business operations over the [`Registry`](crate::registry::Registry) and a
//! [`TeamStore`](crate::store::TeamStore). Each operation returns a
//! [`CmdResult`]: the data a UI needs to re-render plus user-facing messages.
//! Nothing here prints.

use crate::model::Team;

pub mod list;
pub mod persist;
pub mod points;
pub mod teams;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    /// Snapshot for list views.
    pub listed_teams: Vec<Team>,
    pub total: Option<u64>,
    /// Set when the registry changed and open views need to be redrawn.
    pub mutated: bool,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_message(mut self, message: CmdMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn with_listed_teams(mut self, teams: Vec<Team>) -> Self {
        self.listed_teams = teams;
        self
    }

    pub fn with_total(mut self, total: u64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn mutated(mut self) -> Self {
        self.mutated = true;
        self
    }
}
