//! # Dashboard Session
//!
//! View state for an interactive front end: the team list, its sort mode, and
//! the optional chart and running-total views. A front end turns each user
//! gesture into an [`Action`], hands it to [`Session::dispatch`], and redraws
//! from the accessors afterwards.
//!
//! The chart and total views are `Option`s: `Some` only while open. After
//! any action that changes the registry, both open views are rebuilt from
//! the new state, and the list drops back to insertion order.

use crate::api::{CmdMessage, CmdResult, PointsApi};
use crate::chart::BarChart;
use crate::error::Result;
use crate::store::TeamStore;
use tracing::debug;

/// Per-team actions, as offered by a row's context menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamAction {
    AddPoints(u64),
    SubtractPoints(u64),
    EditName(String),
    Delete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    AddTeam(String),
    Team { name: String, action: TeamAction },
    Save,
    Load,
    SortByPoints,
    ShowGraph,
    SumPoints,
    CloseGraph,
    CloseTotal,
}

pub struct Session<S: TeamStore> {
    api: PointsApi<S>,
    sorted_view: bool,
    chart: Option<BarChart>,
    total: Option<u64>,
    animation_steps: u32,
}

impl<S: TeamStore> Session<S> {
    pub fn new(api: PointsApi<S>, animation_steps: u32) -> Self {
        Self {
            api,
            sorted_view: false,
            chart: None,
            total: None,
            animation_steps,
        }
    }

    pub fn api(&self) -> &PointsApi<S> {
        &self.api
    }

    pub fn is_sorted_view(&self) -> bool {
        self.sorted_view
    }

    /// List rows in the current view order, formatted `"name: N points"`.
    pub fn rows(&self) -> Vec<String> {
        self.api
            .registry()
            .list_teams(self.sorted_view)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    /// Team shown at `row` in the current view, if any.
    pub fn team_at_row(&self, row: usize) -> Option<String> {
        self.api
            .registry()
            .list_teams(self.sorted_view)
            .into_iter()
            .nth(row)
            .map(|t| t.name)
    }

    /// Builds the action for a context-menu entry on `row`.
    pub fn action_for_row(&self, row: usize, action: TeamAction) -> Option<Action> {
        self.team_at_row(row)
            .map(|name| Action::Team { name, action })
    }

    pub fn chart(&self) -> Option<&BarChart> {
        self.chart.as_ref()
    }

    pub fn chart_mut(&mut self) -> Option<&mut BarChart> {
        self.chart.as_mut()
    }

    pub fn total(&self) -> Option<u64> {
        self.total
    }

    pub fn dispatch(&mut self, action: Action) -> Result<CmdResult> {
        debug!(?action, "dispatching");
        let result = match action {
            Action::AddTeam(name) => self.api.add_team(&name)?,
            Action::Team { name, action } => match action {
                TeamAction::AddPoints(points) => self.api.add_points(&name, points)?,
                TeamAction::SubtractPoints(points) => self.api.subtract_points(&name, points)?,
                TeamAction::EditName(new) => self.api.rename_team(&name, &new)?,
                TeamAction::Delete => self.api.delete_team(&name)?,
            },
            Action::Save => self.api.save()?,
            Action::Load => self.api.load()?,
            Action::SortByPoints => {
                self.sorted_view = true;
                self.api.list_teams(true)?
            }
            Action::ShowGraph => self.open_chart(),
            Action::SumPoints => {
                if self.total.is_none() {
                    self.total = Some(self.api.registry().total_points());
                }
                self.api.total_points()?
            }
            Action::CloseGraph => {
                self.chart = None;
                CmdResult::default()
            }
            Action::CloseTotal => {
                self.total = None;
                CmdResult::default()
            }
        };

        if result.mutated {
            self.refresh();
        }
        Ok(result)
    }

    /// Opens the chart, or redraws it from scratch if already open.
    fn open_chart(&mut self) -> CmdResult {
        if self.api.registry().is_empty() {
            return CmdResult::default().with_message(CmdMessage::info("No teams to display."));
        }
        self.chart = Some(self.build_chart());
        CmdResult::default()
    }

    fn build_chart(&self) -> BarChart {
        BarChart::new(&self.api.registry().list_teams(false), self.animation_steps)
    }

    fn refresh(&mut self) {
        self.sorted_view = false;
        if self.chart.is_some() {
            self.chart = Some(self.build_chart());
        }
        if self.total.is_some() {
            self.total = Some(self.api.registry().total_points());
        }
    }
}
