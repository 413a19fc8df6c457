//! # Command Prompt
//!
//! The line-oriented front end. Reads one command token per line; commands
//! that need a team name or a point value ask for it on the following lines.
//! Every failure is printed and the loop carries on; only `exit` (or the end
//! of input) stops it.
//!
//! The prompt is generic over its input and output so tests can drive it
//! with in-memory buffers.

use super::render::{
    animate_chart, render_chart, render_error, render_messages, render_team_list, render_total,
};
use console::Term;
use pointcollector::api::{CmdMessage, CmdResult};
use pointcollector::error::{PointsError, Result};
use pointcollector::session::{Action, Session, TeamAction};
use pointcollector::store::TeamStore;
use std::io::{BufRead, Write};
use std::time::Duration;

const BANNER: &str = "PointCollector 2025 version";
const FAREWELL: &str = "PointCollector 2025 session ended.\nThank you for using PointCollector 2025!\nGoodbye!";
const UNKNOWN_COMMAND: &str = "Unknown command. Type 'help' for a list of commands.";
const TEAM_PROMPT: &str = "Enter team name: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptCommand {
    Exit,
    Help,
    AddTeam,
    AddPoint,
    ShowTeams,
    ShowPoints,
    DeletePoint,
    DeleteTeam,
    Save,
    Load,
    RenameTeam,
    Sort,
    Graph,
    Sum,
    Hide,
}

impl PromptCommand {
    pub const ALL: [PromptCommand; 15] = [
        PromptCommand::Exit,
        PromptCommand::Help,
        PromptCommand::AddTeam,
        PromptCommand::AddPoint,
        PromptCommand::ShowTeams,
        PromptCommand::ShowPoints,
        PromptCommand::DeletePoint,
        PromptCommand::DeleteTeam,
        PromptCommand::Save,
        PromptCommand::Load,
        PromptCommand::RenameTeam,
        PromptCommand::Sort,
        PromptCommand::Graph,
        PromptCommand::Sum,
        PromptCommand::Hide,
    ];

    pub fn token(self) -> &'static str {
        match self {
            PromptCommand::Exit => "exit",
            PromptCommand::Help => "help",
            PromptCommand::AddTeam => "addteam",
            PromptCommand::AddPoint => "addpoint",
            PromptCommand::ShowTeams => "showteams",
            PromptCommand::ShowPoints => "showpoints",
            PromptCommand::DeletePoint => "deletepoint",
            PromptCommand::DeleteTeam => "deleteteam",
            PromptCommand::Save => "save",
            PromptCommand::Load => "load",
            PromptCommand::RenameTeam => "renameteam",
            PromptCommand::Sort => "sort",
            PromptCommand::Graph => "graph",
            PromptCommand::Sum => "sum",
            PromptCommand::Hide => "hide",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            PromptCommand::Exit => "leave the prompt",
            PromptCommand::Help => "show this list",
            PromptCommand::AddTeam => "create a team with zero points",
            PromptCommand::AddPoint => "add points to a team",
            PromptCommand::ShowTeams => "list teams in the order they were added",
            PromptCommand::ShowPoints => "list teams by points, with the total",
            PromptCommand::DeletePoint => "take points away from a team",
            PromptCommand::DeleteTeam => "remove a team",
            PromptCommand::Save => "write all teams to the data file",
            PromptCommand::Load => "replace all teams with the data file",
            PromptCommand::RenameTeam => "give a team a new name",
            PromptCommand::Sort => "list teams by points",
            PromptCommand::Graph => "draw a bar chart, redrawn after every change",
            PromptCommand::Sum => "show the point total, reprinted after every change",
            PromptCommand::Hide => "stop redrawing the chart and total",
        }
    }

    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        Self::ALL.into_iter().find(|cmd| cmd.token() == token)
    }
}

/// Chart animation target; only set when stdout is an interactive terminal.
pub struct Animation {
    pub term: Term,
    pub frame_delay: Duration,
}

pub struct Prompt<R, W, S: TeamStore> {
    input: R,
    output: W,
    session: Session<S>,
    chart_width: usize,
    animation: Option<Animation>,
}

impl<R: BufRead, W: Write, S: TeamStore> Prompt<R, W, S> {
    pub fn new(input: R, output: W, session: Session<S>, chart_width: usize) -> Self {
        Self {
            input,
            output,
            session,
            chart_width,
            animation: None,
        }
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "{}", BANNER)?;
        let command_prompt = format!(
            "Type a command ({}): ",
            PromptCommand::ALL
                .iter()
                .map(|c| format!("'{}'", c.token()))
                .collect::<Vec<_>>()
                .join(", ")
        );

        while let Some(line) = self.ask(&command_prompt)? {
            match PromptCommand::parse(&line) {
                Some(PromptCommand::Exit) => {
                    writeln!(self.output, "Exiting PointCollector 2025.")?;
                    break;
                }
                Some(cmd) => self.handle(cmd)?,
                None => write!(
                    self.output,
                    "{}",
                    render_messages(&[CmdMessage::error(UNKNOWN_COMMAND)])
                )?,
            }
        }

        writeln!(self.output, "{}", FAREWELL)?;
        self.output.flush()?;
        Ok(())
    }

    /// Prints `prompt` and reads one line. `None` means the input is exhausted.
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn handle(&mut self, cmd: PromptCommand) -> Result<()> {
        let outcome = match cmd {
            PromptCommand::Exit => return Ok(()),
            PromptCommand::Help => {
                self.print_help()?;
                return Ok(());
            }
            PromptCommand::AddTeam => {
                let Some(name) = self.ask(TEAM_PROMPT)? else {
                    return Ok(());
                };
                self.session.dispatch(Action::AddTeam(name))
            }
            PromptCommand::AddPoint | PromptCommand::DeletePoint => {
                let Some(name) = self.ask(TEAM_PROMPT)? else {
                    return Ok(());
                };
                if self.session.api().registry().contains(&name) {
                    let question = if cmd == PromptCommand::AddPoint {
                        "Enter points to add: "
                    } else {
                        "Enter points to delete: "
                    };
                    let Some(raw) = self.ask(question)? else {
                        return Ok(());
                    };
                    parse_points(&raw).and_then(|points| {
                        let action = if cmd == PromptCommand::AddPoint {
                            TeamAction::AddPoints(points)
                        } else {
                            TeamAction::SubtractPoints(points)
                        };
                        self.session.dispatch(Action::Team { name, action })
                    })
                } else {
                    Err(PointsError::UnknownTeam(name.trim().to_string()))
                }
            }
            PromptCommand::DeleteTeam => {
                let Some(name) = self.ask(TEAM_PROMPT)? else {
                    return Ok(());
                };
                self.session.dispatch(Action::Team {
                    name,
                    action: TeamAction::Delete,
                })
            }
            PromptCommand::RenameTeam => {
                let Some(name) = self.ask(TEAM_PROMPT)? else {
                    return Ok(());
                };
                if self.session.api().registry().contains(&name) {
                    let Some(new) = self.ask("Enter new team name: ")? else {
                        return Ok(());
                    };
                    self.session.dispatch(Action::Team {
                        name,
                        action: TeamAction::EditName(new),
                    })
                } else {
                    Err(PointsError::UnknownTeam(name.trim().to_string()))
                }
            }
            PromptCommand::ShowTeams => self.session.api().list_teams(false),
            PromptCommand::ShowPoints => self
                .session
                .api()
                .list_teams(true)
                .map(|r| r.with_total(self.session.api().registry().total_points())),
            PromptCommand::Save => self.session.dispatch(Action::Save),
            PromptCommand::Load => self.session.dispatch(Action::Load),
            PromptCommand::Sort => self.session.dispatch(Action::SortByPoints),
            PromptCommand::Graph => self.session.dispatch(Action::ShowGraph),
            PromptCommand::Sum => self.session.dispatch(Action::SumPoints),
            PromptCommand::Hide => self
                .session
                .dispatch(Action::CloseGraph)
                .and_then(|_| self.session.dispatch(Action::CloseTotal)),
        };

        match outcome {
            Ok(result) => self.show_result(cmd, &result),
            Err(e) => {
                write!(self.output, "{}", render_error(&e))?;
                Ok(())
            }
        }
    }

    fn show_result(&mut self, cmd: PromptCommand, result: &CmdResult) -> Result<()> {
        write!(self.output, "{}", render_messages(&result.messages))?;

        let heading = match cmd {
            PromptCommand::ShowPoints => "Points:",
            PromptCommand::Sort => "Teams by points:",
            _ => "Teams:",
        };
        write!(
            self.output,
            "{}",
            render_team_list(heading, &result.listed_teams)
        )?;

        if let Some(total) = result.total {
            write!(self.output, "{}", render_total(total))?;
        }

        if result.mutated || cmd == PromptCommand::Graph {
            self.draw_chart()?;
        }
        if result.mutated {
            if let Some(total) = self.session.total() {
                write!(self.output, "{}", render_total(total))?;
            }
        }
        Ok(())
    }

    fn draw_chart(&mut self) -> Result<()> {
        let width = self.chart_width;
        let Some(chart) = self.session.chart_mut() else {
            return Ok(());
        };
        match &self.animation {
            Some(animation) => {
                self.output.flush()?;
                animate_chart(&animation.term, chart, width, animation.frame_delay)?;
            }
            None => {
                chart.finish();
                write!(self.output, "{}", render_chart(chart, width))?;
            }
        }
        Ok(())
    }

    fn print_help(&mut self) -> Result<()> {
        writeln!(self.output, "Available commands:")?;
        for cmd in PromptCommand::ALL {
            writeln!(self.output, "  {:<12} {}", cmd.token(), cmd.description())?;
        }
        Ok(())
    }
}

fn parse_points(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    raw.parse::<u64>().map_err(|_| {
        PointsError::InvalidPointValue(format!("'{}' is not a whole number of points", raw))
    })
}
