//! # Rendering
//!
//! Turns command results into terminal text. Every function here returns a
//! `String` ending in a newline (or an empty string), so callers decide where
//! it goes. Styling goes through [`STYLES`], which `console` strips when
//! stdout is not a color terminal.

use super::styles::STYLES;
use console::Term;
use pointcollector::api::{CmdMessage, MessageLevel};
use pointcollector::chart::BarChart;
use pointcollector::error::PointsError;
use pointcollector::model::Team;
use std::io;
use std::thread;
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

const BAR_CHAR: &str = "█";
const CHART_TITLE: &str = "Team Points Overview";

pub fn render_messages(messages: &[CmdMessage]) -> String {
    let mut out = String::new();
    for message in messages {
        let style = match message.level {
            MessageLevel::Info => &STYLES.info,
            MessageLevel::Success => &STYLES.success,
            MessageLevel::Error => &STYLES.error,
        };
        out.push_str(&format!("{}\n", style.apply_to(&message.content)));
    }
    out
}

pub fn render_error(error: &PointsError) -> String {
    format!("{}\n", STYLES.error.apply_to(error))
}

pub fn render_team_list(heading: &str, teams: &[Team]) -> String {
    if teams.is_empty() {
        return String::new();
    }
    let mut out = format!("{}\n", STYLES.heading.apply_to(heading));
    for team in teams {
        out.push_str(&format!("{}\n", team));
    }
    out
}

pub fn render_total(total: u64) -> String {
    format!(
        "{} {}\n",
        STYLES.heading.apply_to("Team point total:"),
        STYLES.total.apply_to(format!("{} points", total))
    )
}

/// Draws the chart at its current animation step, one line per team.
///
/// `width` is the length in cells of the bar for the highest total.
pub fn render_chart(chart: &BarChart, width: usize) -> String {
    let label_width = chart
        .bars()
        .iter()
        .map(|b| b.name.width())
        .max()
        .unwrap_or(0);

    let mut out = format!("{}\n", STYLES.heading.apply_to(CHART_TITLE));
    for bar in chart.bars() {
        let padding = " ".repeat(label_width - bar.name.width());
        let length = bar.length(width);
        let value = if bar.is_finished() {
            format!(" {}", bar.points)
        } else {
            String::new()
        };
        out.push_str(&format!(
            "  {}{} │{}{}\n",
            bar.name,
            padding,
            STYLES.bar.apply_to(BAR_CHAR.repeat(length)),
            value
        ));
    }
    out
}

/// Redraws the chart in place on `term`, one frame per animation step.
pub fn animate_chart(
    term: &Term,
    chart: &mut BarChart,
    width: usize,
    frame_delay: Duration,
) -> io::Result<()> {
    let mut drawn = 0;
    loop {
        if drawn > 0 {
            term.clear_last_lines(drawn)?;
        }
        let frame = render_chart(chart, width);
        term.write_str(&frame)?;
        drawn = frame.lines().count();

        if !chart.tick() {
            break;
        }
        thread::sleep(frame_delay);
    }
    term.flush()
}
