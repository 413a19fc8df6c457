//! Bar chart model for the team overview.
//!
//! One bar per team, scaled against the highest total. Bars grow from empty
//! to full over a fixed number of animation steps; a front end calls
//! [`BarChart::tick`] once per frame and redraws until [`BarChart::is_finished`].
//! Animation progress is the only state, and it has no bearing on the totals shown.

use crate::model::Team;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub name: String,
    pub points: u64,
    /// Full bar length as a fraction of the longest bar, in `0.0..=1.0`.
    pub fraction: f64,
    step: u32,
    steps: u32,
}

impl Bar {
    /// Fraction of the full bar currently drawn.
    pub fn progress(&self) -> f64 {
        f64::from(self.step) / f64::from(self.steps)
    }

    /// Current length of the bar when the longest full bar is `width` cells.
    pub fn length(&self, width: usize) -> usize {
        (self.fraction * self.progress() * width as f64).round() as usize
    }

    pub fn is_finished(&self) -> bool {
        self.step >= self.steps
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    bars: Vec<Bar>,
}

impl BarChart {
    /// Builds a chart whose bars start empty and grow over `steps` frames.
    ///
    /// A highest total of zero is scaled as one, so an all-zero chart draws
    /// empty bars.
    pub fn new(teams: &[Team], steps: u32) -> Self {
        let steps = steps.max(1);
        let max_points = teams.iter().map(|t| t.points).max().unwrap_or(0).max(1);
        let bars = teams
            .iter()
            .map(|t| Bar {
                name: t.name.clone(),
                points: t.points,
                fraction: t.points as f64 / max_points as f64,
                step: 0,
                steps,
            })
            .collect();
        Self { bars }
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.bars.iter().all(Bar::is_finished)
    }

    /// Advances every unfinished bar by one step. Returns false once nothing moved.
    pub fn tick(&mut self) -> bool {
        let mut moved = false;
        for bar in self.bars.iter_mut().filter(|b| !b.is_finished()) {
            bar.step += 1;
            moved = true;
        }
        moved
    }

    /// Jumps every bar to its full length.
    pub fn finish(&mut self) {
        for bar in &mut self.bars {
            bar.step = bar.steps;
        }
    }
}
