//! Collection wrapper types for displaying groups of domain objects.

use std::{fmt, ops::Index};

use crate::{
    agenda::StageEvent,
    models::PlotSummary,
};

/// Newtype wrapper for displaying a list of plot summaries.
///
/// # Examples
///
/// ```rust
/// use plotline_core::{
///     display::Summaries,
///     models::{PlotId, PlotSummary, ScheduleStatus},
/// };
///
/// let summary = PlotSummary {
///     id: PlotId::from("p1"),
///     name: "Plot 1".to_string(),
///     current_stage: "Roofing".to_string(),
///     progress: 40,
///     days_remaining: 30,
///     status: ScheduleStatus::Ahead,
///     days_ahead_or_behind: 2,
/// };
///
/// let output = Summaries(vec![summary]).to_string();
/// assert!(output.contains("Plot 1 (40%)"));
/// assert_eq!(Summaries(vec![]).to_string(), "No plots found.\n");
/// ```
pub struct Summaries(pub Vec<PlotSummary>);

impl Summaries {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, index: usize) -> Option<&PlotSummary> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlotSummary> {
        self.0.iter()
    }
}

impl Index<usize> for Summaries {
    type Output = PlotSummary;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<'a> IntoIterator for &'a Summaries {
    type Item = &'a PlotSummary;
    type IntoIter = std::slice::Iter<'a, PlotSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Summaries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            writeln!(f, "No plots found.")
        } else {
            for summary in &self.0 {
                write!(f, "{summary}")?;
            }
            Ok(())
        }
    }
}

/// Stage milestones for one day, one list item each.
pub struct StageEvents(pub Vec<StageEvent>);

impl StageEvents {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for StageEvents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No stage events on this date.");
        }
        for event in &self.0 {
            writeln!(
                f,
                "- **{}**: {} {}",
                event.plot_name,
                event.stage_name,
                event.kind.as_str()
            )?;
        }
        Ok(())
    }
}
