//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use jiff::tz::TimeZone;

use super::datetime::InZone;
use crate::models::Plot;

/// Wrapper for displaying a newly created plot.
///
/// # Examples
///
/// ```rust
/// use plotline_core::{display::CreateResult, params::CreatePlot, Clock, TrackerBuilder};
///
/// let tracker = TrackerBuilder::new()
///     .with_clock(Clock::Fixed("2024-03-04T09:00:00Z".parse().unwrap()))
///     .build()
///     .unwrap();
/// let plot = tracker
///     .create_plot(&CreatePlot {
///         name: "Plot 1".to_string(),
///         address: "1 Mill Lane".to_string(),
///         start_date: "2024-03-04".to_string(),
///         end_date: "2024-09-30".to_string(),
///     })
///     .unwrap();
///
/// let output = CreateResult::new(plot, tracker.time_zone().clone()).to_string();
/// assert!(output.starts_with("Created plot 'Plot 1'"));
/// ```
pub struct CreateResult<T> {
    pub resource: T,
    /// Zone the resource's dates are shown in
    pub tz: TimeZone,
}

impl<T> CreateResult<T> {
    pub fn new(resource: T, tz: TimeZone) -> Self {
        Self { resource, tz }
    }
}

impl fmt::Display for CreateResult<Plot> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Created plot '{}' with ID: {}",
            self.resource.name, self.resource.id
        )?;
        writeln!(f)?;
        write!(f, "{}", InZone::new(&self.resource, &self.tz))
    }
}

/// Wrapper for displaying an updated plot together with what changed.
pub struct UpdateResult<T> {
    pub resource: T,
    pub changes: Vec<String>,
    pub tz: TimeZone,
}

impl<T> UpdateResult<T> {
    pub fn with_changes(resource: T, changes: Vec<String>, tz: TimeZone) -> Self {
        Self {
            resource,
            changes,
            tz,
        }
    }
}

impl fmt::Display for UpdateResult<Plot> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated plot '{}'", self.resource.name)?;

        if !self.changes.is_empty() {
            writeln!(f)?;
            writeln!(f, "Changes made:")?;
            for change in &self.changes {
                writeln!(f, "- {change}")?;
            }
        }

        writeln!(f)?;
        write!(f, "{}", InZone::new(&self.resource, &self.tz))
    }
}

pub struct DeleteResult<T> {
    pub resource: T,
}

impl<T> DeleteResult<T> {
    pub fn new(resource: T) -> Self {
        Self { resource }
    }
}

impl fmt::Display for DeleteResult<Plot> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted plot '{}' (ID: {})",
            self.resource.name, self.resource.id
        )
    }
}

#[cfg(test)]
mod tests {
    use jiff::tz;

    use super::*;
    use crate::{calendar::WorkCalendar, catalog::StageCatalog, factory::create_plot};

    fn plot_in(tz: &TimeZone) -> Plot {
        let calendar = WorkCalendar::new(tz.clone());
        let start = calendar.parse("2024-03-04").unwrap();
        let end = calendar.parse("2024-09-30").unwrap();
        create_plot(
            &StageCatalog::default(),
            &calendar,
            "Plot 5",
            "5 Mill Lane",
            start,
            end,
            start,
        )
        .unwrap()
    }

    #[test]
    fn test_update_result_lists_changes() {
        let plot = plot_in(&TimeZone::UTC);
        let output = UpdateResult::with_changes(
            plot,
            vec!["Stage 'Foundations' is now completed".to_string()],
            TimeZone::UTC,
        )
        .to_string();

        assert!(output.starts_with("Updated plot 'Plot 5'\n"));
        assert!(output.contains("Changes made:\n- Stage 'Foundations' is now completed"));
        assert!(output.contains("# Plot 5"));
    }

    #[test]
    fn test_create_result_shows_dates_in_its_zone() {
        let east = TimeZone::fixed(tz::offset(14));
        let output = CreateResult::new(plot_in(&east), east).to_string();

        assert!(output.starts_with("Created plot 'Plot 5' with ID: "));
        assert!(output.contains("- Start: 04 Mar 2024"));
        assert!(output.contains("- Planned: 04 Mar 2024 to 11 Mar 2024"));
    }
}
