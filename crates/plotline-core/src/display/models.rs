//! Display implementations for domain models.
//!
//! All output is markdown so the CLI can render it with rich formatting or
//! print it as plain text. Models that carry timestamps are displayed through
//! [`InZone`].

use std::fmt;

use super::datetime::InZone;
use crate::{
    catalog::StageCatalog,
    models::{
        Delay, Issue, Plot, PlotSummary, ScheduleStatus, Stage, StageStatus, NO_CURRENT_STAGE,
    },
};

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Human phrasing of a schedule position, e.g. `3 days ahead`.
pub(crate) fn schedule_phrase(status: ScheduleStatus, days: u32) -> String {
    let unit = if days == 1 { "day" } else { "days" };
    match status {
        ScheduleStatus::OnSchedule => "On schedule".to_string(),
        ScheduleStatus::Ahead => format!("{days} {unit} ahead"),
        ScheduleStatus::Behind => format!("{days} {unit} behind"),
    }
}

impl fmt::Display for InZone<'_, Plot> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let plot = self.value;
        writeln!(f, "# {}", plot.name)?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", plot.id)?;
        writeln!(f, "- Address: {}", plot.address)?;
        writeln!(f, "- Start: {}", self.date(&plot.start_date))?;
        writeln!(f, "- Target completion: {}", self.date(&plot.end_date))?;
        writeln!(
            f,
            "- Current stage: {}",
            plot.current_stage()
                .map(|s| s.name.as_str())
                .unwrap_or(NO_CURRENT_STAGE)
        )?;
        writeln!(
            f,
            "- Stages completed: {}/{}",
            plot.completed_stage_count(),
            plot.stages.len()
        )?;
        writeln!(f, "- Updated: {}", self.date_time(&plot.updated_at))?;

        if !plot.notes.is_empty() {
            writeln!(f, "\n## Notes")?;
            writeln!(f)?;
            writeln!(f, "{}", plot.notes)?;
        }

        writeln!(f, "\n## Stages")?;
        writeln!(f)?;
        for stage in &plot.stages {
            write!(f, "{}", self.with(stage))?;
        }

        Ok(())
    }
}

impl fmt::Display for InZone<'_, Stage> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let stage = self.value;
        writeln!(f, "### {} ({})", stage.name, stage.status.with_icon())?;
        writeln!(f)?;

        writeln!(f, "- ID: {}", stage.id)?;
        writeln!(f, "- Duration: {} work days", stage.duration)?;
        writeln!(
            f,
            "- Planned: {} to {}",
            self.date(&stage.planned_start_date),
            self.date(&stage.planned_end_date)
        )?;
        if let Some(started) = &stage.actual_start_date {
            writeln!(f, "- Started: {}", self.date(started))?;
        }
        if let Some(finished) = &stage.actual_end_date {
            let marker = if stage.auto_completed {
                " (auto-completed)"
            } else {
                ""
            };
            writeln!(f, "- Finished: {}{marker}", self.date(finished))?;
        }
        writeln!(f)?;

        if !stage.issues.is_empty() {
            writeln!(f, "#### Issues")?;
            writeln!(f)?;
            for issue in &stage.issues {
                writeln!(f, "{}", self.with(issue))?;
            }
            writeln!(f)?;
        }

        if !stage.delays.is_empty() {
            writeln!(f, "#### Delays ({} days)", stage.total_delay_days())?;
            writeln!(f)?;
            for delay in &stage.delays {
                writeln!(f, "{}", self.with(delay))?;
            }
            writeln!(f)?;
        }

        if !stage.notes.is_empty() {
            writeln!(f, "#### Notes")?;
            writeln!(f)?;
            writeln!(f, "{}", stage.notes)?;
            writeln!(f)?;
        }

        Ok(())
    }
}

/// A single markdown list item, without a trailing newline.
impl fmt::Display for InZone<'_, Issue> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let issue = self.value;
        let mark = if issue.resolved { "x" } else { " " };
        write!(f, "- [{mark}] {} (ID: {})", issue.description, issue.id)?;
        if let Some(at) = &issue.resolved_at {
            write!(f, ", resolved {}", self.date(at))?;
        }
        Ok(())
    }
}

impl fmt::Display for InZone<'_, Delay> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let delay = self.value;
        write!(
            f,
            "- +{} days: {} (recorded {})",
            delay.days_added,
            delay.reason,
            self.date(&delay.created_at)
        )
    }
}

impl fmt::Display for PlotSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({}%)", self.name, self.progress)?;
        writeln!(f)?;
        writeln!(f, "- **ID**: {}", self.id)?;
        writeln!(f, "- **Current stage**: {}", self.current_stage)?;
        writeln!(f, "- **Days remaining**: {}", self.days_remaining)?;
        writeln!(
            f,
            "- **Schedule**: {}",
            schedule_phrase(self.status, self.days_ahead_or_behind)
        )?;
        writeln!(f)?;
        Ok(())
    }
}

impl fmt::Display for StageCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Stage Catalog")?;
        writeln!(f)?;
        for (index, template) in self.iter().enumerate() {
            writeln!(
                f,
                "{}. {} ({} work days)",
                index + 1,
                template.name,
                template.duration
            )?;
        }
        writeln!(f)?;
        writeln!(f, "Total: {} work days", self.total_duration())
    }
}

#[cfg(test)]
mod tests {
    use jiff::{
        tz::{self, TimeZone},
        Timestamp,
    };

    use super::*;
    use crate::models::{PlotId, StageId};

    fn noon(day: &str) -> Timestamp {
        format!("{day}T12:00:00Z").parse().unwrap()
    }

    fn utc<T: ?Sized>(value: &T) -> String
    where
        for<'a> InZone<'a, T>: fmt::Display,
    {
        InZone::new(value, &TimeZone::UTC).to_string()
    }

    fn stage() -> Stage {
        Stage {
            id: StageId::from("s1"),
            name: "Roofing".to_string(),
            duration: 10,
            status: StageStatus::Delayed,
            planned_start_date: noon("2024-03-04"),
            planned_end_date: noon("2024-03-18"),
            actual_start_date: Some(noon("2024-03-05")),
            actual_end_date: None,
            notes: "2024-03-06: Tiles on site".to_string(),
            issues: vec![Issue::new("Ridge short", noon("2024-03-06"))],
            delays: vec![Delay::new("High wind", 2, noon("2024-03-07"))],
            auto_completed: false,
        }
    }

    #[test]
    fn test_catalog_display() {
        let output = StageCatalog::default().to_string();
        assert!(output.contains("1. Site Preparation (5 work days)"));
        assert!(output.contains("10. Snagging & Handover (5 work days)"));
        assert!(output.ends_with("Total: 89 work days\n"));
    }

    #[test]
    fn test_schedule_phrase() {
        assert_eq!(schedule_phrase(ScheduleStatus::Ahead, 3), "3 days ahead");
        assert_eq!(schedule_phrase(ScheduleStatus::Behind, 1), "1 day behind");
        assert_eq!(schedule_phrase(ScheduleStatus::OnSchedule, 0), "On schedule");
    }

    #[test]
    fn test_stage_display() {
        let output = utc(&stage());
        assert!(output.starts_with("### Roofing (⚠ Delayed)"));
        assert!(output.contains("- Planned: 04 Mar 2024 to 18 Mar 2024"));
        assert!(output.contains("- Started: 05 Mar 2024"));
        assert!(!output.contains("- Finished:"));
        assert!(output.contains("- [ ] Ridge short"));
        assert!(output.contains("#### Delays (2 days)"));
        assert!(output.contains("- +2 days: High wind (recorded 07 Mar 2024)"));
        assert!(output.contains("2024-03-06: Tiles on site"));
    }

    #[test]
    fn test_stage_dates_follow_zone() {
        // Midnight on Monday 4th at UTC+14 is still Sunday 3rd in UTC.
        let mut stage = stage();
        stage.planned_start_date = "2024-03-03T10:00:00Z".parse().unwrap();
        stage.planned_end_date = "2024-03-10T10:00:00Z".parse().unwrap();
        let east = TimeZone::fixed(tz::offset(14));

        let shown = InZone::new(&stage, &east).to_string();
        assert!(shown.contains("- Planned: 04 Mar 2024 to 11 Mar 2024"));
        assert!(utc(&stage).contains("- Planned: 03 Mar 2024 to 10 Mar 2024"));
    }

    #[test]
    fn test_auto_completed_marker() {
        let mut stage = stage();
        stage.status = StageStatus::Completed;
        stage.actual_end_date = Some(noon("2024-03-08"));
        stage.auto_completed = true;
        assert!(utc(&stage).contains("- Finished: 08 Mar 2024 (auto-completed)"));
    }

    #[test]
    fn test_plot_display() {
        let stage = stage();
        let plot = Plot {
            id: PlotId::from("p1"),
            name: "Plot 3".to_string(),
            address: "3 Kiln Road".to_string(),
            start_date: noon("2024-03-04"),
            end_date: noon("2024-06-28"),
            current_stage_id: stage.id.clone(),
            stages: vec![stage],
            notes: String::new(),
            created_at: noon("2024-03-01"),
            updated_at: noon("2024-03-07"),
        };

        let output = utc(&plot);
        assert!(output.starts_with("# Plot 3\n"));
        assert!(output.contains("- Address: 3 Kiln Road"));
        assert!(output.contains("- Target completion: 28 Jun 2024"));
        assert!(output.contains("- Current stage: Roofing"));
        assert!(output.contains("- Stages completed: 0/1"));
        assert!(!output.contains("## Notes"));
        assert!(output.contains("## Stages"));
    }

    #[test]
    fn test_summary_display() {
        let summary = PlotSummary {
            id: PlotId::from("p1"),
            name: "Plot 3".to_string(),
            current_stage: "Roofing".to_string(),
            progress: 40,
            days_remaining: 31,
            status: ScheduleStatus::Behind,
            days_ahead_or_behind: 4,
        };
        let output = summary.to_string();
        assert!(output.starts_with("## Plot 3 (40%)"));
        assert!(output.contains("- **Days remaining**: 31"));
        assert!(output.contains("- **Schedule**: 4 days behind"));
    }
}
