//! Schedule analysis: progress, remaining work and ahead/behind status.
//!
//! All figures are derived from the plot on demand. Remaining work is an
//! estimate in work days and is compared against the work days left until the
//! plot's end date.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    calendar::WorkCalendar,
    models::{Plot, PlotSummary, ScheduleStatus, StageStatus, NO_CURRENT_STAGE},
};

/// Ahead/behind classification with the size of the gap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleAssessment {
    pub status: ScheduleStatus,
    pub days_ahead_or_behind: u32,
}

/// Completed stages as a percentage of all stages, rounded half up.
///
/// Never reports 100 unless every stage is completed.
pub fn progress(plot: &Plot) -> u8 {
    let total = plot.stages.len();
    if total == 0 {
        return 0;
    }
    let completed = plot.completed_stage_count();
    let rounded = (200 * completed + total) / (2 * total);
    // 100 is reserved for a fully completed plot, even when a long stage list
    // would round 99.5 up.
    if rounded == 100 && completed < total {
        99
    } else {
        rounded as u8
    }
}

/// Estimated work days still needed to finish the plot.
///
/// Not-started stages count in full. An in-progress stage counts the part of
/// its duration not yet used up by the work days elapsed since its actual
/// start (the start day included). Every delay on every stage is added on
/// top, whatever that stage's status. Completed and delayed stages otherwise
/// contribute nothing. The total saturates at `u32::MAX`.
pub fn remaining_duration(plot: &Plot, calendar: &WorkCalendar, now: Timestamp) -> u32 {
    let stage_days: u32 = plot
        .stages
        .iter()
        .map(|stage| match (stage.status, stage.actual_start_date) {
            (StageStatus::NotStarted, _) => stage.duration,
            (StageStatus::InProgress, Some(started)) => stage
                .duration
                .saturating_sub(calendar.work_days_between(started, now)),
            _ => 0,
        })
        .fold(0, u32::saturating_add);

    stage_days.saturating_add(plot.total_delay_days())
}

/// Compares remaining work with the work days left until the end date.
pub fn assess(plot: &Plot, calendar: &WorkCalendar, now: Timestamp) -> ScheduleAssessment {
    let remaining = remaining_duration(plot, calendar, now);
    let available = calendar.work_days_between(now, plot.end_date);

    let (status, days_ahead_or_behind) = match remaining.cmp(&available) {
        std::cmp::Ordering::Less => (ScheduleStatus::Ahead, available - remaining),
        std::cmp::Ordering::Greater => (ScheduleStatus::Behind, remaining - available),
        std::cmp::Ordering::Equal => (ScheduleStatus::OnSchedule, 0),
    };

    ScheduleAssessment {
        status,
        days_ahead_or_behind,
    }
}

/// Builds the read-only summary shown on dashboards and in reports.
pub fn plot_summary(plot: &Plot, calendar: &WorkCalendar, now: Timestamp) -> PlotSummary {
    let assessment = assess(plot, calendar, now);

    PlotSummary {
        id: plot.id.clone(),
        name: plot.name.clone(),
        current_stage: plot
            .current_stage()
            .map(|s| s.name.clone())
            .unwrap_or_else(|| NO_CURRENT_STAGE.to_string()),
        progress: progress(plot),
        days_remaining: remaining_duration(plot, calendar, now),
        status: assessment.status,
        days_ahead_or_behind: assessment.days_ahead_or_behind,
    }
}
