//! Calendar view of stage milestones.
//!
//! Lists which stages are planned to start or end, or actually started or
//! ended, on a given civil date. Stages that were closed by a later
//! completion cascade are left out, since their actual dates record the
//! cascade and not real site activity.

use jiff::{civil::Date, Timestamp};
use serde::{Deserialize, Serialize};

use crate::{
    calendar::WorkCalendar,
    models::{Plot, PlotId, Stage, StageId},
};

/// Which milestone of a stage falls on the date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageEventKind {
    PlannedStart,
    PlannedEnd,
    ActualStart,
    ActualEnd,
}

impl StageEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StageEventKind::PlannedStart => "planned start",
            StageEventKind::PlannedEnd => "planned end",
            StageEventKind::ActualStart => "started",
            StageEventKind::ActualEnd => "finished",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageEvent {
    pub plot_id: PlotId,
    pub plot_name: String,
    pub stage_id: StageId,
    pub stage_name: String,
    pub kind: StageEventKind,
    pub at: Timestamp,
}

/// Every stage milestone across `plots` that falls on `date` in the
/// calendar's time zone, in plot then stage order.
pub fn stage_events_on(plots: &[Plot], date: Date, calendar: &WorkCalendar) -> Vec<StageEvent> {
    let mut events = Vec::new();

    for plot in plots {
        for stage in plot.stages.iter().filter(|s| !s.auto_completed) {
            for (kind, at) in milestones(stage) {
                if calendar.date_of(at) == date {
                    events.push(StageEvent {
                        plot_id: plot.id.clone(),
                        plot_name: plot.name.clone(),
                        stage_id: stage.id.clone(),
                        stage_name: stage.name.clone(),
                        kind,
                        at,
                    });
                }
            }
        }
    }

    events
}

fn milestones(stage: &Stage) -> Vec<(StageEventKind, Timestamp)> {
    let mut out = vec![
        (StageEventKind::PlannedStart, stage.planned_start_date),
        (StageEventKind::PlannedEnd, stage.planned_end_date),
    ];
    if let Some(at) = stage.actual_start_date {
        out.push((StageEventKind::ActualStart, at));
    }
    if let Some(at) = stage.actual_end_date {
        out.push((StageEventKind::ActualEnd, at));
    }
    out
}
