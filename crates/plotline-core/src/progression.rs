//! Stage progression engine.
//!
//! Every operation takes the current plot by reference and returns a new plot
//! value; the input is never modified. An unknown stage or issue id yields the
//! matching `*NotFound` error and nothing else changes, so callers can keep
//! using the plot they already hold.
//!
//! # Status transitions
//!
//! ```text
//! not-started ──▶ in-progress ──▶ completed
//!      │               │              │
//!      └──── delay ────┴──▶ delayed ◀─┘ (delay)
//! ```
//!
//! `delayed` is left only through an explicit status update. Completing a
//! stage completes every earlier stage and moves the current-stage pointer.

use jiff::Timestamp;
use log::{debug, warn};

use crate::{
    calendar::WorkCalendar,
    error::{Result, TrackerError},
    models::{Delay, Issue, IssueId, Plot, StageId, StageStatus},
};

/// Sets a stage's status and applies the completion cascade.
///
/// When `status` is [`StageStatus::Completed`]:
/// - every earlier stage not yet completed is completed and flagged
///   `auto_completed`, with its actual start defaulted to `now` and its actual
///   end set to `now`;
/// - if the stage was the current stage, the pointer advances to the next
///   stage, which is forced into progress starting `now`;
/// - otherwise the pointer moves to the first stage that is not completed,
///   promoting it to in progress if it had not started, or to the last stage
///   once every stage is completed.
///
/// The target stage always has `auto_completed` cleared. Its actual start is
/// stamped on entering progress and its actual end on completion, in both
/// cases only if not already set.
pub fn update_stage_status(
    plot: &Plot,
    stage_id: &StageId,
    status: StageStatus,
    now: Timestamp,
) -> Result<Plot> {
    let index = locate_stage(plot, stage_id)?;
    let mut updated = plot.clone();

    if status == StageStatus::Completed {
        for stage in updated.stages[..index]
            .iter_mut()
            .filter(|s| !s.is_completed())
        {
            debug!("Auto-completing stage '{}' of plot {}", stage.name, plot.id);
            stage.status = StageStatus::Completed;
            stage.actual_start_date.get_or_insert(now);
            stage.actual_end_date = Some(now);
            stage.auto_completed = true;
        }
    }

    let target = &mut updated.stages[index];
    target.status = status;
    target.auto_completed = false;
    match status {
        StageStatus::InProgress => {
            target.actual_start_date.get_or_insert(now);
        }
        StageStatus::Completed => {
            target.actual_end_date.get_or_insert(now);
        }
        StageStatus::NotStarted | StageStatus::Delayed => {}
    }

    if status == StageStatus::Completed {
        if *stage_id == plot.current_stage_id {
            if let Some(next) = updated.stages.get_mut(index + 1) {
                debug!("Advancing plot {} to stage '{}'", plot.id, next.name);
                next.status = StageStatus::InProgress;
                next.actual_start_date = Some(now);
                updated.current_stage_id = next.id.clone();
            }
        } else {
            match updated.stages.iter().position(|s| !s.is_completed()) {
                Some(next_index) => {
                    let next = &mut updated.stages[next_index];
                    debug!("Moving plot {} pointer to stage '{}'", plot.id, next.name);
                    if next.status == StageStatus::NotStarted {
                        next.status = StageStatus::InProgress;
                        next.actual_start_date = Some(now);
                    }
                    updated.current_stage_id = next.id.clone();
                }
                None => {
                    if let Some(last) = updated.stages.last() {
                        updated.current_stage_id = last.id.clone();
                    }
                }
            }
        }
    }

    updated.updated_at = now;
    Ok(updated)
}

/// Records a delay and marks the stage delayed.
///
/// The status change is unconditional, so a completed stage becomes delayed
/// too. `days_added` is expected to be positive; see
/// [`crate::params::AddDelay::validate`].
pub fn add_stage_delay(
    plot: &Plot,
    stage_id: &StageId,
    reason: &str,
    days_added: u32,
    now: Timestamp,
) -> Result<Plot> {
    let index = locate_stage(plot, stage_id)?;
    let mut updated = plot.clone();

    let stage = &mut updated.stages[index];
    if stage.is_completed() {
        warn!(
            "Delay recorded against completed stage '{}' of plot {}; stage is now delayed",
            stage.name, plot.id
        );
    }
    stage.delays.push(Delay::new(reason, days_added, now));
    stage.status = StageStatus::Delayed;

    updated.updated_at = now;
    Ok(updated)
}

/// Appends a new unresolved issue. Stage status is untouched.
pub fn add_stage_issue(
    plot: &Plot,
    stage_id: &StageId,
    description: &str,
    now: Timestamp,
) -> Result<Plot> {
    let index = locate_stage(plot, stage_id)?;
    let mut updated = plot.clone();

    updated.stages[index]
        .issues
        .push(Issue::new(description, now));

    updated.updated_at = now;
    Ok(updated)
}

/// Resolves one issue. Resolving again keeps the original `resolved_at`.
pub fn resolve_stage_issue(
    plot: &Plot,
    stage_id: &StageId,
    issue_id: &IssueId,
    now: Timestamp,
) -> Result<Plot> {
    let index = locate_stage(plot, stage_id)?;
    let mut updated = plot.clone();

    let issue = updated.stages[index]
        .issues
        .iter_mut()
        .find(|i| &i.id == issue_id)
        .ok_or_else(|| TrackerError::IssueNotFound {
            id: issue_id.to_string(),
        })?;
    issue.resolve(now);

    updated.updated_at = now;
    Ok(updated)
}

/// Appends a dated entry to a stage's notes.
pub fn add_stage_note(
    plot: &Plot,
    stage_id: &StageId,
    text: &str,
    calendar: &WorkCalendar,
    now: Timestamp,
) -> Result<Plot> {
    let index = locate_stage(plot, stage_id)?;
    let mut updated = plot.clone();

    append_note(&mut updated.stages[index].notes, text, calendar, now);

    updated.updated_at = now;
    Ok(updated)
}

/// Appends a dated entry to the plot's own notes.
pub fn add_plot_note(plot: &Plot, text: &str, calendar: &WorkCalendar, now: Timestamp) -> Plot {
    let mut updated = plot.clone();
    append_note(&mut updated.notes, text, calendar, now);
    updated.updated_at = now;
    updated
}

/// Entries are `YYYY-MM-DD: text`, separated by a blank line.
fn append_note(log: &mut String, text: &str, calendar: &WorkCalendar, now: Timestamp) {
    let entry = format!("{}: {}", calendar.date_of(now), text);
    if !log.is_empty() {
        log.push_str("\n\n");
    }
    log.push_str(&entry);
}

fn locate_stage(plot: &Plot, stage_id: &StageId) -> Result<usize> {
    plot.stage_index(stage_id)
        .ok_or_else(|| TrackerError::StageNotFound {
            id: stage_id.to_string(),
        })
}
