//! Stage model definition and its issue and delay records.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{DelayId, IssueId, StageId, StageStatus};

/// A problem raised against a stage.
///
/// Issues are created unresolved and can be resolved exactly once.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: IssueId,
    pub description: String,
    pub created_at: Timestamp,
    pub resolved: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resolved_at: Option<Timestamp>,
}

impl Issue {
    pub fn new(description: impl Into<String>, created_at: Timestamp) -> Self {
        Self {
            id: IssueId::new(),
            description: description.into(),
            created_at,
            resolved: false,
            resolved_at: None,
        }
    }

    /// Marks the issue resolved. A second call keeps the first timestamp.
    pub fn resolve(&mut self, at: Timestamp) {
        if !self.resolved {
            self.resolved = true;
            self.resolved_at = Some(at);
        }
    }
}

/// Extra work days recorded against a stage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Delay {
    pub id: DelayId,
    pub reason: String,
    pub days_added: u32,
    pub created_at: Timestamp,
}

impl Delay {
    pub fn new(reason: impl Into<String>, days_added: u32, created_at: Timestamp) -> Self {
        Self {
            id: DelayId::new(),
            reason: reason.into(),
            days_added,
            created_at,
        }
    }
}

/// One build stage of a plot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stage {
    /// Unique identifier for the stage
    pub id: StageId,

    /// Name copied from the stage template
    pub name: String,

    /// Nominal duration in work days
    pub duration: u32,

    /// Current status of the stage
    pub status: StageStatus,

    /// Planned dates, fixed when the plot is created
    pub planned_start_date: Timestamp,
    pub planned_end_date: Timestamp,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_start_date: Option<Timestamp>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_end_date: Option<Timestamp>,

    /// Free-text log, one dated entry per paragraph
    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub issues: Vec<Issue>,

    #[serde(default)]
    pub delays: Vec<Delay>,

    /// Set only when the stage was completed as a side effect of completing a
    /// later stage
    #[serde(default)]
    pub auto_completed: bool,
}

impl Stage {
    /// Total work days added by every delay on this stage, saturating at
    /// `u32::MAX`.
    pub fn total_delay_days(&self) -> u32 {
        self.delays
            .iter()
            .fold(0, |total: u32, d| total.saturating_add(d.days_added))
    }

    /// Number of issues not yet resolved.
    pub fn open_issue_count(&self) -> usize {
        self.issues.iter().filter(|i| !i.resolved).count()
    }

    pub fn issue(&self, id: &IssueId) -> Option<&Issue> {
        self.issues.iter().find(|i| &i.id == id)
    }

    pub fn is_completed(&self) -> bool {
        self.status == StageStatus::Completed
    }
}
