//! Status enumerations for stages and schedules.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of stage statuses.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StageStatus {
    /// Work on the stage has not begun
    #[default]
    NotStarted,

    /// Stage is being worked on
    InProgress,

    /// Stage is finished
    Completed,

    /// A delay has been recorded against the stage
    Delayed,
}

impl FromStr for StageStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "not-started" | "notstarted" => Ok(StageStatus::NotStarted),
            "in-progress" | "inprogress" => Ok(StageStatus::InProgress),
            "completed" => Ok(StageStatus::Completed),
            "delayed" => Ok(StageStatus::Delayed),
            _ => Err(format!("Invalid stage status: {s}")),
        }
    }
}

impl StageStatus {
    /// Convert to the wire string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            StageStatus::NotStarted => "not-started",
            StageStatus::InProgress => "in-progress",
            StageStatus::Completed => "completed",
            StageStatus::Delayed => "delayed",
        }
    }

    /// Get status with consistent icon formatting for display.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plotline_core::models::StageStatus;
    ///
    /// assert_eq!(StageStatus::Completed.with_icon(), "✓ Completed");
    /// assert_eq!(StageStatus::Delayed.with_icon(), "⚠ Delayed");
    /// ```
    pub fn with_icon(&self) -> &'static str {
        match self {
            StageStatus::Completed => "✓ Completed",
            StageStatus::InProgress => "➤ In Progress",
            StageStatus::Delayed => "⚠ Delayed",
            StageStatus::NotStarted => "○ Not Started",
        }
    }
}

/// Where a plot stands against its target end date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum ScheduleStatus {
    /// Less work remains than work days are left
    Ahead,

    /// More work remains than work days are left
    Behind,

    /// Remaining work exactly fills the time left
    OnSchedule,
}

impl ScheduleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScheduleStatus::Ahead => "ahead",
            ScheduleStatus::Behind => "behind",
            ScheduleStatus::OnSchedule => "on-schedule",
        }
    }
}

impl FromStr for ScheduleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "ahead" => Ok(ScheduleStatus::Ahead),
            "behind" => Ok(ScheduleStatus::Behind),
            "on-schedule" | "onschedule" => Ok(ScheduleStatus::OnSchedule),
            _ => Err(format!("Invalid schedule status: {s}")),
        }
    }
}
