//! Parameter structures for tracker operations.
//!
//! These structures carry raw user input (strings and numbers as typed) from
//! any interface layer into the core without framework-specific derives. Each
//! one validates itself before the tracker attempts a mutation, so an invalid
//! request never partially changes a plot.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │  Core Params    │    │  Engine / Plot  │
//! │  (clap derives) │───▶│  (validate())   │───▶│   operations    │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    calendar::WorkCalendar,
    error::{Result, TrackerError},
    models::{StageId, StageStatus},
};

/// Parameters for creating a new plot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlot {
    /// Name of the plot (required)
    pub name: String,
    /// Site address (required)
    pub address: String,
    /// Build start, as an ISO-8601 date or date-time
    pub start_date: String,
    /// Target completion, strictly after the start
    pub end_date: String,
}

impl CreatePlot {
    /// Validate the request and return the parsed `(start, end)` instants.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When name or address is blank, or the
    ///   end date is not after the start date
    /// * `TrackerError::InvalidDate` - When a date cannot be parsed
    ///
    /// # Examples
    ///
    /// ```rust
    /// use plotline_core::{calendar::WorkCalendar, params::CreatePlot};
    ///
    /// let params = CreatePlot {
    ///     name: "Plot 12".to_string(),
    ///     address: "12 Orchard Way".to_string(),
    ///     start_date: "2024-03-04".to_string(),
    ///     end_date: "2024-03-01".to_string(),
    /// };
    /// assert!(params.validate(&WorkCalendar::default()).is_err());
    /// ```
    pub fn validate(&self, calendar: &WorkCalendar) -> Result<(Timestamp, Timestamp)> {
        require_text("name", &self.name)?;
        require_text("address", &self.address)?;

        let start = calendar.parse(&self.start_date)?;
        let end = calendar.parse(&self.end_date)?;
        if end <= start {
            return Err(TrackerError::invalid_input("end_date")
                .with_reason("End date must be after start date"));
        }

        Ok((start, end))
    }
}

/// Parameters for changing a stage's status.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateStageStatus {
    pub stage_id: String,
    /// One of 'not-started', 'in-progress', 'completed' or 'delayed'
    pub status: String,
}

impl UpdateStageStatus {
    pub fn validate(&self) -> Result<(StageId, StageStatus)> {
        let stage_id = require_id("stage_id", &self.stage_id)?;
        let status = self.status.parse::<StageStatus>().map_err(|_| {
            TrackerError::invalid_input("status").with_reason(format!(
                "Invalid status: {}. Must be 'not-started', 'in-progress', 'completed' or 'delayed'",
                self.status
            ))
        })?;
        Ok((stage_id, status))
    }
}

/// Parameters for recording a delay against a stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddDelay {
    pub stage_id: String,
    /// Why the work slipped (required)
    pub reason: String,
    /// Work days added; must be at least 1
    pub days_added: i64,
}

impl AddDelay {
    /// Validate and return the stage id and the delay length in work days.
    ///
    /// # Errors
    ///
    /// * `TrackerError::InvalidInput` - When the reason is blank or the day
    ///   count is not a positive number that fits in a `u32`
    pub fn validate(&self) -> Result<(StageId, u32)> {
        let stage_id = require_id("stage_id", &self.stage_id)?;
        require_text("reason", &self.reason)?;

        let days = u32::try_from(self.days_added)
            .ok()
            .filter(|d| *d > 0)
            .ok_or_else(|| {
                TrackerError::invalid_input("days_added").with_reason(format!(
                    "Please enter a valid number of days (got {})",
                    self.days_added
                ))
            })?;

        Ok((stage_id, days))
    }
}

/// Parameters for raising an issue against a stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddIssue {
    pub stage_id: String,
    pub description: String,
}

impl AddIssue {
    pub fn validate(&self) -> Result<StageId> {
        let stage_id = require_id("stage_id", &self.stage_id)?;
        require_text("description", &self.description)?;
        Ok(stage_id)
    }
}

/// A free-text note for a plot or stage log.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddNote {
    pub text: String,
}

impl AddNote {
    /// Returns the note text with surrounding whitespace removed.
    pub fn validate(&self) -> Result<&str> {
        require_text("text", &self.text)?;
        Ok(self.text.trim())
    }
}

fn require_text(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TrackerError::invalid_input(field).with_reason("must not be blank"));
    }
    Ok(())
}

fn require_id(field: &str, value: &str) -> Result<StageId> {
    require_text(field, value)?;
    Ok(StageId::from(value.trim()))
}
