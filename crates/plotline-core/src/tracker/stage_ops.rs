//! Stage operations for the Tracker.
//!
//! Each operation validates its parameters first, then returns an updated
//! copy of the plot. The plot passed in is never modified, including when the
//! stage or issue cannot be found.

use super::Tracker;
use crate::{
    error::Result,
    models::{IssueId, Plot, StageId},
    params::{AddDelay, AddIssue, AddNote, UpdateStageStatus},
    progression,
};

impl Tracker {
    /// Sets a stage's status.
    ///
    /// Completing a stage auto-completes every earlier unfinished stage and
    /// moves the plot's current-stage pointer forward.
    pub fn update_stage_status(&self, plot: &Plot, params: &UpdateStageStatus) -> Result<Plot> {
        let (stage_id, status) = params.validate()?;
        progression::update_stage_status(plot, &stage_id, status, self.now())
    }

    /// Records a delay against a stage and marks it delayed.
    pub fn add_stage_delay(&self, plot: &Plot, params: &AddDelay) -> Result<Plot> {
        let (stage_id, days) = params.validate()?;
        progression::add_stage_delay(plot, &stage_id, params.reason.trim(), days, self.now())
    }

    pub fn add_stage_issue(&self, plot: &Plot, params: &AddIssue) -> Result<Plot> {
        let stage_id = params.validate()?;
        progression::add_stage_issue(plot, &stage_id, params.description.trim(), self.now())
    }

    /// Marks an issue resolved. Resolving twice keeps the first resolution
    /// time.
    pub fn resolve_stage_issue(&self, plot: &Plot, stage_id: &str, issue_id: &str) -> Result<Plot> {
        progression::resolve_stage_issue(
            plot,
            &StageId::from(stage_id.trim()),
            &IssueId::from(issue_id.trim()),
            self.now(),
        )
    }

    pub fn add_stage_note(&self, plot: &Plot, stage_id: &str, params: &AddNote) -> Result<Plot> {
        let text = params.validate()?;
        progression::add_stage_note(
            plot,
            &StageId::from(stage_id.trim()),
            text,
            &self.calendar,
            self.now(),
        )
    }
}
