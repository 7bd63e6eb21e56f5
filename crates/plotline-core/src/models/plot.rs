//! Plot model definition and related functionality.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{PlotId, Stage, StageId};

/// A construction plot and its ordered build stages.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Plot {
    /// Unique identifier for the plot
    pub id: PlotId,

    /// Name of the plot
    pub name: String,

    /// Site address
    pub address: String,

    /// Build start and target completion
    pub start_date: Timestamp,
    pub end_date: Timestamp,

    /// The first stage that is not completed, or the last stage
    pub current_stage_id: StageId,

    /// Stages in catalog order
    pub stages: Vec<Stage>,

    /// Free-text log, one dated entry per paragraph
    #[serde(default)]
    pub notes: String,

    /// Timestamp when the plot was created (UTC)
    pub created_at: Timestamp,

    /// Timestamp when the plot was last modified (UTC)
    pub updated_at: Timestamp,
}

impl Plot {
    /// Position of a stage within the sequence.
    pub fn stage_index(&self, id: &StageId) -> Option<usize> {
        self.stages.iter().position(|s| &s.id == id)
    }

    pub fn stage(&self, id: &StageId) -> Option<&Stage> {
        self.stages.iter().find(|s| &s.id == id)
    }

    /// The stage the current-stage pointer refers to.
    pub fn current_stage(&self) -> Option<&Stage> {
        self.stage(&self.current_stage_id)
    }

    pub fn completed_stage_count(&self) -> usize {
        self.stages.iter().filter(|s| s.is_completed()).count()
    }

    pub fn is_complete(&self) -> bool {
        !self.stages.is_empty() && self.stages.iter().all(Stage::is_completed)
    }

    /// Total work days added by delays across all stages.
    pub fn total_delay_days(&self) -> u32 {
        self.stages
            .iter()
            .fold(0, |total: u32, s| total.saturating_add(s.total_delay_days()))
    }
}
