//! Plot summary types.

use serde::{Deserialize, Serialize};

use super::{PlotId, ScheduleStatus};

/// Label used when the current-stage pointer does not resolve.
pub const NO_CURRENT_STAGE: &str = "Not started";

/// Read-only projection of a plot for dashboards and reports.
///
/// Recomputed on demand; never stored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlotSummary {
    /// Plot ID
    pub id: PlotId,
    /// Plot name
    pub name: String,
    /// Name of the current stage
    pub current_stage: String,
    /// Completed stages as a whole percentage, 0 to 100
    pub progress: u8,
    /// Remaining work days including delays
    pub days_remaining: u32,
    /// Ahead, behind or on schedule
    pub status: ScheduleStatus,
    /// Size of the gap, always non-negative
    pub days_ahead_or_behind: u32,
}
