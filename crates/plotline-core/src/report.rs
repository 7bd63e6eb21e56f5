//! Portfolio reporting across many plots.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use crate::{
    calendar::WorkCalendar,
    models::{Delay, Issue, Plot, PlotId, PlotSummary, ScheduleStatus},
    schedule::plot_summary,
};

/// An unresolved issue together with the stage it was raised on.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OpenIssue {
    pub stage_name: String,
    pub issue: Issue,
}

/// Unresolved issues of one plot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlotIssues {
    pub plot_id: PlotId,
    pub plot_name: String,
    pub issues: Vec<OpenIssue>,
}

/// A recorded delay together with the stage it belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StageDelay {
    pub stage_name: String,
    pub delay: Delay,
}

/// All delays of one plot and their combined length.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PlotDelays {
    pub plot_id: PlotId,
    pub plot_name: String,
    pub delays: Vec<StageDelay>,
    pub total_days: u32,
}

/// Progress, issues and delays across a set of plots.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioReport {
    pub generated_at: Timestamp,
    pub total_plots: usize,
    pub ahead: usize,
    pub on_schedule: usize,
    pub behind: usize,
    /// Most advanced plots first
    pub summaries: Vec<PlotSummary>,
    /// Only plots with at least one unresolved issue
    pub open_issues: Vec<PlotIssues>,
    /// Only plots with at least one delay
    pub delays: Vec<PlotDelays>,
}

impl PortfolioReport {
    pub fn build(plots: &[Plot], calendar: &WorkCalendar, now: Timestamp) -> Self {
        let mut summaries: Vec<PlotSummary> = plots
            .iter()
            .map(|plot| plot_summary(plot, calendar, now))
            .collect();

        let count = |status: ScheduleStatus| summaries.iter().filter(|s| s.status == status).count();
        let ahead = count(ScheduleStatus::Ahead);
        let on_schedule = count(ScheduleStatus::OnSchedule);
        let behind = count(ScheduleStatus::Behind);

        summaries.sort_by(|a, b| b.progress.cmp(&a.progress));

        let open_issues = plots
            .iter()
            .filter_map(|plot| {
                let issues: Vec<OpenIssue> = plot
                    .stages
                    .iter()
                    .flat_map(|stage| {
                        stage
                            .issues
                            .iter()
                            .filter(|issue| !issue.resolved)
                            .map(|issue| OpenIssue {
                                stage_name: stage.name.clone(),
                                issue: issue.clone(),
                            })
                    })
                    .collect();
                (!issues.is_empty()).then(|| PlotIssues {
                    plot_id: plot.id.clone(),
                    plot_name: plot.name.clone(),
                    issues,
                })
            })
            .collect();

        let delays = plots
            .iter()
            .filter_map(|plot| {
                let delays: Vec<StageDelay> = plot
                    .stages
                    .iter()
                    .flat_map(|stage| {
                        stage.delays.iter().map(|delay| StageDelay {
                            stage_name: stage.name.clone(),
                            delay: delay.clone(),
                        })
                    })
                    .collect();
                (!delays.is_empty()).then(|| PlotDelays {
                    plot_id: plot.id.clone(),
                    plot_name: plot.name.clone(),
                    total_days: delays
                        .iter()
                        .fold(0, |total: u32, d| total.saturating_add(d.delay.days_added)),
                    delays,
                })
            })
            .collect();

        Self {
            generated_at: now,
            total_plots: plots.len(),
            ahead,
            on_schedule,
            behind,
            summaries,
            open_issues,
            delays,
        }
    }
}
