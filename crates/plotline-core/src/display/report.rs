//! Display implementation for the portfolio report.

use std::fmt;

use super::{datetime::InZone, models::schedule_phrase};
use crate::report::PortfolioReport;

impl fmt::Display for InZone<'_, PortfolioReport> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let report = self.value;
        writeln!(f, "# Portfolio Report")?;
        writeln!(f)?;
        writeln!(f, "Generated {}", self.date_time(&report.generated_at))?;
        writeln!(f)?;

        writeln!(f, "## Schedule")?;
        writeln!(f)?;
        writeln!(f, "- Plots: {}", report.total_plots)?;
        writeln!(f, "- Ahead: {}", report.ahead)?;
        writeln!(f, "- On schedule: {}", report.on_schedule)?;
        writeln!(f, "- Behind: {}", report.behind)?;
        writeln!(f)?;

        writeln!(f, "## Progress")?;
        writeln!(f)?;
        if report.summaries.is_empty() {
            writeln!(f, "No plots found.")?;
        }
        for summary in &report.summaries {
            writeln!(
                f,
                "- **{}**: {}%, {} ({})",
                summary.name,
                summary.progress,
                summary.current_stage,
                schedule_phrase(summary.status, summary.days_ahead_or_behind)
            )?;
        }
        writeln!(f)?;

        writeln!(f, "## Open Issues")?;
        writeln!(f)?;
        if report.open_issues.is_empty() {
            writeln!(f, "No open issues.")?;
            writeln!(f)?;
        }
        for plot in &report.open_issues {
            writeln!(f, "### {}", plot.plot_name)?;
            writeln!(f)?;
            for open in &plot.issues {
                writeln!(f, "- {}: {}", open.stage_name, open.issue.description)?;
            }
            writeln!(f)?;
        }

        writeln!(f, "## Delays")?;
        writeln!(f)?;
        if report.delays.is_empty() {
            writeln!(f, "No delays recorded.")?;
        }
        for plot in &report.delays {
            writeln!(f, "### {} ({} days)", plot.plot_name, plot.total_days)?;
            writeln!(f)?;
            for delay in &plot.delays {
                writeln!(
                    f,
                    "- {}: +{} days, {}",
                    delay.stage_name, delay.delay.days_added, delay.delay.reason
                )?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
