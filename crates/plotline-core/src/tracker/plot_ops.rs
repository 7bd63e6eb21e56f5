//! Plot operations for the Tracker.

use log::debug;

use super::Tracker;
use crate::{
    agenda::{self, StageEvent},
    error::Result,
    factory,
    models::{Plot, PlotSummary},
    params::{AddNote, CreatePlot},
    progression,
    report::PortfolioReport,
    schedule::{self, ScheduleAssessment},
};

impl Tracker {
    /// Creates a new plot seeded with one stage per catalog template.
    ///
    /// Dates may be given as RFC 3339 instants or as plain `YYYY-MM-DD`
    /// dates, which are read as midnight in the tracker's time zone.
    pub fn create_plot(&self, params: &CreatePlot) -> Result<Plot> {
        let (start, end) = params.validate(&self.calendar)?;
        factory::create_plot(
            &self.catalog,
            &self.calendar,
            params.name.trim(),
            params.address.trim(),
            start,
            end,
            self.now(),
        )
    }

    /// Appends a dated note to the plot's own note log.
    pub fn add_plot_note(&self, plot: &Plot, params: &AddNote) -> Result<Plot> {
        let text = params.validate()?;
        Ok(progression::add_plot_note(
            plot,
            text,
            &self.calendar,
            self.now(),
        ))
    }

    pub fn progress(&self, plot: &Plot) -> u8 {
        schedule::progress(plot)
    }

    /// Estimated work days still needed, delays included.
    pub fn remaining_duration(&self, plot: &Plot) -> u32 {
        schedule::remaining_duration(plot, &self.calendar, self.now())
    }

    pub fn assess(&self, plot: &Plot) -> ScheduleAssessment {
        schedule::assess(plot, &self.calendar, self.now())
    }

    pub fn plot_summary(&self, plot: &Plot) -> PlotSummary {
        schedule::plot_summary(plot, &self.calendar, self.now())
    }

    /// Summaries for many plots, in input order.
    pub fn summaries(&self, plots: &[Plot]) -> Vec<PlotSummary> {
        let now = self.now();
        plots
            .iter()
            .map(|plot| schedule::plot_summary(plot, &self.calendar, now))
            .collect()
    }

    pub fn portfolio_report(&self, plots: &[Plot]) -> PortfolioReport {
        debug!("Building portfolio report for {} plots", plots.len());
        PortfolioReport::build(plots, &self.calendar, self.now())
    }

    /// Stage milestones on the given `YYYY-MM-DD` date.
    pub fn stage_events_on(&self, plots: &[Plot], date: &str) -> Result<Vec<StageEvent>> {
        let date = self.calendar.parse_date(date)?;
        Ok(agenda::stage_events_on(plots, date, &self.calendar))
    }
}
