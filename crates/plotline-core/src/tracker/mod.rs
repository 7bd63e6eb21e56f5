//! High-level tracker API for managing plots and their stages.
//!
//! The [`Tracker`] is the service facade an interface layer talks to. It owns
//! the configuration every operation needs (stage catalog, work calendar and
//! clock), validates raw parameters, and delegates to the pure engine modules.
//! It holds no plots itself: every operation takes a plot value and returns a
//! new one, leaving storage to the caller (see [`crate::store::PlotStore`]).
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │     Params      │    │     Tracker     │    │  Engine modules │
//! │  (validate())   │───▶│ (plot_ops,      │───▶│ (factory,       │
//! │                 │    │  stage_ops)     │    │  progression,   │
//! └─────────────────┘    └─────────────────┘    │  schedule)      │
//!                                               └─────────────────┘
//! ```
//!
//! # Usage Examples
//!
//! ```rust
//! use plotline_core::{params::{AddDelay, CreatePlot}, Clock, TrackerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_clock(Clock::Fixed("2024-03-04T09:00:00Z".parse()?))
//!     .build()?;
//!
//! let plot = tracker.create_plot(&CreatePlot {
//!     name: "Plot 9".to_string(),
//!     address: "9 Church Street".to_string(),
//!     start_date: "2024-03-04".to_string(),
//!     end_date: "2024-09-30".to_string(),
//! })?;
//!
//! let plot = tracker.add_stage_delay(&plot, &AddDelay {
//!     stage_id: plot.stages[0].id.to_string(),
//!     reason: "Ground water".to_string(),
//!     days_added: 3,
//! })?;
//!
//! let summary = tracker.plot_summary(&plot);
//! println!("{}", summary);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

use jiff::{tz::TimeZone, Timestamp};

use crate::{calendar::WorkCalendar, catalog::StageCatalog};

pub mod builder;
pub mod plot_ops;
pub mod stage_ops;

#[cfg(test)]
mod tests;

pub use builder::TrackerBuilder;

/// Source of the current instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// The system clock
    #[default]
    System,
    /// A frozen instant, for tests and reproducible reports
    Fixed(Timestamp),
}

impl Clock {
    pub fn now(&self) -> Timestamp {
        match self {
            Clock::System => Timestamp::now(),
            Clock::Fixed(ts) => *ts,
        }
    }
}

/// Main tracker interface for managing plots and stages.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) catalog: StageCatalog,
    pub(crate) calendar: WorkCalendar,
    pub(crate) clock: Clock,
}

impl Tracker {
    /// Creates a new tracker from already validated configuration.
    pub(crate) fn new(catalog: StageCatalog, calendar: WorkCalendar, clock: Clock) -> Self {
        Self {
            catalog,
            calendar,
            clock,
        }
    }

    /// The stage catalog new plots are seeded from.
    pub fn catalog(&self) -> &StageCatalog {
        &self.catalog
    }

    pub fn calendar(&self) -> &WorkCalendar {
        &self.calendar
    }

    /// Zone used for calendar days, and for showing dates.
    pub fn time_zone(&self) -> &TimeZone {
        self.calendar.time_zone()
    }

    /// Returns this tracker with a different clock.
    pub fn with_clock(self, clock: Clock) -> Self {
        Self { clock, ..self }
    }

    /// The instant operations are stamped with.
    pub fn now(&self) -> Timestamp {
        self.clock.now()
    }
}
