//! Core library for the Plotline construction tracker.
//!
//! A plot is one building site. It is seeded from a [`catalog::StageCatalog`]
//! with a fixed sequence of build stages, each scheduled back to back in work
//! days (Monday to Friday). As work proceeds, stages are started, completed,
//! delayed and annotated; the [`schedule`] module derives progress, remaining
//! work and whether the plot is ahead of or behind its target date.
//!
//! The engine is pure. Every operation takes a plot value and returns an
//! updated copy, stamped with an explicit `now`, so callers own persistence
//! (see [`store::PlotStore`]).
//!
//! # Display Architecture
//!
//! - **Domain Models** ([`models`]): plain serde data
//! - **Display** ([`display`]): markdown rendering of models, summaries and
//!   reports
//! - **Terminal Rendering**: rich markdown output via the CLI's renderer
//!
//! # Quick Start
//!
//! ```rust
//! use plotline_core::{params::{CreatePlot, UpdateStageStatus}, Clock, TrackerBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_clock(Clock::Fixed("2024-03-04T09:00:00Z".parse()?))
//!     .build()?;
//!
//! let plot = tracker.create_plot(&CreatePlot {
//!     name: "Plot 1".to_string(),
//!     address: "1 Orchard Way".to_string(),
//!     start_date: "2024-03-04".to_string(),
//!     end_date: "2024-09-27".to_string(),
//! })?;
//!
//! let plot = tracker.update_stage_status(&plot, &UpdateStageStatus {
//!     stage_id: plot.stages[2].id.to_string(),
//!     status: "completed".to_string(),
//! })?;
//!
//! assert_eq!(plot.completed_stage_count(), 3);
//! assert_eq!(tracker.progress(&plot), 30);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod agenda;
pub mod calendar;
pub mod catalog;
pub mod display;
pub mod error;
pub mod factory;
pub mod models;
pub mod params;
pub mod progression;
pub mod report;
pub mod schedule;
pub mod store;
pub mod tracker;

// Re-export commonly used types
pub use agenda::{StageEvent, StageEventKind};
pub use calendar::WorkCalendar;
pub use catalog::{StageCatalog, StageTemplate};
pub use display::{
    CreateResult, DeleteResult, InZone, LocalDate, LocalDateTime, StageEvents, Summaries,
    UpdateResult,
};
pub use error::{Result, TrackerError};
pub use models::{
    Delay, Issue, Plot, PlotId, PlotSummary, ScheduleStatus, Stage, StageId, StageStatus,
};
pub use params::{AddDelay, AddIssue, AddNote, CreatePlot, UpdateStageStatus};
pub use report::PortfolioReport;
pub use schedule::ScheduleAssessment;
pub use store::PlotStore;
pub use tracker::{Clock, Tracker, TrackerBuilder};
