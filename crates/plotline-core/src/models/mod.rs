//! Data models for plots and stages.
//!
//! This module contains the core domain models of the tracker. Display
//! implementations for these models are located in [`crate::display::models`]
//! to keep data structures separate from presentation.
//!
//! # Wire Format
//!
//! All models serialize with camelCase field names, statuses as kebab-case
//! strings, identifiers as plain strings and timestamps as RFC 3339 strings.
//! That matches what UI and storage layers exchange with the core.
//!
//! # Examples
//!
//! ```rust
//! use plotline_core::models::{Issue, StageStatus};
//! use jiff::Timestamp;
//!
//! let mut issue = Issue::new("Scaffold tag expired", Timestamp::UNIX_EPOCH);
//! assert!(!issue.resolved);
//!
//! issue.resolve(Timestamp::from_second(60).unwrap());
//! assert!(issue.resolved);
//!
//! assert_eq!("in-progress".parse::<StageStatus>(), Ok(StageStatus::InProgress));
//! ```

pub mod ids;
pub mod plot;
pub mod stage;
pub mod status;
pub mod summary;


pub use ids::{DelayId, IssueId, PlotId, StageId};
pub use plot::Plot;
pub use stage::{Delay, Issue, Stage};
pub use status::{ScheduleStatus, StageStatus};
pub use summary::{PlotSummary, NO_CURRENT_STAGE};
