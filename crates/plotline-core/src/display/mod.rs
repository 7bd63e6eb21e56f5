//! Markdown display for plots, stages, summaries and reports.
//!
//! Domain models implement [`std::fmt::Display`] (see [`models`]), through
//! [`InZone`] when they carry timestamps; the wrappers here format
//! collections and operation results. Everything is
//! markdown so the CLI can either render it with a terminal skin or print it
//! verbatim.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  Domain Models  │    │ Wrappers and    │    │    Markdown     │
//! │  (Plot, Stage)  │───▶│ Display impls   │───▶│     output      │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! - [`collections`]: [`Summaries`] and [`StageEvents`]
//! - [`results`]: [`CreateResult`], [`UpdateResult`] and [`DeleteResult`]
//! - [`datetime`]: [`InZone`], [`LocalDate`] and [`LocalDateTime`]
//! - [`models`]: Display for the domain models
//! - [`report`]: Display for [`crate::report::PortfolioReport`]

pub mod collections;
pub mod datetime;
pub mod models;
pub mod report;
pub mod results;

pub use collections::{StageEvents, Summaries};
pub use datetime::{InZone, LocalDate, LocalDateTime};
pub use results::{CreateResult, DeleteResult, UpdateResult};
