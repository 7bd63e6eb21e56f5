//! Subcommand arguments and their handlers.
//!
//! Arguments follow the parameter wrapper pattern: clap structs here convert
//! into the interface-agnostic parameter types of `plotline_core::params`,
//! which do their own validation.
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Tracker → PlotStore → data file
//! ```
//!
//! Plots can be referred to by id or by name, and stages by id, by name or by
//! their 1-based position in the plot.

use anyhow::Result;
use clap::{Args, Subcommand, ValueEnum};
use log::info;
use plotline_core::{
    display::{CreateResult, DeleteResult, InZone, StageEvents, Summaries, UpdateResult},
    params::{AddDelay, AddIssue, AddNote, CreatePlot, UpdateStageStatus},
    Plot, PlotId, PlotStore, StageStatus, Tracker, TrackerError,
};

use crate::{renderer::TerminalRenderer, storage::DataFile};

// ============================================================================
// Plot arguments
// ============================================================================

#[derive(Args)]
pub struct CreatePlotArgs {
    /// Name of the plot, e.g. "Plot 12"
    pub name: String,
    /// Site address
    pub address: String,
    #[arg(long, help = "Build start date (YYYY-MM-DD or RFC 3339)")]
    pub start: String,
    #[arg(long, help = "Target completion date, after the start date")]
    pub end: String,
}

impl From<CreatePlotArgs> for CreatePlot {
    fn from(val: CreatePlotArgs) -> Self {
        CreatePlot {
            name: val.name,
            address: val.address,
            start_date: val.start,
            end_date: val.end,
        }
    }
}

#[derive(Args)]
pub struct PlotRefArgs {
    #[arg(help = "Plot id or name")]
    pub plot: String,
}

#[derive(Args)]
pub struct DeletePlotArgs {
    #[arg(help = "Plot id or name to permanently delete")]
    pub plot: String,
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Args)]
pub struct PlotNoteArgs {
    #[arg(help = "Plot id or name")]
    pub plot: String,
    pub text: String,
}

#[derive(Subcommand)]
pub enum PlotCommands {
    /// Create a plot seeded from the stage catalog
    #[command(alias = "c")]
    Create(CreatePlotArgs),
    /// List plot summaries
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a plot with all its stages
    #[command(alias = "s")]
    Show(PlotRefArgs),
    /// Schedule summary for one plot
    Summary(PlotRefArgs),
    /// Add a dated note to a plot
    #[command(alias = "n")]
    Note(PlotNoteArgs),
    /// Permanently delete a plot
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlotArgs),
}

// ============================================================================
// Stage arguments
// ============================================================================

#[derive(Args, Clone)]
pub struct StageTarget {
    #[arg(help = "Plot id or name")]
    pub plot: String,
    #[arg(help = "Stage id, name or 1-based position")]
    pub stage: String,
}

#[derive(Args)]
pub struct StageStatusArgs {
    #[command(flatten)]
    pub target: StageTarget,
    pub status: StageStatusArg,
}

impl From<StageStatusArgs> for UpdateStageStatus {
    fn from(val: StageStatusArgs) -> Self {
        UpdateStageStatus {
            stage_id: val.target.stage,
            status: StageStatus::from(val.status).as_str().to_string(),
        }
    }
}

#[derive(Args)]
pub struct StageDelayArgs {
    #[command(flatten)]
    pub target: StageTarget,
    #[arg(allow_negative_numbers = true, help = "Work days added")]
    pub days: i64,
    pub reason: String,
}

impl From<StageDelayArgs> for AddDelay {
    fn from(val: StageDelayArgs) -> Self {
        AddDelay {
            stage_id: val.target.stage,
            reason: val.reason,
            days_added: val.days,
        }
    }
}

#[derive(Args)]
pub struct StageIssueArgs {
    #[command(flatten)]
    pub target: StageTarget,
    pub description: String,
}

impl From<StageIssueArgs> for AddIssue {
    fn from(val: StageIssueArgs) -> Self {
        AddIssue {
            stage_id: val.target.stage,
            description: val.description,
        }
    }
}

#[derive(Args)]
pub struct ResolveIssueArgs {
    #[command(flatten)]
    pub target: StageTarget,
    pub issue_id: String,
}

#[derive(Args)]
pub struct StageNoteArgs {
    #[command(flatten)]
    pub target: StageTarget,
    pub text: String,
}

#[derive(Subcommand)]
pub enum StageCommands {
    /// Set a stage's status; completing a stage closes all earlier ones
    #[command(alias = "st")]
    Status(StageStatusArgs),
    /// Record a delay in work days
    #[command(alias = "d")]
    Delay(StageDelayArgs),
    /// Raise an issue
    #[command(alias = "i")]
    Issue(StageIssueArgs),
    /// Mark an issue resolved
    #[command(alias = "r")]
    Resolve(ResolveIssueArgs),
    /// Add a dated note
    #[command(alias = "n")]
    Note(StageNoteArgs),
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum StageStatusArg {
    NotStarted,
    InProgress,
    Completed,
    Delayed,
}

impl From<StageStatusArg> for StageStatus {
    fn from(val: StageStatusArg) -> Self {
        match val {
            StageStatusArg::NotStarted => StageStatus::NotStarted,
            StageStatusArg::InProgress => StageStatus::InProgress,
            StageStatusArg::Completed => StageStatus::Completed,
            StageStatusArg::Delayed => StageStatus::Delayed,
        }
    }
}

#[derive(Args)]
pub struct CalendarArgs {
    #[arg(help = "Date to list (YYYY-MM-DD)")]
    pub date: String,
}

// ============================================================================
// Handlers
// ============================================================================

pub struct Cli {
    tracker: Tracker,
    renderer: TerminalRenderer,
    data: DataFile,
}

impl Cli {
    pub fn new(tracker: Tracker, renderer: TerminalRenderer, data: DataFile) -> Self {
        Self {
            tracker,
            renderer,
            data,
        }
    }

    pub fn handle_plot_command(&self, command: PlotCommands) -> Result<()> {
        match command {
            PlotCommands::Create(args) => self.create_plot(&args.into()),
            PlotCommands::List => self.list_plots(),
            PlotCommands::Show(args) => {
                let store = self.data.load()?;
                let plot = find_plot(&store, &args.plot)?;
                self.renderer
                    .render(&InZone::new(plot, self.tracker.time_zone()))
            }
            PlotCommands::Summary(args) => {
                let store = self.data.load()?;
                let plot = find_plot(&store, &args.plot)?;
                self.renderer.render(&self.tracker.plot_summary(plot))
            }
            PlotCommands::Note(args) => {
                let note = AddNote { text: args.text };
                self.update_plot(&args.plot, "Added note".to_string(), |tracker, plot| {
                    tracker.add_plot_note(plot, &note)
                })
            }
            PlotCommands::Delete(args) => self.delete_plot(&args.plot, args.confirm),
        }
    }

    pub fn handle_stage_command(&self, command: StageCommands) -> Result<()> {
        match command {
            StageCommands::Status(args) => {
                let target = args.target.clone();
                let params = UpdateStageStatus::from(args);
                self.update_stage(&target, |tracker, plot, stage| {
                    let params = UpdateStageStatus {
                        stage_id: stage.id.clone(),
                        ..params
                    };
                    let change = format!("{}: status set to {}", stage.name, params.status);
                    Ok((tracker.update_stage_status(plot, &params)?, change))
                })
            }
            StageCommands::Delay(args) => {
                let target = args.target.clone();
                let params = AddDelay::from(args);
                self.update_stage(&target, |tracker, plot, stage| {
                    let params = AddDelay {
                        stage_id: stage.id.clone(),
                        ..params
                    };
                    let change = format!(
                        "{}: delayed {} days ({})",
                        stage.name, params.days_added, params.reason
                    );
                    Ok((tracker.add_stage_delay(plot, &params)?, change))
                })
            }
            StageCommands::Issue(args) => {
                let target = args.target.clone();
                let params = AddIssue::from(args);
                self.update_stage(&target, |tracker, plot, stage| {
                    let params = AddIssue {
                        stage_id: stage.id.clone(),
                        ..params
                    };
                    let change = format!("{}: issue raised ({})", stage.name, params.description);
                    Ok((tracker.add_stage_issue(plot, &params)?, change))
                })
            }
            StageCommands::Resolve(args) => {
                let issue_id = args.issue_id;
                self.update_stage(&args.target, |tracker, plot, stage| {
                    let change = format!("{}: issue {issue_id} resolved", stage.name);
                    Ok((tracker.resolve_stage_issue(plot, &stage.id, &issue_id)?, change))
                })
            }
            StageCommands::Note(args) => {
                let note = AddNote { text: args.text };
                self.update_stage(&args.target, |tracker, plot, stage| {
                    let change = format!("{}: added note", stage.name);
                    Ok((tracker.add_stage_note(plot, &stage.id, &note)?, change))
                })
            }
        }
    }

    pub fn list_plots(&self) -> Result<()> {
        let store = self.data.load()?;
        let summaries = Summaries(self.tracker.summaries(store.list()));
        self.renderer.render(&summaries)
    }

    pub fn report(&self) -> Result<()> {
        let store = self.data.load()?;
        let report = self.tracker.portfolio_report(store.list());
        self.renderer
            .render(&InZone::new(&report, self.tracker.time_zone()))
    }

    pub fn calendar(&self, args: &CalendarArgs) -> Result<()> {
        let store = self.data.load()?;
        let events = self.tracker.stage_events_on(store.list(), &args.date)?;
        self.renderer
            .render_markdown(&format!("# Stage events on {}\n\n", args.date.trim()))?;
        self.renderer.render(&StageEvents(events))
    }

    pub fn catalog(&self) -> Result<()> {
        self.renderer.render(self.tracker.catalog())
    }

    fn create_plot(&self, params: &CreatePlot) -> Result<()> {
        let plot = self.tracker.create_plot(params)?;
        let mut store = self.data.load()?;
        store.insert(plot.clone());
        self.data.save(&store)?;
        info!("Created plot {}", plot.id);
        self.renderer
            .render(&CreateResult::new(plot, self.tracker.time_zone().clone()))
    }

    fn delete_plot(&self, plot_ref: &str, confirmed: bool) -> Result<()> {
        let mut store = self.data.load()?;
        let id = find_plot(&store, plot_ref)?.id.clone();
        if !confirmed {
            let plot = store.get(&id)?;
            return self.renderer.render_markdown(&format!(
                "Plot '{}' has {} stages. Run again with --confirm to delete it.\n",
                plot.name,
                plot.stages.len()
            ));
        }

        let removed = store.remove(&id)?;
        self.data.save(&store)?;
        self.renderer.render(&DeleteResult::new(removed))
    }

    fn update_plot<F>(&self, plot_ref: &str, change: String, op: F) -> Result<()>
    where
        F: FnOnce(&Tracker, &Plot) -> plotline_core::Result<Plot>,
    {
        let mut store = self.data.load()?;
        let id = find_plot(&store, plot_ref)?.id.clone();
        let plot = store.apply(&id, |plot| op(&self.tracker, plot))?.clone();
        self.data.save(&store)?;
        self.renderer.render(&UpdateResult::with_changes(
            plot,
            vec![change],
            self.tracker.time_zone().clone(),
        ))
    }

    /// Runs `op` against the referenced stage's plot. `op` returns the
    /// updated plot and a description of the change.
    fn update_stage<F>(&self, target: &StageTarget, op: F) -> Result<()>
    where
        F: FnOnce(&Tracker, &Plot, &StageRef) -> plotline_core::Result<(Plot, String)>,
    {
        let mut store = self.data.load()?;
        let plot = find_plot(&store, &target.plot)?;
        let id = plot.id.clone();
        let stage = resolve_stage(plot, &target.stage);

        let mut change = String::new();
        let updated = store
            .apply(&id, |plot| {
                let (updated, description) = op(&self.tracker, plot, &stage)?;
                change = description;
                Ok(updated)
            })?
            .clone();
        self.data.save(&store)?;
        self.renderer.render(&UpdateResult::with_changes(
            updated,
            vec![change],
            self.tracker.time_zone().clone(),
        ))
    }
}

/// A stage reference resolved against a plot.
pub struct StageRef {
    pub id: String,
    pub name: String,
}

/// Finds a plot by id, then by case-insensitive name.
fn find_plot<'a>(store: &'a PlotStore, reference: &str) -> Result<&'a Plot> {
    let reference = reference.trim();
    if let Ok(plot) = store.get(&PlotId::from(reference)) {
        return Ok(plot);
    }
    let plot = store
        .list()
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(reference))
        .ok_or_else(|| TrackerError::PlotNotFound {
            id: reference.to_string(),
        })?;
    Ok(plot)
}

/// Resolves a stage by id, 1-based position or case-insensitive name.
///
/// An unknown reference is passed through unchanged so the tracker reports
/// it as not found.
fn resolve_stage(plot: &Plot, reference: &str) -> StageRef {
    let reference = reference.trim();
    let by_position = || {
        reference
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| plot.stages.get(i))
    };

    let stage = plot
        .stages
        .iter()
        .find(|s| s.id.as_str() == reference)
        .or_else(by_position)
        .or_else(|| {
            plot.stages
                .iter()
                .find(|s| s.name.eq_ignore_ascii_case(reference))
        });

    match stage {
        Some(stage) => StageRef {
            id: stage.id.to_string(),
            name: stage.name.clone(),
        },
        None => StageRef {
            id: reference.to_string(),
            name: reference.to_string(),
        },
    }
}
