use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::cli::{CalendarArgs, PlotCommands, StageCommands};

/// Track construction plots through their build stages
///
/// Every plot is seeded with the same sequence of stages, scheduled back to
/// back in work days. Record progress, delays, issues and notes per stage and
/// see which plots are ahead of or behind their target completion date.
#[derive(Parser)]
#[command(version, about, name = "plotline")]
pub struct Args {
    /// Path to the JSON data file. Defaults to
    /// $XDG_DATA_HOME/plotline/plots.json
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    /// JSON stage catalog used for new plots, a list of
    /// {"name": ..., "duration": ...} objects
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    /// IANA time zone for calendar days, e.g. Europe/London. Defaults to the
    /// system zone
    #[arg(long, global = true)]
    pub time_zone: Option<String>,

    /// Evaluate and stamp everything as of this date or date-time instead of
    /// now
    #[arg(long, global = true, value_name = "DATE")]
    pub as_of: Option<String>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage plots
    #[command(alias = "p")]
    Plot {
        #[command(subcommand)]
        command: PlotCommands,
    },
    /// Update stages within a plot
    #[command(alias = "s")]
    Stage {
        #[command(subcommand)]
        command: StageCommands,
    },
    /// Portfolio report across all plots
    #[command(alias = "r")]
    Report,
    /// Stage milestones falling on a date
    #[command(alias = "cal")]
    Calendar(CalendarArgs),
    /// Show the stage catalog new plots are seeded from
    Catalog,
}
