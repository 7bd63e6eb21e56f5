//! Plotline CLI Application
//!
//! Command-line interface for tracking construction plots through their
//! build stages.

mod args;
mod cli;
mod renderer;
mod storage;

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use jiff::tz::TimeZone;
use log::info;
use plotline_core::{Clock, TrackerBuilder};
use renderer::TerminalRenderer;
use storage::DataFile;
use Commands::*;

fn main() -> Result<()> {
    env_logger::init();

    let Args {
        data_file,
        catalog,
        time_zone,
        as_of,
        no_color,
        command,
    } = Args::parse();

    let tracker = TrackerBuilder::new()
        .with_catalog_path(catalog)
        .with_time_zone(TimeZone::system())
        .with_time_zone_name(time_zone)
        .build()
        .context("Failed to initialize tracker")?;

    // --as-of is read in the tracker's zone, so the clock is fixed afterwards.
    let tracker = match as_of {
        Some(value) => {
            let now = tracker
                .calendar()
                .parse(&value)
                .context("Invalid --as-of date")?;
            tracker.with_clock(Clock::Fixed(now))
        }
        None => tracker,
    };

    let data = DataFile::new(data_file)?;
    let renderer = TerminalRenderer::new(!no_color);

    info!("Plotline started, data file {}", data.path().display());

    let cli = Cli::new(tracker, renderer, data);
    match command {
        Some(Plot { command }) => cli.handle_plot_command(command),
        Some(Stage { command }) => cli.handle_stage_command(command),
        Some(Report) => cli.report(),
        Some(Calendar(args)) => cli.calendar(&args),
        Some(Catalog) => cli.catalog(),
        None => cli.list_plots(),
    }
}
