//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use jiff::tz::TimeZone;
use log::{debug, info};

use super::{Clock, Tracker};
use crate::{
    calendar::WorkCalendar,
    catalog::StageCatalog,
    error::{Result, TrackerError},
};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    catalog_path: Option<PathBuf>,
    catalog: Option<StageCatalog>,
    time_zone: Option<TimeZone>,
    time_zone_name: Option<String>,
    clock: Clock,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a JSON file to load the stage catalog from.
    ///
    /// If not specified, the built-in catalog is used. A catalog supplied with
    /// [`with_catalog`](Self::with_catalog) takes precedence over a path.
    pub fn with_catalog_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.catalog_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses the given catalog instead of loading one.
    pub fn with_catalog(mut self, catalog: StageCatalog) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Sets the time zone in which days and weekdays are evaluated.
    ///
    /// Defaults to UTC.
    pub fn with_time_zone(mut self, tz: TimeZone) -> Self {
        self.time_zone = Some(tz);
        self
    }

    /// Sets the time zone by IANA name, e.g. `Europe/London`.
    ///
    /// The name is resolved in [`build`](Self::build) and takes precedence
    /// over [`with_time_zone`](Self::with_time_zone).
    pub fn with_time_zone_name(mut self, name: Option<impl Into<String>>) -> Self {
        if let Some(name) = name {
            self.time_zone_name = Some(name.into());
        }
        self
    }

    /// Sets the clock operations are stamped with.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Builds the configured tracker instance.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::FileSystem` if the catalog file cannot be read
    /// Returns `TrackerError::Catalog` or `TrackerError::Serialization` if the
    /// catalog file is invalid
    /// Returns `TrackerError::Configuration` if the time zone name is unknown
    pub fn build(self) -> Result<Tracker> {
        let catalog = match (self.catalog, self.catalog_path) {
            (Some(catalog), _) => catalog,
            (None, Some(path)) => {
                info!("Loading stage catalog from {}", path.display());
                StageCatalog::load(&path)?
            }
            (None, None) => StageCatalog::default(),
        };
        debug!(
            "Tracker configured with {} stages ({} work days nominal)",
            catalog.len(),
            catalog.total_duration()
        );

        let tz = match self.time_zone_name {
            Some(name) => TimeZone::get(&name).map_err(|e| TrackerError::Configuration {
                message: format!("Unknown time zone '{name}': {e}"),
            })?,
            None => self.time_zone.unwrap_or(TimeZone::UTC),
        };
        debug!("Evaluating work days in {}", tz.iana_name().unwrap_or("a fixed zone"));

        let calendar = WorkCalendar::new(tz);
        Ok(Tracker::new(catalog, calendar, self.clock))
    }
}
