//! JSON data file holding every plot.
//!
//! The core keeps nothing on disk; the CLI loads a [`PlotStore`] from this
//! file at the start of each command and writes it back after a change.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use log::debug;
use plotline_core::PlotStore;

pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    /// Uses `path`, or `$XDG_DATA_HOME/plotline/plots.json` when none is
    /// given.
    pub fn new(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => xdg::BaseDirectories::with_prefix("plotline")
                .place_data_file("plots.json")
                .context("Failed to resolve the default data file location")?,
        };
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the store. A missing file is an empty store.
    pub fn load(&self) -> Result<PlotStore> {
        if !self.path.exists() {
            debug!("No data file at {}, starting empty", self.path.display());
            return Ok(PlotStore::new());
        }

        let contents = fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;
        PlotStore::from_json_str(&contents)
            .with_context(|| format!("Failed to parse {}", self.path.display()))
    }

    pub fn save(&self, store: &PlotStore) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let json = store.to_json_string()?;
        fs::write(&self.path, json)
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        debug!("Saved {} plots to {}", store.len(), self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_missing_file_is_empty_store() {
        let temp_dir = TempDir::new().unwrap();
        let data = DataFile::new(Some(temp_dir.path().join("plots.json"))).unwrap();
        assert!(data.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("plots.json");
        let data = DataFile::new(Some(path.clone())).unwrap();

        data.save(&PlotStore::new()).unwrap();
        assert!(path.exists());
        assert!(data.load().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("plots.json");
        fs::write(&path, "not json").unwrap();

        let err = DataFile::new(Some(path)).unwrap().load().unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }
}
