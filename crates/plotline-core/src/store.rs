//! In-memory plot collection.
//!
//! The engine never persists anything. [`PlotStore`] is a small keyed
//! collection a caller can keep in memory and serialize wherever it likes
//! (the CLI writes it to a JSON file). Updates go through
//! [`PlotStore::apply`], which runs an engine operation against the stored
//! plot and replaces it only when the operation succeeds.

use jiff::Timestamp;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::{
    error::{Result, TrackerError},
    models::{Plot, PlotId},
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlotStore {
    #[serde(default)]
    plots: Vec<Plot>,
}

impl PlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Adds a plot, replacing any stored plot with the same id.
    pub fn insert(&mut self, plot: Plot) {
        match self.position(&plot.id) {
            Some(index) => self.plots[index] = plot,
            None => self.plots.push(plot),
        }
    }

    pub fn get(&self, id: &PlotId) -> Result<&Plot> {
        self.position(id)
            .map(|index| &self.plots[index])
            .ok_or_else(|| not_found(id))
    }

    /// Plots in insertion order.
    pub fn list(&self) -> &[Plot] {
        &self.plots
    }

    pub fn len(&self) -> usize {
        self.plots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plots.is_empty()
    }

    /// Replaces a stored plot and stamps its `updated_at`.
    pub fn replace(&mut self, mut plot: Plot, now: Timestamp) -> Result<&Plot> {
        let index = self.position(&plot.id).ok_or_else(|| not_found(&plot.id))?;
        plot.updated_at = now;
        self.plots[index] = plot;
        Ok(&self.plots[index])
    }

    pub fn remove(&mut self, id: &PlotId) -> Result<Plot> {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        debug!("Removing plot {id}");
        Ok(self.plots.remove(index))
    }

    /// Runs `op` against the stored plot and stores its result.
    ///
    /// When `op` fails the stored plot is left as it was.
    pub fn apply<F>(&mut self, id: &PlotId, op: F) -> Result<&Plot>
    where
        F: FnOnce(&Plot) -> Result<Plot>,
    {
        let index = self.position(id).ok_or_else(|| not_found(id))?;
        let updated = op(&self.plots[index])?;
        if updated.id != *id {
            return Err(TrackerError::invalid_input("plot_id")
                .with_reason(format!("operation returned plot {} for {id}", updated.id)));
        }
        self.plots[index] = updated;
        Ok(&self.plots[index])
    }

    fn position(&self, id: &PlotId) -> Option<usize> {
        self.plots.iter().position(|p| &p.id == id)
    }
}

fn not_found(id: &PlotId) -> TrackerError {
    TrackerError::PlotNotFound { id: id.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        calendar::WorkCalendar,
        catalog::StageCatalog,
        factory::create_plot,
        models::StageStatus,
        progression::{add_stage_issue, update_stage_status},
    };

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn plot(name: &str) -> Plot {
        create_plot(
            &StageCatalog::default(),
            &WorkCalendar::default(),
            name,
            "Site",
            ts("2024-03-04T08:00:00Z"),
            ts("2024-09-30T17:00:00Z"),
            ts("2024-03-01T12:00:00Z"),
        )
        .unwrap()
    }

    #[test]
    fn test_insert_get_list() {
        let mut store = PlotStore::new();
        let a = plot("A");
        let b = plot("B");
        store.insert(a.clone());
        store.insert(b.clone());

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(&b.id).unwrap().name, "B");
        let names: Vec<_> = store.list().iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, ["A", "B"]);

        let mut renamed = a.clone();
        renamed.name = "A2".to_string();
        store.insert(renamed);
        assert_eq!(store.len(), 2);
        assert_eq!(store.list()[0].name, "A2");
    }

    #[test]
    fn test_missing_plot() {
        let mut store = PlotStore::new();
        let id = PlotId::from("nope");
        assert!(matches!(store.get(&id), Err(TrackerError::PlotNotFound { .. })));
        assert!(store.remove(&id).unwrap_err().is_not_found());
        assert!(store.replace(plot("X"), ts("2024-03-05T00:00:00Z")).is_err());
    }

    #[test]
    fn test_replace_stamps_updated_at() {
        let mut store = PlotStore::new();
        let p = plot("A");
        store.insert(p.clone());

        let now = ts("2024-04-01T10:00:00Z");
        let stored = store.replace(p, now).unwrap();
        assert_eq!(stored.updated_at, now);
    }

    #[test]
    fn test_apply_success_and_failure() {
        let mut store = PlotStore::new();
        let p = plot("A");
        let id = p.id.clone();
        let stage = p.stages[2].id.clone();
        store.insert(p);

        let now = ts("2024-03-20T10:00:00Z");
        let stored = store
            .apply(&id, |plot| update_stage_status(plot, &stage, StageStatus::Completed, now))
            .unwrap();
        assert_eq!(stored.completed_stage_count(), 3);

        let before = store.get(&id).unwrap().clone();
        let missing = crate::models::StageId::from("missing");
        let err = store
            .apply(&id, |plot| add_stage_issue(plot, &missing, "Crack", now))
            .unwrap_err();
        assert!(matches!(err, TrackerError::StageNotFound { .. }));
        assert_eq!(store.get(&id).unwrap(), &before);
    }

    #[test]
    fn test_remove() {
        let mut store = PlotStore::new();
        let p = plot("A");
        store.insert(p.clone());
        let removed = store.remove(&p.id).unwrap();
        assert_eq!(removed.name, "A");
        assert!(store.is_empty());
    }

    #[test]
    fn test_json_round_trip() {
        let mut store = PlotStore::new();
        store.insert(plot("A"));
        let json = store.to_json_string().unwrap();
        assert!(json.contains("\"currentStageId\""));
        assert_eq!(PlotStore::from_json_str(&json).unwrap(), store);
        assert!(PlotStore::from_json_str("{}").unwrap().is_empty());
    }
}
