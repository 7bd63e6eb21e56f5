//! Plot construction from the stage catalog.

use jiff::Timestamp;
use log::info;

use crate::{
    calendar::WorkCalendar,
    catalog::StageCatalog,
    error::{Result, TrackerError},
    models::{Plot, PlotId, Stage, StageId, StageStatus},
};

/// Builds a new plot with one stage per catalog template.
///
/// Stages are chained back to back: each planned start is the previous
/// stage's planned end, and each planned end is the planned start plus the
/// template's duration in work days. The first stage starts in progress on the
/// plot start date and becomes the current stage.
///
/// Ordering of `start` and `end` is the caller's responsibility; see
/// [`crate::params::CreatePlot::validate`].
pub fn create_plot(
    catalog: &StageCatalog,
    calendar: &WorkCalendar,
    name: &str,
    address: &str,
    start: Timestamp,
    end: Timestamp,
    now: Timestamp,
) -> Result<Plot> {
    let mut stages = Vec::with_capacity(catalog.len());
    let mut planned_start = start;

    for (index, template) in catalog.iter().enumerate() {
        let planned_end = calendar.add_work_days(planned_start, template.duration)?;
        let first = index == 0;

        stages.push(Stage {
            id: StageId::new(),
            name: template.name.clone(),
            duration: template.duration,
            status: if first {
                StageStatus::InProgress
            } else {
                StageStatus::NotStarted
            },
            planned_start_date: planned_start,
            planned_end_date: planned_end,
            actual_start_date: first.then_some(start),
            actual_end_date: None,
            notes: String::new(),
            issues: Vec::new(),
            delays: Vec::new(),
            auto_completed: false,
        });

        planned_start = planned_end;
    }

    let current_stage_id = stages
        .first()
        .map(|s| s.id.clone())
        .ok_or_else(|| TrackerError::catalog("catalog must contain at least one stage"))?;

    let plot = Plot {
        id: PlotId::new(),
        name: name.to_string(),
        address: address.to_string(),
        start_date: start,
        end_date: end,
        current_stage_id,
        stages,
        notes: String::new(),
        created_at: now,
        updated_at: now,
    };

    info!(
        "Created plot {} '{}' with {} stages",
        plot.id,
        plot.name,
        plot.stages.len()
    );
    Ok(plot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::StageTemplate;

    fn ts(s: &str) -> Timestamp {
        s.parse().unwrap()
    }

    fn two_stage_catalog() -> StageCatalog {
        StageCatalog::new(vec![
            StageTemplate::new("Groundworks", 5),
            StageTemplate::new("Frame", 3),
        ])
        .unwrap()
    }

    #[test]
    fn test_planned_dates_chain_on_work_days() {
        let monday = ts("2024-03-04T00:00:00Z");
        let plot = create_plot(
            &two_stage_catalog(),
            &WorkCalendar::default(),
            "Plot 1",
            "1 High Street",
            monday,
            ts("2024-06-03T00:00:00Z"),
            monday,
        )
        .unwrap();

        let first = &plot.stages[0];
        let second = &plot.stages[1];
        assert_eq!(first.planned_start_date, monday);
        assert_eq!(first.planned_end_date, ts("2024-03-11T00:00:00Z"));
        assert_eq!(second.planned_start_date, ts("2024-03-11T00:00:00Z"));
        assert_eq!(second.planned_end_date, ts("2024-03-14T00:00:00Z"));
    }

    #[test]
    fn test_initial_stage_states() {
        let start = ts("2024-03-04T08:00:00Z");
        let now = ts("2024-03-01T12:00:00Z");
        let plot = create_plot(
            &StageCatalog::default(),
            &WorkCalendar::default(),
            "Plot 2",
            "2 High Street",
            start,
            ts("2024-09-04T08:00:00Z"),
            now,
        )
        .unwrap();

        assert_eq!(plot.stages.len(), StageCatalog::default().len());
        assert_eq!(plot.current_stage_id, plot.stages[0].id);
        assert_eq!(plot.stages[0].status, StageStatus::InProgress);
        assert_eq!(plot.stages[0].actual_start_date, Some(start));

        for stage in &plot.stages[1..] {
            assert_eq!(stage.status, StageStatus::NotStarted);
            assert!(stage.actual_start_date.is_none());
            assert!(stage.actual_end_date.is_none());
            assert!(stage.issues.is_empty() && stage.delays.is_empty());
            assert!(!stage.auto_completed);
        }

        assert_eq!(plot.created_at, now);
        assert_eq!(plot.updated_at, now);
        assert!(plot.notes.is_empty());
    }

    #[test]
    fn test_stage_names_follow_catalog_order() {
        let catalog = StageCatalog::default();
        let plot = create_plot(
            &catalog,
            &WorkCalendar::default(),
            "Plot 3",
            "3 High Street",
            ts("2024-03-04T00:00:00Z"),
            ts("2024-12-04T00:00:00Z"),
            ts("2024-03-04T00:00:00Z"),
        )
        .unwrap();

        let plot_names: Vec<_> = plot.stages.iter().map(|s| s.name.as_str()).collect();
        let catalog_names: Vec<_> = catalog.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(plot_names, catalog_names);
    }
}
