//! Tests for the tracker module.

use std::fs;

use jiff::Timestamp;
use tempfile::TempDir;

use super::*;
use crate::{
    error::TrackerError,
    models::{ScheduleStatus, StageStatus},
    params::{AddDelay, AddIssue, AddNote, CreatePlot, UpdateStageStatus},
};

fn monday() -> Timestamp {
    "2024-03-04T09:00:00Z".parse().unwrap()
}

/// Helper function to create a tracker with a small catalog and a frozen clock
fn create_test_tracker(now: Timestamp) -> Tracker {
    let catalog = StageCatalog::new(vec![
        crate::catalog::StageTemplate::new("Groundworks", 5),
        crate::catalog::StageTemplate::new("Frame", 3),
        crate::catalog::StageTemplate::new("Roof", 2),
    ])
    .expect("Failed to build catalog");

    TrackerBuilder::new()
        .with_catalog(catalog)
        .with_clock(Clock::Fixed(now))
        .build()
        .expect("Failed to create tracker")
}

fn create_params(name: &str) -> CreatePlot {
    CreatePlot {
        name: name.to_string(),
        address: "1 Test Street".to_string(),
        start_date: "2024-03-04".to_string(),
        end_date: "2024-03-29".to_string(),
    }
}

#[test]
fn test_create_plot_trims_and_stamps() {
    let tracker = create_test_tracker(monday());
    let plot = tracker
        .create_plot(&CreatePlot {
            name: "  Plot 1 ".to_string(),
            ..create_params("")
        })
        .expect("Failed to create plot");

    assert_eq!(plot.name, "Plot 1");
    assert_eq!(plot.stages.len(), 3);
    assert_eq!(plot.created_at, monday());
    assert_eq!(plot.start_date, "2024-03-04T00:00:00Z".parse::<Timestamp>().unwrap());
}

#[test]
fn test_create_plot_rejects_inverted_dates() {
    let tracker = create_test_tracker(monday());
    let err = tracker
        .create_plot(&CreatePlot {
            end_date: "2024-02-01".to_string(),
            ..create_params("Plot 1")
        })
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
}

#[test]
fn test_status_update_via_params() {
    let tracker = create_test_tracker(monday());
    let plot = tracker.create_plot(&create_params("Plot 2")).unwrap();

    let updated = tracker
        .update_stage_status(
            &plot,
            &UpdateStageStatus {
                stage_id: plot.stages[1].id.to_string(),
                status: "completed".to_string(),
            },
        )
        .expect("Failed to update status");

    assert!(updated.stages[0].auto_completed);
    assert_eq!(updated.stages[1].status, StageStatus::Completed);
    assert_eq!(updated.current_stage_id, updated.stages[2].id);
    assert_eq!(updated.stages[2].status, StageStatus::InProgress);
}

#[test]
fn test_bad_status_leaves_plot_untouched() {
    let tracker = create_test_tracker(monday());
    let plot = tracker.create_plot(&create_params("Plot 3")).unwrap();
    let before = plot.clone();

    let err = tracker
        .update_stage_status(
            &plot,
            &UpdateStageStatus {
                stage_id: plot.stages[0].id.to_string(),
                status: "paused".to_string(),
            },
        )
        .unwrap_err();
    assert!(matches!(err, TrackerError::InvalidInput { .. }));
    assert_eq!(plot, before);
}

#[test]
fn test_unknown_stage_is_not_found() {
    let tracker = create_test_tracker(monday());
    let plot = tracker.create_plot(&create_params("Plot 4")).unwrap();

    let err = tracker
        .add_stage_issue(
            &plot,
            &AddIssue {
                stage_id: "missing".to_string(),
                description: "Anything".to_string(),
            },
        )
        .unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn test_issue_lifecycle() {
    let tracker = create_test_tracker(monday());
    let plot = tracker.create_plot(&create_params("Plot 5")).unwrap();
    let stage_id = plot.stages[0].id.to_string();

    let plot = tracker
        .add_stage_issue(
            &plot,
            &AddIssue {
                stage_id: stage_id.clone(),
                description: " Soft spot by drain ".to_string(),
            },
        )
        .unwrap();
    let issue = plot.stages[0].issues[0].clone();
    assert_eq!(issue.description, "Soft spot by drain");
    assert!(!issue.resolved);

    let resolved = tracker
        .resolve_stage_issue(&plot, &stage_id, issue.id.as_str())
        .unwrap();
    assert!(resolved.stages[0].issues[0].resolved);
    assert_eq!(resolved.stages[0].issues[0].resolved_at, Some(monday()));

    let err = tracker
        .resolve_stage_issue(&plot, &stage_id, "no-such-issue")
        .unwrap_err();
    assert!(matches!(err, TrackerError::IssueNotFound { .. }));
}

#[test]
fn test_delay_moves_schedule() {
    let tracker = create_test_tracker(monday());
    let plot = tracker.create_plot(&create_params("Plot 6")).unwrap();

    // Monday 4th to Friday 29th: 20 work days; remaining (5 - 1) + 3 + 2 = 9.
    let before = tracker.assess(&plot);
    assert_eq!(before.status, ScheduleStatus::Ahead);
    assert_eq!(before.days_ahead_or_behind, 11);
    assert_eq!(tracker.remaining_duration(&plot), 9);

    let delayed = tracker
        .add_stage_delay(
            &plot,
            &AddDelay {
                stage_id: plot.stages[0].id.to_string(),
                reason: "Ground water".to_string(),
                days_added: 20,
            },
        )
        .unwrap();

    // Groundworks is now delayed: 3 + 2 + 20 = 25.
    let after = tracker.assess(&delayed);
    assert_eq!(after.status, ScheduleStatus::Behind);
    assert_eq!(after.days_ahead_or_behind, 5);

    let invalid = tracker.add_stage_delay(
        &plot,
        &AddDelay {
            stage_id: plot.stages[0].id.to_string(),
            reason: "Ground water".to_string(),
            days_added: 0,
        },
    );
    assert!(invalid.is_err());
}

#[test]
fn test_notes_are_dated() {
    let tracker = create_test_tracker(monday());
    let plot = tracker.create_plot(&create_params("Plot 7")).unwrap();

    let plot = tracker
        .add_plot_note(&plot, &AddNote { text: "Site cabin delivered".to_string() })
        .unwrap();
    let plot = tracker
        .add_stage_note(
            &plot,
            plot.stages[0].id.as_str(),
            &AddNote { text: "Pegged out".to_string() },
        )
        .unwrap();

    assert_eq!(plot.notes, "2024-03-04: Site cabin delivered");
    assert_eq!(plot.stages[0].notes, "2024-03-04: Pegged out");

    assert!(tracker
        .add_plot_note(&plot, &AddNote { text: "  ".to_string() })
        .is_err());
}

#[test]
fn test_summaries_and_report() {
    let tracker = create_test_tracker(monday());
    let first = tracker.create_plot(&create_params("Plot A")).unwrap();
    let second = tracker.create_plot(&create_params("Plot B")).unwrap();
    let second = tracker
        .update_stage_status(
            &second,
            &UpdateStageStatus {
                stage_id: second.stages[0].id.to_string(),
                status: "completed".to_string(),
            },
        )
        .unwrap();

    let summaries = tracker.summaries(&[first.clone(), second.clone()]);
    assert_eq!(summaries[0].name, "Plot A");
    assert_eq!(summaries[1].progress, 33);
    assert_eq!(summaries[1].current_stage, "Frame");

    let report = tracker.portfolio_report(&[first, second]);
    assert_eq!(report.total_plots, 2);
    assert_eq!(report.summaries[0].name, "Plot B");
    assert_eq!(report.generated_at, monday());
}

#[test]
fn test_stage_events_on_parses_date() {
    let tracker = create_test_tracker(monday());
    let plot = tracker.create_plot(&create_params("Plot 8")).unwrap();

    let events = tracker.stage_events_on(&[plot.clone()], "2024-03-04").unwrap();
    assert_eq!(events.len(), 2);

    let err = tracker.stage_events_on(&[plot], "4th March").unwrap_err();
    assert!(matches!(err, TrackerError::InvalidDate { .. }));
}

#[test]
fn test_builder_loads_catalog_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("stages.json");
    fs::write(
        &path,
        r#"[{"name": "Slab", "duration": 2}, {"name": "Shell", "duration": 6}]"#,
    )
    .unwrap();

    let tracker = TrackerBuilder::new()
        .with_catalog_path(Some(&path))
        .build()
        .expect("Failed to create tracker");
    assert_eq!(tracker.catalog().len(), 2);
    assert_eq!(tracker.catalog().total_duration(), 8);
}

#[test]
fn test_builder_missing_catalog_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let result = TrackerBuilder::new()
        .with_catalog_path(Some(temp_dir.path().join("absent.json")))
        .build();
    assert!(matches!(result, Err(TrackerError::FileSystem { .. })));
}

#[test]
fn test_builder_defaults() {
    let tracker = TrackerBuilder::new()
        .with_catalog_path(None::<&str>)
        .build()
        .unwrap();
    assert_eq!(tracker.catalog(), &StageCatalog::default());
    assert_eq!(tracker.calendar().time_zone().iana_name(), Some("UTC"));
}

#[test]
fn test_builder_unknown_time_zone() {
    let result = TrackerBuilder::new()
        .with_time_zone_name(Some("Mars/Olympus_Mons"))
        .build();
    assert!(matches!(result, Err(TrackerError::Configuration { .. })));
}

#[test]
fn test_builder_fixed_zone_shifts_note_dates() {
    let tracker = TrackerBuilder::new()
        .with_time_zone(TimeZone::fixed(jiff::tz::offset(-5)))
        .with_clock(Clock::Fixed("2024-03-05T02:00:00Z".parse().unwrap()))
        .build()
        .unwrap();
    let plot = tracker
        .create_plot(&CreatePlot {
            name: "Plot 9".to_string(),
            address: "9 Dock Road".to_string(),
            start_date: "2024-03-04".to_string(),
            end_date: "2024-06-28".to_string(),
        })
        .unwrap();

    // 02:00 UTC on the 5th is still the 4th five hours behind.
    let plot = tracker
        .add_plot_note(&plot, &AddNote { text: "Late delivery".to_string() })
        .unwrap();
    assert_eq!(plot.notes, "2024-03-04: Late delivery");
}
