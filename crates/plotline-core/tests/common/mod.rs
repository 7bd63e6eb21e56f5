use jiff::Timestamp;
use plotline_core::{
    params::CreatePlot, Clock, Plot, StageCatalog, StageTemplate, Tracker, TrackerBuilder,
};

pub fn ts(value: &str) -> Timestamp {
    value.parse().expect("Failed to parse timestamp")
}

/// Helper function to create a tracker with a frozen clock
pub fn create_test_tracker(durations: &[u32], now: &str) -> Tracker {
    let templates = durations
        .iter()
        .enumerate()
        .map(|(i, d)| StageTemplate::new(format!("Stage {}", i + 1), *d))
        .collect();

    TrackerBuilder::new()
        .with_catalog(StageCatalog::new(templates).expect("Failed to build catalog"))
        .with_clock(Clock::Fixed(ts(now)))
        .build()
        .expect("Failed to create tracker")
}

#[allow(dead_code)]
pub fn create_test_plot(tracker: &Tracker, name: &str, start: &str, end: &str) -> Plot {
    tracker
        .create_plot(&CreatePlot {
            name: name.to_string(),
            address: format!("{name}, Test Lane"),
            start_date: start.to_string(),
            end_date: end.to_string(),
        })
        .expect("Failed to create plot")
}
