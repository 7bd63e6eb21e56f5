//! DateTime display utilities.
//!
//! Timestamps are stored in UTC and shown in the tracker's time zone, the
//! same zone that decides which calendar day a timestamp falls on.

use std::fmt;

use jiff::{tz::TimeZone, Timestamp};

/// Formats a timestamp as `YYYY-MM-DD HH:MM:SS TZ` in the given zone.
pub struct LocalDateTime<'a>(pub &'a Timestamp, pub &'a TimeZone);

impl fmt::Display for LocalDateTime<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .to_zoned(self.1.clone())
                .strftime("%Y-%m-%d %H:%M:%S %Z")
        )
    }
}

/// Formats the calendar day of a timestamp as `DD Mon YYYY`, e.g.
/// `04 Mar 2024`, in the given zone.
///
/// Stage dates are shown this way since only the day is meaningful on site.
pub struct LocalDate<'a>(pub &'a Timestamp, pub &'a TimeZone);

impl fmt::Display for LocalDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_zoned(self.1.clone()).strftime("%d %b %Y"))
    }
}

/// A value whose dates are displayed in a particular time zone.
///
/// Plots, stages, issues, delays and reports carry timestamps, so they are
/// displayed through this wrapper rather than directly.
///
/// # Examples
///
/// ```rust
/// use jiff::{tz::{self, TimeZone}, Timestamp};
/// use plotline_core::{display::InZone, models::Delay};
///
/// let recorded: Timestamp = "2024-03-04T22:00:00Z".parse().unwrap();
/// let delay = Delay::new("Crane failure", 2, recorded);
///
/// let utc = InZone::new(&delay, &TimeZone::UTC).to_string();
/// assert!(utc.ends_with("(recorded 04 Mar 2024)"));
///
/// let east = TimeZone::fixed(tz::offset(3));
/// assert!(InZone::new(&delay, &east).to_string().ends_with("(recorded 05 Mar 2024)"));
/// ```
pub struct InZone<'a, T: ?Sized> {
    pub value: &'a T,
    pub tz: &'a TimeZone,
}

impl<'a, T: ?Sized> InZone<'a, T> {
    pub fn new(value: &'a T, tz: &'a TimeZone) -> Self {
        Self { value, tz }
    }

    /// Wraps another value in the same zone.
    pub(crate) fn with<U: ?Sized>(&self, value: &'a U) -> InZone<'a, U> {
        InZone::new(value, self.tz)
    }

    pub(crate) fn date(&self, ts: &'a Timestamp) -> LocalDate<'a> {
        LocalDate(ts, self.tz)
    }

    pub(crate) fn date_time(&self, ts: &'a Timestamp) -> LocalDateTime<'a> {
        LocalDateTime(ts, self.tz)
    }
}
