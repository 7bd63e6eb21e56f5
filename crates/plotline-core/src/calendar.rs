//! Calendar and work-day arithmetic.
//!
//! All functions operate on [`Timestamp`]s but evaluate days and weekdays as
//! civil dates in the calendar's time zone. "Days" always means calendar days;
//! "work days" are Monday through Friday. Public holidays are not modelled.

use jiff::{
    civil::{Date, Weekday},
    tz::TimeZone,
    Span, Timestamp, ToSpan, Zoned,
};

use crate::error::{Result, TrackerError};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Work-day calendar bound to a time zone.
#[derive(Debug, Clone)]
pub struct WorkCalendar {
    tz: TimeZone,
}

impl WorkCalendar {
    /// Creates a calendar evaluating dates in the given time zone.
    pub fn new(tz: TimeZone) -> Self {
        Self { tz }
    }

    /// Returns the time zone of this calendar.
    pub fn time_zone(&self) -> &TimeZone {
        &self.tz
    }

    /// Returns the civil date of `ts` in this calendar's zone.
    pub fn date_of(&self, ts: Timestamp) -> Date {
        self.zoned(ts).date()
    }

    /// Shifts `ts` by `days` calendar days, keeping the wall-clock time.
    pub fn add_days(&self, ts: Timestamp, days: i64) -> Result<Timestamp> {
        let span = Span::new().try_days(days)?;
        Ok(self.zoned(ts).checked_add(span)?.timestamp())
    }

    /// Steps forward one day at a time from `ts` until `work_days` weekdays
    /// have been stepped over.
    ///
    /// The starting day itself is never counted, so `add_work_days(d, 0) == d`
    /// and any positive count lands on a weekday.
    pub fn add_work_days(&self, ts: Timestamp, work_days: u32) -> Result<Timestamp> {
        let mut current = self.zoned(ts);
        let mut added = 0;
        while added < work_days {
            current = current.checked_add(1.day())?;
            if is_weekday(current.weekday()) {
                added += 1;
            }
        }
        Ok(current.timestamp())
    }

    /// Absolute calendar-day distance between two instants, rounded up.
    pub fn days_between(&self, a: Timestamp, b: Timestamp) -> u64 {
        let diff = (b.as_millisecond() - a.as_millisecond()).unsigned_abs();
        diff.div_ceil(MILLIS_PER_DAY as u64)
    }

    /// Number of weekdays in the inclusive civil-date range `[a, b]`.
    ///
    /// Time of day is ignored. Returns 0 when `a` is after `b`.
    pub fn work_days_between(&self, a: Timestamp, b: Timestamp) -> u32 {
        if a > b {
            return 0;
        }
        let end = self.date_of(b);
        let mut day = self.date_of(a);
        let mut count = 0;
        while day <= end {
            if is_weekday(day.weekday()) {
                count += 1;
            }
            match day.tomorrow() {
                Ok(next) => day = next,
                Err(_) => break,
            }
        }
        count
    }

    /// Parses an ISO-8601 boundary value.
    ///
    /// Accepts RFC 3339 date-times (`2024-03-04T09:00:00Z`) and bare dates
    /// (`2024-03-04`), the latter taken as midnight in this calendar's zone.
    pub fn parse(&self, value: &str) -> Result<Timestamp> {
        let trimmed = value.trim();
        if let Ok(ts) = trimmed.parse::<Timestamp>() {
            return Ok(ts);
        }
        match trimmed.parse::<Date>() {
            Ok(date) => Ok(date.to_zoned(self.tz.clone())?.timestamp()),
            Err(e) => Err(TrackerError::InvalidDate {
                value: value.to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Parses a civil date, accepting either a bare date or a full date-time
    /// (reduced to its date in this calendar's zone).
    pub fn parse_date(&self, value: &str) -> Result<Date> {
        let trimmed = value.trim();
        if let Ok(date) = trimmed.parse::<Date>() {
            return Ok(date);
        }
        self.parse(trimmed).map(|ts| self.date_of(ts))
    }

    fn zoned(&self, ts: Timestamp) -> Zoned {
        ts.to_zoned(self.tz.clone())
    }
}

impl Default for WorkCalendar {
    fn default() -> Self {
        Self::new(TimeZone::UTC)
    }
}

/// Monday through Friday.
pub fn is_weekday(day: Weekday) -> bool {
    !matches!(day, Weekday::Saturday | Weekday::Sunday)
}
