use chrono::{DateTime, Duration, NaiveDateTime, Utc};

use crate::BaroError;

/// Timestamp format shared by query parameters and bucket keys.
///
/// Fixed-width, so lexicographic order on formatted keys is chronological
/// order. The aggregators rely on this when sorting buckets by key.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a timestamp as an hour-bucket key.
///
/// Records are hour-aligned upstream; this does not truncate, it only
/// formats, so two records group together exactly when their timestamps are
/// equal.
#[must_use]
pub fn bucket_key(ts: DateTime<Utc>) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Query time window; both bounds are inclusive at the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeWindow {
    /// Inclusive lower bound.
    pub start: DateTime<Utc>,
    /// Inclusive upper bound.
    pub end: DateTime<Utc>,
}

impl TimeWindow {
    /// Build a window from explicit bounds.
    ///
    /// # Errors
    /// Returns `BaroError::InvalidArg` if `start` is after `end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, BaroError> {
        if start > end {
            return Err(BaroError::invalid_arg(format!(
                "start_time {} is after end_time {}",
                start.format(TIMESTAMP_FORMAT),
                end.format(TIMESTAMP_FORMAT)
            )));
        }
        Ok(Self { start, end })
    }

    /// The last 24 hours, ending now.
    ///
    /// Computed at call time, never cached at startup, so a long-lived
    /// process never serves a stale default window.
    #[must_use]
    pub fn last_24h() -> Self {
        let end = Utc::now();
        Self {
            start: end - Duration::hours(24),
            end,
        }
    }

    /// Parse caller-supplied bounds, defaulting each missing side to the
    /// last-24-hours window.
    ///
    /// # Errors
    /// Returns `BaroError::InvalidArg` when a bound fails to parse as
    /// `YYYY-MM-DD HH:MM:SS` or when the resulting window is inverted.
    pub fn parse(start: Option<&str>, end: Option<&str>) -> Result<Self, BaroError> {
        let defaults = Self::last_24h();
        let start = match start {
            Some(s) => parse_timestamp(s)?,
            None => defaults.start,
        };
        let end = match end {
            Some(s) => parse_timestamp(s)?,
            None => defaults.end,
        };
        Self::new(start, end)
    }

    /// Whether `ts` falls inside the window (inclusive on both ends).
    #[must_use]
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        ts >= self.start && ts <= self.end
    }
}

/// Parse a `YYYY-MM-DD HH:MM:SS` string into a UTC timestamp.
///
/// # Errors
/// Returns `BaroError::InvalidArg` with the offending input on parse failure.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, BaroError> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|e| BaroError::invalid_arg(format!("malformed timestamp {s:?}: {e}")))
}
