use chrono::{DateTime, Duration, NaiveDate, NaiveTime, Utc};

const QUERY_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// The upstream query window covering one settlement day.
///
/// The end bound is 23:59:59 of the same day and feeds the upstream
/// `created_at__lt` filter, so the final second of the day is not covered.
/// This matches the deployed upstream contract; see the window tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindow {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DayWindow {
    /// Build the window for a calendar day, UTC.
    pub fn for_date(date: NaiveDate) -> Self {
        let start = date.and_time(NaiveTime::MIN).and_utc();
        let end = start + Duration::seconds(86_399);
        Self { start, end }
    }

    /// Start bound formatted for the `created_at__gte` query parameter.
    pub fn start_param(&self) -> String {
        self.start.format(QUERY_TIME_FORMAT).to_string()
    }

    /// End bound formatted for the `created_at__lt` query parameter.
    pub fn end_param(&self) -> String {
        self.end.format(QUERY_TIME_FORMAT).to_string()
    }
}
