//! Requested date range and local-time helpers

use chrono::{
    DateTime, Datelike, Duration, FixedOffset, LocalResult, NaiveDate, NaiveDateTime, Offset,
    TimeZone, Utc,
};
use chrono_tz::Tz;

use crate::error::{AppError, AppResult};
use crate::models::schedule::monday_index_from_sunday_index;

/// Longest span a single request may cover, in days
pub const MAX_RANGE_DAYS: i64 = 366;

/// Inclusive range of local calendar days
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl CalendarRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> AppResult<Self> {
        if end < start {
            return Err(AppError::Validation(format!(
                "end ({}) is before start ({})",
                end, start
            )));
        }
        if (end - start).num_days() > MAX_RANGE_DAYS {
            return Err(AppError::Validation(format!(
                "range {} to {} is longer than {} days",
                start, end, MAX_RANGE_DAYS
            )));
        }
        Ok(Self { start, end })
    }

    /// Range from optional query values, defaulting to `today - lookback ..= today + lookahead`
    pub fn resolve(
        start: Option<&str>,
        end: Option<&str>,
        today: NaiveDate,
        lookback_days: i64,
        lookahead_days: i64,
    ) -> AppResult<Self> {
        let start = match start.filter(|s| !s.trim().is_empty()) {
            Some(s) => parse_day(s, "start")?,
            None => today - Duration::days(lookback_days),
        };
        let end = match end.filter(|s| !s.trim().is_empty()) {
            Some(s) => parse_day(s, "end")?,
            None => today + Duration::days(lookahead_days),
        };
        Self::new(start, end)
    }

    /// Monday of the week containing `start`
    pub fn week_start(&self) -> NaiveDate {
        let offset = monday_index_from_sunday_index(self.start.weekday().num_days_from_sunday());
        self.start - Duration::days(offset as i64)
    }

    /// First local instant of `start` through last local instant of `end`, in UTC
    pub fn utc_bounds(&self, tz: Tz) -> (DateTime<Utc>, DateTime<Utc>) {
        (
            local_instant(tz, self.start, 0).with_timezone(&Utc),
            end_of_day(tz, self.end).with_timezone(&Utc),
        )
    }
}

/// Accepts "YYYY-MM-DD" or an RFC 3339 date-time (its own-offset date is used)
fn parse_day(s: &str, field: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(s).map(|dt| dt.date_naive()))
        .map_err(|_| AppError::Validation(format!("Invalid {} date: {}", field, s)))
}

/// Every date from `from` through `through`, inclusive
pub fn days(from: NaiveDate, through: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    from.iter_days().take_while(move |day| *day <= through)
}

/// Local instant `minute` minutes after midnight of `date` (1440 is the next midnight)
pub fn local_instant(tz: Tz, date: NaiveDate, minute: u32) -> DateTime<FixedOffset> {
    let naive = date.and_time(chrono::NaiveTime::MIN) + Duration::minutes(minute as i64);
    resolve_local(tz, naive)
}

/// 23:59:59.999 local time on `date`
pub fn end_of_day(tz: Tz, date: NaiveDate) -> DateTime<FixedOffset> {
    let naive = date.and_time(chrono::NaiveTime::MIN) + Duration::milliseconds(86_399_999);
    resolve_local(tz, naive)
}

pub fn to_local(tz: Tz, instant: DateTime<Utc>) -> DateTime<FixedOffset> {
    fixed(instant.with_timezone(&tz))
}

fn fixed(dt: DateTime<Tz>) -> DateTime<FixedOffset> {
    dt.with_timezone(&dt.offset().fix())
}

// Ambiguous times take the earlier offset; times skipped by a DST jump move forward an hour.
fn resolve_local(tz: Tz, naive: NaiveDateTime) -> DateTime<FixedOffset> {
    match tz.from_local_datetime(&naive) {
        LocalResult::Single(dt) => fixed(dt),
        LocalResult::Ambiguous(earliest, _) => fixed(earliest),
        LocalResult::None => match tz.from_local_datetime(&(naive + Duration::hours(1))).earliest() {
            Some(dt) => fixed(dt),
            None => fixed(tz.from_utc_datetime(&naive)),
        },
    }
}
