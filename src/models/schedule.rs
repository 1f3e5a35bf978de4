//! Weekly opening-hours models (day schedules, effective schedules)

use chrono::Weekday;
use indexmap::IndexMap;

/// Canonical day names, Monday first
pub const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Minutes in a calendar day
pub const MINUTES_PER_DAY: u32 = 1440;

/// Convert a 0=Sunday day index into a 0=Monday index.
pub fn monday_index_from_sunday_index(day: u32) -> u32 {
    if day == 0 {
        6
    } else {
        day - 1
    }
}

/// Weekday for a 0=Monday index (values past 6 wrap onto Sunday)
pub fn weekday_from_monday_index(index: u32) -> Weekday {
    match index {
        0 => Weekday::Mon,
        1 => Weekday::Tue,
        2 => Weekday::Wed,
        3 => Weekday::Thu,
        4 => Weekday::Fri,
        5 => Weekday::Sat,
        _ => Weekday::Sun,
    }
}

/// Weekday for a 0=Sunday index
pub fn weekday_from_sunday_index(day: u32) -> Weekday {
    weekday_from_monday_index(monday_index_from_sunday_index(day))
}

/// Weekday matching an exact canonical name ("Monday", not "monday" or "Mon")
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    DAY_NAMES
        .iter()
        .position(|candidate| *candidate == name)
        .map(|index| weekday_from_monday_index(index as u32))
}

/// One day's opening window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DaySchedule {
    pub day: Weekday,
    pub is_open: bool,
    /// Minutes since local midnight, in [0, 1440)
    pub start_minute: u32,
    /// Minutes since local midnight, in [0, 1440]
    pub end_minute: u32,
}

/// A weekly schedule keyed by day, at most one entry per weekday
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EffectiveSchedule {
    days: IndexMap<Weekday, DaySchedule>,
}

impl EffectiveSchedule {
    /// Build from normalized entries; a later entry for the same day replaces an earlier one
    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = DaySchedule>,
    {
        Self {
            days: days.into_iter().map(|d| (d.day, d)).collect(),
        }
    }

    /// Monday to Friday 09:00 AM - 06:00 PM, weekend closed
    pub fn company_default() -> Self {
        Self::from_days((0..7).map(|index| DaySchedule {
            day: weekday_from_monday_index(index),
            is_open: index < 5,
            start_minute: 9 * 60,
            end_minute: 18 * 60,
        }))
    }

    pub fn get(&self, day: Weekday) -> Option<&DaySchedule> {
        self.days.get(&day)
    }

    /// Number of weekdays with an entry, open or closed
    pub fn day_count(&self) -> usize {
        self.days.len()
    }
}

/// Which source a resolved schedule came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduleTier {
    /// The technician's own weekly hours
    Technician,
    /// The company master schedule
    Company,
    /// The built-in Monday-Friday schedule
    Default,
}

/// A schedule together with the tier it was resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedSchedule {
    pub schedule: EffectiveSchedule,
    pub tier: ScheduleTier,
}
