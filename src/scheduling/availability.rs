//! Normalization of stored day entries and the schedule fallback chain

use serde_json::Value;

use super::time_parser::TimeOfDayParser;
use crate::models::schedule::{
    weekday_from_name, DaySchedule, EffectiveSchedule, ResolvedSchedule, ScheduleTier,
};

/// Opening time assumed when an entry has none
pub const DEFAULT_START_TIME: &str = "09:00 AM";
/// Closing time assumed when an entry has none
pub const DEFAULT_END_TIME: &str = "06:00 PM";

/// Normalize raw `[{day, isOpen, startTime, endTime}]` entries.
///
/// Entries whose day is not one of the seven English day names are dropped.
/// Anything that is not an array yields an empty list.
pub fn normalize(raw: &Value, parser: &TimeOfDayParser) -> Vec<DaySchedule> {
    let Some(entries) = raw.as_array() else {
        return Vec::new();
    };

    entries
        .iter()
        .filter_map(|entry| {
            let day = entry.get("day").and_then(Value::as_str)?.trim();
            if day.is_empty() {
                return None;
            }
            let day = weekday_from_name(&title_case(day))?;

            let start_minute = time_field(entry, "startTime", DEFAULT_START_TIME, parser);
            let end_minute = time_field(entry, "endTime", DEFAULT_END_TIME, parser);

            Some(DaySchedule {
                day,
                is_open: truthy(entry.get("isOpen")),
                start_minute,
                end_minute: end_minute.max(start_minute),
            })
        })
        .collect()
}

/// Company master schedule, or the built-in default when nothing usable is stored
pub fn company_schedule(raw: Option<&Value>, parser: &TimeOfDayParser) -> ResolvedSchedule {
    let days = raw.map(|raw| normalize(raw, parser)).unwrap_or_default();
    if days.is_empty() {
        ResolvedSchedule {
            schedule: EffectiveSchedule::company_default(),
            tier: ScheduleTier::Default,
        }
    } else {
        ResolvedSchedule {
            schedule: EffectiveSchedule::from_days(days),
            tier: ScheduleTier::Company,
        }
    }
}

/// A technician's effective schedule: their own hours if any, else the master schedule
pub fn technician_schedule(
    raw: &Value,
    master: &ResolvedSchedule,
    parser: &TimeOfDayParser,
) -> ResolvedSchedule {
    let days = normalize(raw, parser);
    if days.is_empty() {
        master.clone()
    } else {
        ResolvedSchedule {
            schedule: EffectiveSchedule::from_days(days),
            tier: ScheduleTier::Technician,
        }
    }
}

fn title_case(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Loose truthiness: missing, null, false, 0 and "" are false
fn truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

fn time_field(entry: &Value, key: &str, default: &str, parser: &TimeOfDayParser) -> u32 {
    match entry.get(key) {
        Some(Value::String(s)) if !s.is_empty() => parser.parse(Some(s)),
        // present but not a string: unparseable
        Some(value) if truthy(Some(value)) => 0,
        _ => parser.parse(Some(default)),
    }
}
