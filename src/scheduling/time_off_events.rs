//! Approved time off -> background calendar event

use chrono_tz::Tz;

use super::range::{local_instant, CalendarRange};
use super::time_parser::TimeOfDayParser;
use crate::models::calendar::{CalendarEvent, EventDisplay, EventKind, TimeOffDetails, TimeOffEvent};
use crate::models::time_off::TimeOff;

pub const TIME_OFF_BACKGROUND: &str = "#71717a";
pub const TIME_OFF_BORDER: &str = "#52525b";

/// Approved and touching the requested days
pub fn is_visible(time_off: &TimeOff, range: &CalendarRange) -> bool {
    time_off.is_approved() && time_off.overlaps(range.start, range.end)
}

pub fn to_event(time_off: &TimeOff, parser: &TimeOfDayParser, tz: Tz) -> CalendarEvent {
    let start_minute = parser.parse(time_off.start_time.as_deref());
    let end_minute = parser.parse(time_off.end_time.as_deref());

    CalendarEvent::TimeOff(TimeOffEvent {
        id: format!("timeoff-{}", time_off.id),
        resource_id: time_off.technician_id,
        start: local_instant(tz, time_off.start_date, start_minute),
        end: local_instant(tz, time_off.end_date, end_minute),
        title: format!("Off: {}", time_off.reason()),
        background_color: TIME_OFF_BACKGROUND.to_string(),
        border_color: TIME_OFF_BORDER.to_string(),
        display: EventDisplay::Background,
        kind: EventKind::Unavailability,
        extended_props: TimeOffDetails {
            time_off_id: time_off.id,
            reason: time_off.reason().to_string(),
            notes: time_off.notes.clone().unwrap_or_default(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uuid::Uuid;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn time_off(start: NaiveDate, end: NaiveDate, status: &str) -> TimeOff {
        TimeOff {
            id: Uuid::new_v4(),
            technician_id: Uuid::new_v4(),
            start_date: start,
            start_time: Some("08:30 AM".to_string()),
            end_date: end,
            end_time: Some("05:00 PM".to_string()),
            reason: Some("Dentist".to_string()),
            notes: None,
            status: status.to_string(),
        }
    }

    #[test]
    fn test_overlap_rules() {
        let range = CalendarRange::new(date(2024, 3, 11), date(2024, 3, 17)).unwrap();

        let straddles_start = time_off(date(2024, 3, 4), date(2024, 3, 11), "APPROVED");
        let straddles_end = time_off(date(2024, 3, 17), date(2024, 3, 25), "APPROVED");
        let covers = time_off(date(2024, 3, 1), date(2024, 3, 31), "APPROVED");
        let before = time_off(date(2024, 3, 1), date(2024, 3, 10), "APPROVED");
        let after = time_off(date(2024, 3, 18), date(2024, 3, 19), "APPROVED");
        let pending = time_off(date(2024, 3, 12), date(2024, 3, 12), "PENDING");

        assert!(is_visible(&straddles_start, &range));
        assert!(is_visible(&straddles_end, &range));
        assert!(is_visible(&covers, &range));
        assert!(!is_visible(&before, &range));
        assert!(!is_visible(&after, &range));
        assert!(!is_visible(&pending, &range));
    }

    #[test]
    fn test_event_shape() {
        let parser = TimeOfDayParser::new();
        let record = time_off(date(2024, 3, 12), date(2024, 3, 13), "APPROVED");

        let CalendarEvent::TimeOff(event) = to_event(&record, &parser, chrono_tz::UTC) else {
            panic!("expected a time-off event");
        };
        assert_eq!(event.title, "Off: Dentist");
        assert_eq!(event.resource_id, record.technician_id);
        assert_eq!(event.start.to_rfc3339(), "2024-03-12T08:30:00+00:00");
        assert_eq!(event.end.to_rfc3339(), "2024-03-13T17:00:00+00:00");
        assert_eq!(event.background_color, "#71717a");
        assert_eq!(event.border_color, "#52525b");
        assert_eq!(event.kind, EventKind::Unavailability);
        assert_eq!(event.display, EventDisplay::Background);
    }

    #[test]
    fn test_missing_times_start_at_midnight() {
        let parser = TimeOfDayParser::new();
        let mut record = time_off(date(2024, 3, 12), date(2024, 3, 12), "APPROVED");
        record.start_time = None;
        record.end_time = Some("whenever".to_string());
        record.reason = None;

        let event = to_event(&record, &parser, chrono_tz::UTC);
        assert_eq!(event.start().to_rfc3339(), "2024-03-12T00:00:00+00:00");
        assert_eq!(event.end().to_rfc3339(), "2024-03-12T00:00:00+00:00");
        let CalendarEvent::TimeOff(event) = event else {
            panic!("expected a time-off event");
        };
        assert_eq!(event.title, "Off: Time off");
    }
}
