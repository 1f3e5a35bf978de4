//! Unavailability blocks from weekly opening hours

use chrono::{Datelike, NaiveDate};
use chrono_tz::Tz;
use uuid::Uuid;

use super::range::{days, end_of_day, local_instant};
use crate::models::calendar::{AvailabilityBlock, CalendarEvent, EventDisplay, EventKind};
use crate::models::schedule::{weekday_from_sunday_index, EffectiveSchedule, MINUTES_PER_DAY};

pub const UNAVAILABLE_COLOR: &str = "#ef4444";
pub const UNAVAILABLE_TITLE: &str = "Not Available";

/// Emit "not available" blocks for one technician, one date at a time.
///
/// A day closed in either schedule (or missing from either) gets one full-day
/// block. Otherwise the open window is the intersection of both schedules and
/// the time before and after it is blocked. Ids depend only on technician and
/// date.
pub fn generate(
    technician_id: Uuid,
    master: &EffectiveSchedule,
    technician: &EffectiveSchedule,
    from: NaiveDate,
    through: NaiveDate,
    tz: Tz,
) -> Vec<CalendarEvent> {
    let mut blocks = Vec::new();

    for date in days(from, through) {
        let weekday = weekday_from_sunday_index(date.weekday().num_days_from_sunday());
        let base_id = format!("unavail-{}-{}", technician_id, date.format("%Y-%m-%d"));

        let (master_day, technician_day) = match (master.get(weekday), technician.get(weekday)) {
            (Some(m), Some(t)) if m.is_open && t.is_open => (m, t),
            _ => {
                blocks.push(block(
                    base_id,
                    technician_id,
                    date,
                    0,
                    None,
                    tz,
                    EventKind::Unavailability,
                ));
                continue;
            }
        };

        let effective_start = master_day.start_minute.max(technician_day.start_minute);
        let effective_end = master_day.end_minute.min(technician_day.end_minute);

        if effective_start > 0 {
            blocks.push(block(
                format!("{}-before", base_id),
                technician_id,
                date,
                0,
                Some(effective_start),
                tz,
                EventKind::UnavailabilityTimed,
            ));
        }
        if effective_end < MINUTES_PER_DAY {
            blocks.push(block(
                format!("{}-after", base_id),
                technician_id,
                date,
                effective_end,
                Some(MINUTES_PER_DAY),
                tz,
                EventKind::UnavailabilityTimed,
            ));
        }
    }

    blocks
}

/// Block from `start_minute` until `end_minute` (1440 is the next midnight), or until 23:59:59.999
fn block(
    id: String,
    technician_id: Uuid,
    date: NaiveDate,
    start_minute: u32,
    end_minute: Option<u32>,
    tz: Tz,
    kind: EventKind,
) -> CalendarEvent {
    CalendarEvent::Availability(AvailabilityBlock {
        id,
        resource_id: technician_id,
        start: local_instant(tz, date, start_minute),
        end: match end_minute {
            Some(minute) => local_instant(tz, date, minute),
            None => end_of_day(tz, date),
        },
        title: UNAVAILABLE_TITLE.to_string(),
        background_color: UNAVAILABLE_COLOR.to_string(),
        display: EventDisplay::Background,
        kind,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schedule::DaySchedule;
    use chrono::Weekday;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn open(day: Weekday, start_minute: u32, end_minute: u32) -> DaySchedule {
        DaySchedule { day, is_open: true, start_minute, end_minute }
    }

    // 2024-03-11 is a Monday
    const MONDAY: (i32, u32, u32) = (2024, 3, 11);

    fn week() -> (NaiveDate, NaiveDate) {
        let monday = date(MONDAY.0, MONDAY.1, MONDAY.2);
        (monday, monday + chrono::Duration::days(6))
    }

    fn ids(events: &[CalendarEvent]) -> Vec<String> {
        events.iter().map(|e| e.id().to_string()).collect()
    }

    #[test]
    fn test_default_week_blocks_weekend_only() {
        let tech = Uuid::new_v4();
        let master = EffectiveSchedule::company_default();
        let (from, through) = week();

        let events = generate(tech, &master, &master, from, through, chrono_tz::UTC);

        // Monday-Friday 9-6 still produces before/after blocks
        let full_day: Vec<_> = events
            .iter()
            .filter(|e| e.kind() == EventKind::Unavailability)
            .collect();
        assert_eq!(full_day.len(), 2);
        assert_eq!(full_day[0].id(), format!("unavail-{}-2024-03-16", tech));
        assert_eq!(full_day[1].id(), format!("unavail-{}-2024-03-17", tech));
        assert_eq!(full_day[0].start().to_rfc3339(), "2024-03-16T00:00:00+00:00");
        assert_eq!(full_day[0].end().to_rfc3339(), "2024-03-16T23:59:59.999+00:00");
        assert!(full_day.iter().all(|e| e.is_background()));

        let timed = events
            .iter()
            .filter(|e| e.kind() == EventKind::UnavailabilityTimed)
            .count();
        assert_eq!(timed, 10);
    }

    #[test]
    fn test_round_the_clock_week_has_only_weekend_closures() {
        let tech = Uuid::new_v4();
        let master = EffectiveSchedule::from_days(
            [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Fri]
                .into_iter()
                .map(|day| open(day, 0, MINUTES_PER_DAY)),
        );
        let (from, through) = week();

        let events = generate(tech, &master, &master, from, through, chrono_tz::UTC);

        assert_eq!(events.len(), 2);
        assert!(events.iter().all(|e| e.kind() == EventKind::Unavailability));
        assert!(events.iter().all(|e| !e.id().ends_with("-before") && !e.id().ends_with("-after")));
    }

    #[test]
    fn test_technician_window_inside_master_window() {
        let tech = Uuid::new_v4();
        let master = EffectiveSchedule::company_default();
        let technician = EffectiveSchedule::from_days([open(Weekday::Tue, 600, 840)]);
        let tuesday = date(2024, 3, 12);

        let events = generate(tech, &master, &technician, tuesday, tuesday, chrono_tz::UTC);

        assert_eq!(
            ids(&events),
            vec![
                format!("unavail-{}-2024-03-12-before", tech),
                format!("unavail-{}-2024-03-12-after", tech),
            ]
        );
        assert_eq!(events[0].start().to_rfc3339(), "2024-03-12T00:00:00+00:00");
        assert_eq!(events[0].end().to_rfc3339(), "2024-03-12T10:00:00+00:00");
        assert_eq!(events[1].start().to_rfc3339(), "2024-03-12T14:00:00+00:00");
        assert_eq!(events[1].end().to_rfc3339(), "2024-03-13T00:00:00+00:00");
        assert!(events.iter().all(|e| e.kind() == EventKind::UnavailabilityTimed));
    }

    #[test]
    fn test_intersection_of_windows() {
        let tech = Uuid::new_v4();
        let master = EffectiveSchedule::from_days([open(Weekday::Wed, 480, 1020)]);
        let technician = EffectiveSchedule::from_days([open(Weekday::Wed, 540, 1200)]);
        let wednesday = date(2024, 3, 13);

        let events = generate(tech, &master, &technician, wednesday, wednesday, chrono_tz::UTC);

        assert_eq!(events[0].end().to_rfc3339(), "2024-03-13T09:00:00+00:00");
        assert_eq!(events[1].start().to_rfc3339(), "2024-03-13T17:00:00+00:00");
    }

    #[test]
    fn test_closure_in_either_schedule_wins() {
        let tech = Uuid::new_v4();
        let master = EffectiveSchedule::from_days([
            open(Weekday::Mon, 540, 1080),
            DaySchedule { day: Weekday::Tue, is_open: false, start_minute: 540, end_minute: 1080 },
        ]);
        let technician = EffectiveSchedule::from_days([
            DaySchedule { day: Weekday::Mon, is_open: false, start_minute: 0, end_minute: 1440 },
            open(Weekday::Tue, 0, 1440),
        ]);
        let (from, through) = week();

        let events = generate(tech, &master, &technician, from, through, chrono_tz::UTC);

        // every day is closed in at least one schedule or missing from both
        assert_eq!(events.len(), 7);
        assert!(events.iter().all(|e| e.kind() == EventKind::Unavailability));
    }

    #[test]
    fn test_fully_open_day_has_no_block() {
        let tech = Uuid::new_v4();
        let all_day = EffectiveSchedule::from_days([open(Weekday::Thu, 0, MINUTES_PER_DAY)]);
        let thursday = date(2024, 3, 14);

        assert!(generate(tech, &all_day, &all_day, thursday, thursday, chrono_tz::UTC).is_empty());
    }

    #[test]
    fn test_ids_are_stable() {
        let tech = Uuid::new_v4();
        let master = EffectiveSchedule::company_default();
        let technician = EffectiveSchedule::from_days([open(Weekday::Tue, 600, 840)]);
        let (from, through) = week();

        let first = generate(tech, &master, &technician, from, through, chrono_tz::UTC);
        let second = generate(tech, &master, &technician, from, through, chrono_tz::UTC);
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn test_one_day_per_date_across_dst() {
        let tech = Uuid::new_v4();
        let closed = EffectiveSchedule::default();
        // US spring-forward weekend
        let events = generate(
            tech,
            &closed,
            &closed,
            date(2024, 3, 9),
            date(2024, 3, 11),
            chrono_tz::America::New_York,
        );
        assert_eq!(events.len(), 3);
        assert_eq!(events[1].start().to_rfc3339(), "2024-03-10T00:00:00-05:00");
        assert_eq!(events[1].end().to_rfc3339(), "2024-03-10T23:59:59.999-04:00");
    }
}
