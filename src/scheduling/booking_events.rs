//! Booking -> calendar event mapping

use std::collections::HashMap;

use chrono_tz::Tz;
use rust_decimal::Decimal;
use uuid::Uuid;

use super::range::to_local;
use crate::models::booking::{Booking, LineItem};
use crate::models::calendar::{BookingDetails, BookingEvent, CalendarEvent, EventKind};

/// Name lookups shared by every booking of a request
pub struct BookingLookups<'a> {
    /// Sub-service and add-on names by service id
    pub service_names: &'a HashMap<Uuid, String>,
    pub technician_names: &'a HashMap<Uuid, String>,
    pub co_technicians: &'a HashMap<Uuid, Vec<String>>,
}

pub fn to_event(booking: &Booking, lookups: &BookingLookups<'_>, tz: Tz) -> CalendarEvent {
    let color = booking.status.color().to_string();
    let co_technicians = lookups
        .co_technicians
        .get(&booking.id)
        .cloned()
        .unwrap_or_default();

    let primary = lookups
        .technician_names
        .get(&booking.technician_id)
        .map(String::as_str)
        .unwrap_or_default();
    let assigned_staff = std::iter::once(primary)
        .chain(co_technicians.iter().map(String::as_str))
        .filter(|name| !name.is_empty())
        .collect::<Vec<_>>()
        .join(", ");

    CalendarEvent::Booking(BookingEvent {
        id: booking.id.to_string(),
        resource_id: booking.technician_id,
        start: to_local(tz, booking.start_date_time),
        end: to_local(tz, booking.end_date_time),
        title: format!("{} - {}", booking.customer_name(), booking.service_name()),
        background_color: color.clone(),
        border_color: color,
        kind: EventKind::Booking,
        extended_props: BookingDetails {
            booking_id: booking.id,
            status: booking.status.to_string(),
            customer_name: booking.customer_name(),
            customer_email: booking.customer_email().map(str::to_string),
            customer_phone: booking.customer_phone().map(str::to_string),
            service_name: booking.service_name().to_string(),
            units: describe_items(&booking.sub_services, lookups.service_names),
            addons: describe_items(&booking.addons, lookups.service_names),
            assigned_staff,
            co_technicians,
            notes: booking.notes.clone().unwrap_or_default(),
            address: booking.address(),
            final_amount: format_money(booking.pricing.final_amount),
            discount: format_money(booking.pricing.discount),
            recurring_group_id: booking.recurring_group_id,
        },
    })
}

/// "Name (xN), Name (xN)", or "-" when there are no items
fn describe_items(items: &[LineItem], names: &HashMap<Uuid, String>) -> String {
    if items.is_empty() {
        return "-".to_string();
    }
    items
        .iter()
        .map(|item| {
            let name = item
                .service_id
                .and_then(|id| names.get(&id))
                .map(String::as_str)
                .unwrap_or("Unknown");
            format!("{} (x{})", name, item.quantity)
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_money(amount: Option<Decimal>) -> String {
    match amount {
        Some(amount) => format!("${:.2}", amount.round_dp(2)),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::{BookingStatus, Contact, Pricing};
    use chrono::{Duration, TimeZone, Utc};
    use std::str::FromStr;

    fn booking(status: &str) -> Booking {
        let start = Utc.with_ymd_and_hms(2024, 3, 12, 15, 0, 0).unwrap();
        Booking {
            id: Uuid::new_v4(),
            technician_id: Uuid::new_v4(),
            start_date_time: start,
            end_date_time: start + Duration::minutes(90),
            status: BookingStatus::from(status.to_string()),
            sub_services: vec![],
            addons: vec![],
            notes: None,
            pricing: Pricing::default(),
            shipping_address: None,
            recurring_group_id: None,
            contact: Some(Contact {
                first_name: Some("Maya".to_string()),
                last_name: Some("Ortiz".to_string()),
                email: Some("maya@example.com".to_string()),
                phone: None,
            }),
            service_name: Some("Window Cleaning".to_string()),
        }
    }

    fn map(booking: &Booking, technician_names: &HashMap<Uuid, String>, co: &HashMap<Uuid, Vec<String>>) -> BookingEvent {
        let service_names = HashMap::new();
        let lookups = BookingLookups {
            service_names: &service_names,
            technician_names,
            co_technicians: co,
        };
        match to_event(booking, &lookups, chrono_tz::UTC) {
            CalendarEvent::Booking(event) => event,
            other => panic!("unexpected event {:?}", other),
        }
    }

    #[test]
    fn test_status_colors() {
        let none = HashMap::new();
        let paid = map(&booking("paid"), &none, &HashMap::new());
        assert_eq!(paid.background_color, "#16a34a");
        assert_eq!(paid.border_color, "#16a34a");

        let unknown = map(&booking("weird_unknown_status"), &none, &HashMap::new());
        assert_eq!(unknown.background_color, "#eab308");
        assert_eq!(unknown.extended_props.status, "weird_unknown_status");
    }

    #[test]
    fn test_title_and_times() {
        let b = booking("confirmed");
        let event = map(&b, &HashMap::new(), &HashMap::new());
        assert_eq!(event.title, "Maya Ortiz - Window Cleaning");
        assert_eq!(event.id, b.id.to_string());
        assert_eq!(event.resource_id, b.technician_id);
        assert_eq!(event.start.to_rfc3339(), "2024-03-12T15:00:00+00:00");
        assert_eq!(event.end.to_rfc3339(), "2024-03-12T16:30:00+00:00");

        let mut bare = booking("confirmed");
        bare.contact = None;
        bare.service_name = None;
        assert_eq!(map(&bare, &HashMap::new(), &HashMap::new()).title, "Unknown Customer - Service");
    }

    #[test]
    fn test_assigned_staff() {
        let b = booking("scheduled");
        let technicians = HashMap::from([(b.technician_id, "Ann Lee".to_string())]);
        let co = HashMap::from([(b.id, vec!["Bo Park".to_string(), "Unknown".to_string()])]);

        let event = map(&b, &technicians, &co);
        assert_eq!(event.extended_props.assigned_staff, "Ann Lee, Bo Park, Unknown");
        assert_eq!(event.extended_props.co_technicians.len(), 2);

        let unnamed = map(&b, &HashMap::new(), &co);
        assert_eq!(unnamed.extended_props.assigned_staff, "Bo Park, Unknown");
    }

    #[test]
    fn test_line_items() {
        let known = Uuid::new_v4();
        let names = HashMap::from([(known, "Screens".to_string())]);
        let items = vec![
            LineItem { service_id: Some(known), quantity: 3 },
            LineItem { service_id: Some(Uuid::new_v4()), quantity: 1 },
            LineItem { service_id: None, quantity: 2 },
        ];
        assert_eq!(describe_items(&items, &names), "Screens (x3), Unknown (x1), Unknown (x2)");
        assert_eq!(describe_items(&[], &names), "-");
    }

    #[test]
    fn test_money() {
        assert_eq!(format_money(Some(Decimal::from_str("120.5").unwrap())), "$120.50");
        assert_eq!(format_money(Some(Decimal::from_str("9.999").unwrap())), "$10.00");
        assert_eq!(format_money(Some(Decimal::ZERO)), "$0.00");
        assert_eq!(format_money(None), "-");
    }
}
