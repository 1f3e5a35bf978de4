//! Co-technician lookup for multi-technician appointments

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use uuid::Uuid;

use crate::models::booking::Booking;

pub const UNKNOWN_TECHNICIAN: &str = "Unknown";

/// Names of the other technicians booked into the same slot, per booking id.
///
/// A slot is a recurring group plus an exact start instant; bookings whose
/// start differs by any amount are different slots. Solo bookings get no entry.
pub fn resolve(
    bookings: &[Booking],
    technician_names: &HashMap<Uuid, String>,
) -> HashMap<Uuid, Vec<String>> {
    let mut co_technicians = HashMap::new();
    if bookings.iter().all(|b| b.recurring_group_id.is_none()) {
        return co_technicians;
    }

    let mut slots: IndexMap<(Uuid, DateTime<Utc>), Vec<&Booking>> = IndexMap::new();
    for booking in bookings {
        if let Some(group) = booking.recurring_group_id {
            slots
                .entry((group, booking.start_date_time))
                .or_default()
                .push(booking);
        }
    }

    for slot in slots.values().filter(|slot| slot.len() > 1) {
        for booking in slot {
            let others = slot
                .iter()
                .filter(|other| other.id != booking.id)
                .map(|other| {
                    technician_names
                        .get(&other.technician_id)
                        .cloned()
                        .unwrap_or_else(|| UNKNOWN_TECHNICIAN.to_string())
                })
                .collect();
            co_technicians.insert(booking.id, others);
        }
    }

    co_technicians
}
