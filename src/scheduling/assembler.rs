//! Resources + events for one tenant and one date range

use std::collections::HashMap;

use chrono_tz::Tz;
use indexmap::{IndexMap, IndexSet};
use uuid::Uuid;

use super::availability::{company_schedule, technician_schedule};
use super::booking_events::{self, BookingLookups};
use super::range::CalendarRange;
use super::time_parser::TimeOfDayParser;
use super::{blocks, co_technicians, time_off_events};
use crate::models::booking::Booking;
use crate::models::calendar::{Resource, ResourcesResponse};
use crate::models::technician::{Company, ServiceArea, Technician};
use crate::models::time_off::TimeOff;

/// Everything fetched from the store for one request
pub struct CalendarInputs<'a> {
    pub service_areas: &'a [ServiceArea],
    pub technicians: &'a [Technician],
    pub company: Option<&'a Company>,
    pub bookings: &'a [Booking],
    pub time_offs: &'a [TimeOff],
    /// Sub-service and add-on names by id
    pub service_names: &'a HashMap<Uuid, String>,
}

/// Distinct sub-service and add-on ids referenced by any booking, in first-seen order
pub fn referenced_service_ids(bookings: &[Booking]) -> Vec<Uuid> {
    bookings
        .iter()
        .flat_map(|b| b.sub_services.iter().chain(b.addons.iter()))
        .filter_map(|item| item.service_id)
        .collect::<IndexSet<_>>()
        .into_iter()
        .collect()
}

pub struct ResourceAssembler<'p> {
    parser: &'p TimeOfDayParser,
    tz: Tz,
}

impl<'p> ResourceAssembler<'p> {
    pub fn new(parser: &'p TimeOfDayParser, tz: Tz) -> Self {
        Self { parser, tz }
    }

    pub fn assemble(&self, inputs: &CalendarInputs<'_>, range: &CalendarRange) -> ResourcesResponse {
        let master = company_schedule(
            inputs.company.and_then(|c| c.availability.as_ref()).map(|j| &j.0),
            self.parser,
        );

        let mut by_zone: IndexMap<&str, Vec<&Technician>> = IndexMap::new();
        for technician in inputs.technicians {
            by_zone.entry(technician.zone()).or_default().push(technician);
        }

        let mut resources = Vec::new();
        let mut availability_events = Vec::new();
        let week_start = range.week_start();

        for area in inputs.service_areas {
            let group = area.name.trim();
            let Some(members) = by_zone.get(group) else {
                continue;
            };
            for technician in members {
                resources.push(Resource {
                    id: technician.id,
                    title: technician.full_name(),
                    group: group.to_string(),
                    services: technician.services.clone(),
                });

                let resolved = technician_schedule(&technician.availability.0, &master, self.parser);
                tracing::trace!(
                    technician = %technician.id,
                    tier = ?resolved.tier,
                    days = resolved.schedule.day_count(),
                    "resolved weekly schedule"
                );
                availability_events.extend(blocks::generate(
                    technician.id,
                    &master.schedule,
                    &resolved.schedule,
                    week_start,
                    range.end,
                    self.tz,
                ));
            }
        }

        let technician_names: HashMap<Uuid, String> = inputs
            .technicians
            .iter()
            .map(|t| (t.id, t.full_name()))
            .collect();
        let co_technicians = co_technicians::resolve(inputs.bookings, &technician_names);
        let lookups = BookingLookups {
            service_names: inputs.service_names,
            technician_names: &technician_names,
            co_technicians: &co_technicians,
        };

        let booking_events = inputs
            .bookings
            .iter()
            .map(|booking| booking_events::to_event(booking, &lookups, self.tz));

        let time_off_events = inputs
            .time_offs
            .iter()
            .filter(|t| time_off_events::is_visible(t, range))
            .map(|t| time_off_events::to_event(t, self.parser, self.tz));

        let mut events = availability_events;
        events.extend(booking_events);
        events.extend(time_off_events);

        ResourcesResponse { resources, events }
    }
}
