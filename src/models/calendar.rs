//! Calendar response models (resources and events)

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// Query parameters for the resources endpoint
#[derive(Debug, Default, Deserialize, IntoParams, ToSchema)]
pub struct ResourcesQuery {
    /// First day (YYYY-MM-DD or RFC 3339), defaults to 28 days ago
    pub start: Option<String>,
    /// Last day (YYYY-MM-DD or RFC 3339), defaults to 56 days ahead
    pub end: Option<String>,
}

/// A technician lane on the calendar
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: Uuid,
    /// Technician full name
    pub title: String,
    /// Service area name
    pub group: String,
    pub services: Vec<String>,
}

/// Event discriminator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Whole-day closure or time off
    Unavailability,
    /// Before-opening or after-closing window
    UnavailabilityTimed,
    Booking,
}

/// Rendering mode for non-interactive events
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventDisplay {
    Background,
}

/// Unavailability block derived from opening hours
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityBlock {
    pub id: String,
    pub resource_id: Uuid,
    #[schema(value_type = String, format = DateTime)]
    pub start: DateTime<FixedOffset>,
    #[schema(value_type = String, format = DateTime)]
    pub end: DateTime<FixedOffset>,
    pub title: String,
    pub background_color: String,
    pub display: EventDisplay,
    #[serde(rename = "type")]
    pub kind: EventKind,
}

/// Customer, service and staff details attached to a booking event
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    pub booking_id: Uuid,
    pub status: String,
    pub customer_name: String,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub service_name: String,
    /// "Name (xN), ..." for sub-services
    pub units: String,
    /// "Name (xN), ..." for add-ons
    pub addons: String,
    /// Primary technician then co-technicians, comma separated
    pub assigned_staff: String,
    pub co_technicians: Vec<String>,
    pub notes: String,
    pub address: String,
    /// "$X.XX" or "-"
    pub final_amount: String,
    /// "$X.XX" or "-"
    pub discount: String,
    pub recurring_group_id: Option<Uuid>,
}

/// Booking shown in a technician lane
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BookingEvent {
    pub id: String,
    pub resource_id: Uuid,
    #[schema(value_type = String, format = DateTime)]
    pub start: DateTime<FixedOffset>,
    #[schema(value_type = String, format = DateTime)]
    pub end: DateTime<FixedOffset>,
    pub title: String,
    pub background_color: String,
    pub border_color: String,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub extended_props: BookingDetails,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffDetails {
    pub time_off_id: Uuid,
    pub reason: String,
    pub notes: String,
}

/// Approved time off shown as a background block
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeOffEvent {
    pub id: String,
    pub resource_id: Uuid,
    #[schema(value_type = String, format = DateTime)]
    pub start: DateTime<FixedOffset>,
    #[schema(value_type = String, format = DateTime)]
    pub end: DateTime<FixedOffset>,
    pub title: String,
    pub background_color: String,
    pub border_color: String,
    pub display: EventDisplay,
    #[serde(rename = "type")]
    pub kind: EventKind,
    pub extended_props: TimeOffDetails,
}

/// Any event returned to the calendar
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(untagged)]
pub enum CalendarEvent {
    Availability(AvailabilityBlock),
    Booking(BookingEvent),
    TimeOff(TimeOffEvent),
}

impl CalendarEvent {
    pub fn id(&self) -> &str {
        match self {
            CalendarEvent::Availability(e) => &e.id,
            CalendarEvent::Booking(e) => &e.id,
            CalendarEvent::TimeOff(e) => &e.id,
        }
    }

    pub fn kind(&self) -> EventKind {
        match self {
            CalendarEvent::Availability(e) => e.kind,
            CalendarEvent::Booking(e) => e.kind,
            CalendarEvent::TimeOff(e) => e.kind,
        }
    }

    pub fn resource_id(&self) -> Uuid {
        match self {
            CalendarEvent::Availability(e) => e.resource_id,
            CalendarEvent::Booking(e) => e.resource_id,
            CalendarEvent::TimeOff(e) => e.resource_id,
        }
    }

    pub fn start(&self) -> DateTime<FixedOffset> {
        match self {
            CalendarEvent::Availability(e) => e.start,
            CalendarEvent::Booking(e) => e.start,
            CalendarEvent::TimeOff(e) => e.start,
        }
    }

    pub fn end(&self) -> DateTime<FixedOffset> {
        match self {
            CalendarEvent::Availability(e) => e.end,
            CalendarEvent::Booking(e) => e.end,
            CalendarEvent::TimeOff(e) => e.end,
        }
    }

    pub fn is_background(&self) -> bool {
        !matches!(self, CalendarEvent::Booking(_))
    }
}

/// Resources endpoint response
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ResourcesResponse {
    pub resources: Vec<Resource>,
    /// Availability blocks, then bookings, then time off
    pub events: Vec<CalendarEvent>,
}
