//! Data models for Fieldbook

pub mod booking;
pub mod calendar;
pub mod schedule;
pub mod technician;
pub mod time_off;
pub mod user;

// Re-export commonly used types
pub use booking::{Booking, BookingStatus, LineItem};
pub use calendar::{CalendarEvent, EventKind, Resource, ResourcesQuery, ResourcesResponse};
pub use schedule::{DaySchedule, EffectiveSchedule, ResolvedSchedule, ScheduleTier};
pub use technician::{Company, ServiceArea, Technician};
pub use time_off::TimeOff;
pub use user::UserClaims;
