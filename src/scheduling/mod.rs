//! Calendar resource and availability computation
//!
//! Pure, synchronous transforms from already-fetched records into calendar
//! resources and events. Nothing here touches the database.

pub mod assembler;
pub mod availability;
pub mod blocks;
pub mod booking_events;
pub mod co_technicians;
pub mod range;
pub mod time_off_events;
pub mod time_parser;

pub use assembler::{referenced_service_ids, CalendarInputs, ResourceAssembler};
pub use range::CalendarRange;
pub use time_parser::TimeOfDayParser;
