//! Technician time-off model

use chrono::NaiveDate;
use sqlx::FromRow;
use uuid::Uuid;

/// Status value of time-off requests shown on the calendar
pub const APPROVED: &str = "APPROVED";

/// Time-off request record
#[derive(Debug, Clone, FromRow)]
pub struct TimeOff {
    pub id: Uuid,
    pub technician_id: Uuid,
    pub start_date: NaiveDate,
    /// "HH:MM AM/PM"
    pub start_time: Option<String>,
    pub end_date: NaiveDate,
    /// "HH:MM AM/PM"
    pub end_time: Option<String>,
    pub reason: Option<String>,
    pub notes: Option<String>,
    pub status: String,
}

impl TimeOff {
    pub fn is_approved(&self) -> bool {
        self.status == APPROVED
    }

    /// True when `[start_date, end_date]` intersects `[from, through]`
    pub fn overlaps(&self, from: NaiveDate, through: NaiveDate) -> bool {
        self.start_date <= through && self.end_date >= from
    }

    /// Reason text, "Time off" when missing
    pub fn reason(&self) -> &str {
        match self.reason.as_deref().map(str::trim) {
            Some(reason) if !reason.is_empty() => reason,
            _ => "Time off",
        }
    }
}
