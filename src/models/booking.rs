//! Booking model and its nested customer/service/pricing parts

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

/// Booking status slug
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingStatus {
    Unconfirmed,
    Confirmed,
    Scheduled,
    InvoiceSent,
    Paid,
    Closed,
    Rejected,
    Cancelled,
    Completed,
    /// Any status without a dedicated color
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Unconfirmed => "unconfirmed",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Scheduled => "scheduled",
            BookingStatus::InvoiceSent => "invoice_sent",
            BookingStatus::Paid => "paid",
            BookingStatus::Closed => "closed",
            BookingStatus::Rejected => "rejected",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Completed => "completed",
            BookingStatus::Other(s) => s.as_str(),
        }
    }

    /// Calendar color for this status
    pub fn color(&self) -> &'static str {
        match self {
            BookingStatus::Unconfirmed => "#ea580c",
            BookingStatus::Confirmed | BookingStatus::Scheduled => "#eab308",
            BookingStatus::InvoiceSent => "#2563eb",
            BookingStatus::Paid => "#16a34a",
            BookingStatus::Closed => "#4b5563",
            BookingStatus::Rejected | BookingStatus::Cancelled => "#dc2626",
            BookingStatus::Completed => "#10b981",
            BookingStatus::Other(_) => "#eab308",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for BookingStatus {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim().to_lowercase().as_str() {
            "unconfirmed" => BookingStatus::Unconfirmed,
            "confirmed" => BookingStatus::Confirmed,
            "scheduled" => BookingStatus::Scheduled,
            "invoice_sent" => BookingStatus::InvoiceSent,
            "paid" => BookingStatus::Paid,
            "closed" => BookingStatus::Closed,
            "rejected" => BookingStatus::Rejected,
            "cancelled" => BookingStatus::Cancelled,
            "completed" => BookingStatus::Completed,
            _ => BookingStatus::Other(s.to_string()),
        })
    }
}

impl From<String> for BookingStatus {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(status) => status,
            Err(never) => match never {},
        }
    }
}

/// A sub-service or add-on line on a booking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineItem {
    /// `None` when the stored id is missing or not a UUID
    pub service_id: Option<Uuid>,
    pub quantity: u32,
}

impl LineItem {
    /// Read one stored `{serviceId, quantity}` entry; non-objects are skipped.
    ///
    /// A quantity that is missing, negative, fractional or too large counts as 1.
    pub fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let service_id = entry
            .get("serviceId")
            .and_then(Value::as_str)
            .and_then(|id| Uuid::parse_str(id.trim()).ok());
        let quantity = entry
            .get("quantity")
            .and_then(Value::as_u64)
            .and_then(|q| u32::try_from(q).ok())
            .unwrap_or(1);
        Some(Self { service_id, quantity })
    }
}

fn line_items(column: Option<Json<Value>>) -> Vec<LineItem> {
    match column {
        Some(Json(Value::Array(entries))) => {
            entries.iter().filter_map(LineItem::from_value).collect()
        }
        _ => Vec::new(),
    }
}

/// Customer contact attached to a booking
#[derive(Debug, Clone, Default)]
pub struct Contact {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl Contact {
    /// "First Last" with missing parts left out
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Shipping address as stored on the booking
#[derive(Debug, Clone, Default)]
pub struct Address {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
}

impl Address {
    /// Read a stored `{street, city, state, zipCode}` object.
    ///
    /// Numeric parts are kept as text; anything else that is not a string is ignored.
    pub fn from_value(value: &Value) -> Option<Self> {
        let entry = value.as_object()?;
        let part = |key: &str| match entry.get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            Some(Value::Number(n)) => Some(n.to_string()),
            _ => None,
        };
        Some(Self {
            street: part("street"),
            city: part("city"),
            state: part("state"),
            zip_code: part("zipCode"),
        })
    }

    /// Non-empty parts joined with ", "
    pub fn formatted(&self) -> String {
        [&self.street, &self.city, &self.state, &self.zip_code]
            .into_iter()
            .filter_map(|part| part.as_deref().map(str::trim))
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, Default)]
pub struct Pricing {
    pub final_amount: Option<Decimal>,
    pub discount: Option<Decimal>,
}

/// A booking with its contact and primary service resolved
#[derive(Debug, Clone)]
pub struct Booking {
    pub id: Uuid,
    pub technician_id: Uuid,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub status: BookingStatus,
    pub sub_services: Vec<LineItem>,
    pub addons: Vec<LineItem>,
    pub notes: Option<String>,
    pub pricing: Pricing,
    pub shipping_address: Option<Address>,
    /// Shared by bookings created together (linked or multi-technician)
    pub recurring_group_id: Option<Uuid>,
    pub contact: Option<Contact>,
    /// Primary service display name
    pub service_name: Option<String>,
}

impl Booking {
    /// Customer name, "Unknown Customer" when no contact is attached
    pub fn customer_name(&self) -> String {
        let name = self.contact.as_ref().map(Contact::full_name).unwrap_or_default();
        if name.is_empty() {
            "Unknown Customer".to_string()
        } else {
            name
        }
    }

    /// Primary service name, "Service" when unresolved
    pub fn service_name(&self) -> &str {
        match self.service_name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => "Service",
        }
    }

    pub fn customer_email(&self) -> Option<&str> {
        self.contact.as_ref().and_then(|c| c.email.as_deref())
    }

    pub fn customer_phone(&self) -> Option<&str> {
        self.contact.as_ref().and_then(|c| c.phone.as_deref())
    }

    /// Formatted shipping address, empty when absent
    pub fn address(&self) -> String {
        self.shipping_address
            .as_ref()
            .map(Address::formatted)
            .unwrap_or_default()
    }
}

/// Flat booking row as selected from the database
#[derive(Debug, FromRow)]
pub struct BookingRow {
    pub id: Uuid,
    pub technician_id: Uuid,
    pub start_date_time: DateTime<Utc>,
    pub end_date_time: DateTime<Utc>,
    pub status: String,
    pub sub_services: Option<Json<Value>>,
    pub addons: Option<Json<Value>>,
    pub notes: Option<String>,
    pub final_amount: Option<Decimal>,
    pub discount: Option<Decimal>,
    pub shipping_address: Option<Json<Value>>,
    pub recurring_group_id: Option<Uuid>,
    pub contact_id: Option<Uuid>,
    pub contact_first_name: Option<String>,
    pub contact_last_name: Option<String>,
    pub contact_email: Option<String>,
    pub contact_phone: Option<String>,
    pub service_name: Option<String>,
}

impl From<BookingRow> for Booking {
    fn from(row: BookingRow) -> Self {
        let contact = row.contact_id.map(|_| Contact {
            first_name: row.contact_first_name,
            last_name: row.contact_last_name,
            email: row.contact_email,
            phone: row.contact_phone,
        });

        Booking {
            id: row.id,
            technician_id: row.technician_id,
            start_date_time: row.start_date_time,
            end_date_time: row.end_date_time,
            status: BookingStatus::from(row.status),
            sub_services: line_items(row.sub_services),
            addons: line_items(row.addons),
            notes: row.notes,
            pricing: Pricing {
                final_amount: row.final_amount,
                discount: row.discount,
            },
            shipping_address: row
                .shipping_address
                .and_then(|Json(value)| Address::from_value(&value)),
            recurring_group_id: row.recurring_group_id,
            contact,
            service_name: row.service_name,
        }
    }
}
