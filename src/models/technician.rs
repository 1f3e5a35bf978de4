//! Roster models: service areas, technicians, company

use serde::{Deserialize, Serialize};
use sqlx::{types::Json, FromRow};
use uuid::Uuid;

/// Zone name used when a technician has none
pub const UNASSIGNED_ZONE: &str = "Unassigned";

/// A named service area (zone) grouping technicians
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ServiceArea {
    pub id: Uuid,
    pub name: String,
}

/// Technician record with raw weekly availability
#[derive(Debug, Clone, FromRow)]
pub struct Technician {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    /// Service area name
    pub zone: Option<String>,
    /// Service identifiers this technician can perform
    pub services: Vec<String>,
    /// Raw day entries as stored (`[{day, isOpen, startTime, endTime}]`)
    pub availability: Json<serde_json::Value>,
}

impl Technician {
    /// Zone name, falling back to "Unassigned"
    pub fn zone(&self) -> &str {
        match self.zone.as_deref().map(str::trim) {
            Some(zone) if !zone.is_empty() => zone,
            _ => UNASSIGNED_ZONE,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name.trim(), self.last_name.trim())
            .trim()
            .to_string()
    }
}

/// Company (tenant) record carrying the master schedule
#[derive(Debug, Clone, FromRow)]
pub struct Company {
    pub id: Uuid,
    pub name: String,
    /// Raw day entries, same shape as technician availability
    pub availability: Option<Json<serde_json::Value>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn technician(zone: Option<&str>) -> Technician {
        Technician {
            id: Uuid::new_v4(),
            first_name: " Ada ".to_string(),
            last_name: "Lovelace".to_string(),
            zone: zone.map(str::to_string),
            services: vec![],
            availability: Json(serde_json::Value::Null),
        }
    }

    #[test]
    fn test_zone_fallback() {
        assert_eq!(technician(None).zone(), "Unassigned");
        assert_eq!(technician(Some("  ")).zone(), "Unassigned");
        assert_eq!(technician(Some("North")).zone(), "North");
    }

    #[test]
    fn test_full_name() {
        assert_eq!(technician(None).full_name(), "Ada Lovelace");
    }
}
