//! Bookings and service catalog lookups

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::booking::{Booking, BookingRow},
};

#[derive(Clone)]
pub struct BookingsRepository {
    pool: Pool<Postgres>,
}

impl BookingsRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Assigned bookings starting within `[from, to]`, with contact and primary service joined
    pub async fn between(
        &self,
        company_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>> {
        let rows = sqlx::query_as::<_, BookingRow>(
            r#"
            SELECT b.id, b.technician_id, b.start_date_time, b.end_date_time, b.status,
                   b.sub_services, b.addons, b.notes, b.final_amount, b.discount,
                   b.shipping_address, b.recurring_group_id,
                   c.id AS contact_id,
                   c.first_name AS contact_first_name,
                   c.last_name AS contact_last_name,
                   c.email AS contact_email,
                   c.phone AS contact_phone,
                   s.name AS service_name
            FROM bookings b
            LEFT JOIN contacts c ON c.id = b.contact_id AND c.company_id = b.company_id
            LEFT JOIN services s ON s.id = b.service_id AND s.company_id = b.company_id
            WHERE b.company_id = $1
              AND b.technician_id IS NOT NULL
              AND b.start_date_time >= $2
              AND b.start_date_time <= $3
            ORDER BY b.start_date_time, b.id
            "#,
        )
        .bind(company_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Booking::from).collect())
    }

    /// Display names for catalog services
    pub async fn service_names(
        &self,
        company_id: Uuid,
        ids: &[Uuid],
    ) -> AppResult<HashMap<Uuid, String>> {
        let rows = sqlx::query_as::<_, (Uuid, String)>(
            "SELECT id, name FROM services WHERE company_id = $1 AND id = ANY($2)",
        )
        .bind(company_id)
        .bind(ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().collect())
    }
}
