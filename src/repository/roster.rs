//! Service areas, technicians and company records

use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::technician::{Company, ServiceArea, Technician},
};

#[derive(Clone)]
pub struct RosterRepository {
    pool: Pool<Postgres>,
}

impl RosterRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Service areas of a company, by name
    pub async fn service_areas(&self, company_id: Uuid) -> AppResult<Vec<ServiceArea>> {
        let rows = sqlx::query_as::<_, ServiceArea>(
            "SELECT id, name FROM service_areas WHERE company_id = $1 ORDER BY name",
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Active technicians of a company
    pub async fn technicians(&self, company_id: Uuid) -> AppResult<Vec<Technician>> {
        let rows = sqlx::query_as::<_, Technician>(
            r#"
            SELECT id,
                   COALESCE(first_name, '') AS first_name,
                   COALESCE(last_name, '') AS last_name,
                   zone,
                   COALESCE(services, '{}') AS services,
                   COALESCE(availability, '[]'::jsonb) AS availability
            FROM technicians
            WHERE company_id = $1 AND is_active
            ORDER BY first_name, last_name
            "#,
        )
        .bind(company_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// Company record, if it exists
    pub async fn company(&self, company_id: Uuid) -> AppResult<Option<Company>> {
        let row = sqlx::query_as::<_, Company>(
            "SELECT id, name, availability FROM companies WHERE id = $1",
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }
}
