//! Time-off repository

use chrono::NaiveDate;
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::time_off::{TimeOff, APPROVED},
};

#[derive(Clone)]
pub struct TimeOffRepository {
    pool: Pool<Postgres>,
}

impl TimeOffRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Approved time off whose dates intersect `[from, to]`
    pub async fn approved_overlapping(
        &self,
        company_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<TimeOff>> {
        let rows = sqlx::query_as::<_, TimeOff>(
            r#"
            SELECT id, technician_id, start_date, start_time, end_date, end_time,
                   reason, notes, status
            FROM time_offs
            WHERE company_id = $1
              AND status = $2
              AND start_date <= $4
              AND end_date >= $3
            ORDER BY start_date
            "#,
        )
        .bind(company_id)
        .bind(APPROVED)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
