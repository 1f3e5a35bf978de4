//! Repository layer for database operations

pub mod bookings;
pub mod roster;
pub mod time_off;

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::{
    error::AppResult,
    models::{Booking, Company, ServiceArea, Technician, TimeOff},
};

/// Tenant-scoped reads needed to build the appointment calendar
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CalendarStore: Send + Sync {
    async fn service_areas(&self, company_id: Uuid) -> AppResult<Vec<ServiceArea>>;

    async fn technicians(&self, company_id: Uuid) -> AppResult<Vec<Technician>>;

    async fn company(&self, company_id: Uuid) -> AppResult<Option<Company>>;

    /// Bookings whose start falls within `[from, to]`
    async fn bookings_between(
        &self,
        company_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>>;

    /// Approved time off intersecting `[from, to]`
    async fn approved_time_offs(
        &self,
        company_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<TimeOff>>;

    async fn service_names(
        &self,
        company_id: Uuid,
        ids: Vec<Uuid>,
    ) -> AppResult<HashMap<Uuid, String>>;
}

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub roster: roster::RosterRepository,
    pub bookings: bookings::BookingsRepository,
    pub time_off: time_off::TimeOffRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            roster: roster::RosterRepository::new(pool.clone()),
            bookings: bookings::BookingsRepository::new(pool.clone()),
            time_off: time_off::TimeOffRepository::new(pool.clone()),
            pool,
        }
    }

    /// Round-trip to the database
    pub async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[async_trait]
impl CalendarStore for Repository {
    async fn service_areas(&self, company_id: Uuid) -> AppResult<Vec<ServiceArea>> {
        self.roster.service_areas(company_id).await
    }

    async fn technicians(&self, company_id: Uuid) -> AppResult<Vec<Technician>> {
        self.roster.technicians(company_id).await
    }

    async fn company(&self, company_id: Uuid) -> AppResult<Option<Company>> {
        self.roster.company(company_id).await
    }

    async fn bookings_between(
        &self,
        company_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> AppResult<Vec<Booking>> {
        self.bookings.between(company_id, from, to).await
    }

    async fn approved_time_offs(
        &self,
        company_id: Uuid,
        from: NaiveDate,
        to: NaiveDate,
    ) -> AppResult<Vec<TimeOff>> {
        self.time_off.approved_overlapping(company_id, from, to).await
    }

    async fn service_names(
        &self,
        company_id: Uuid,
        ids: Vec<Uuid>,
    ) -> AppResult<HashMap<Uuid, String>> {
        self.bookings.service_names(company_id, &ids).await
    }
}
