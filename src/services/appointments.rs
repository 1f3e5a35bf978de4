//! Appointment calendar service (resources, availability, events)

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use chrono_tz::Tz;
use uuid::Uuid;

use crate::{
    config::CalendarConfig,
    error::{AppError, AppResult},
    models::calendar::{ResourcesQuery, ResourcesResponse},
    repository::CalendarStore,
    scheduling::{referenced_service_ids, CalendarInputs, CalendarRange, ResourceAssembler, TimeOfDayParser},
};

#[derive(Clone)]
pub struct AppointmentsService {
    store: Arc<dyn CalendarStore>,
    parser: Arc<TimeOfDayParser>,
    calendar: CalendarConfig,
    tz: Tz,
}

impl AppointmentsService {
    pub fn new(store: Arc<dyn CalendarStore>, calendar: CalendarConfig) -> AppResult<Self> {
        let tz = calendar
            .tz()
            .map_err(|e| AppError::Internal(e.to_string()))?;
        Ok(Self {
            store,
            parser: Arc::new(TimeOfDayParser::new()),
            calendar,
            tz,
        })
    }

    /// Requested range, or the default window around today (local time)
    pub fn resolve_range(&self, query: &ResourcesQuery) -> AppResult<CalendarRange> {
        let today = Utc::now().with_timezone(&self.tz).date_naive();
        CalendarRange::resolve(
            query.start.as_deref(),
            query.end.as_deref(),
            today,
            self.calendar.lookback_days,
            self.calendar.lookahead_days,
        )
    }

    /// Resources and events for one company.
    ///
    /// Any store failure aborts the whole computation; callers get a single
    /// generic error and never a partial calendar.
    pub async fn resources(
        &self,
        company_id: Uuid,
        range: CalendarRange,
    ) -> AppResult<ResourcesResponse> {
        tracing::debug!(
            company = %company_id,
            start = %range.start,
            end = %range.end,
            "Building appointment resources"
        );

        match self.build(company_id, &range).await {
            Ok(response) => {
                tracing::debug!(
                    company = %company_id,
                    resources = response.resources.len(),
                    events = response.events.len(),
                    "Appointment resources built"
                );
                Ok(response)
            }
            Err(e) => {
                tracing::error!(company = %company_id, error = %e, "Failed to build appointment resources");
                Err(AppError::Internal("Failed to load appointment resources".to_string()))
            }
        }
    }

    async fn build(&self, company_id: Uuid, range: &CalendarRange) -> AppResult<ResourcesResponse> {
        let (from, to) = range.utc_bounds(self.tz);

        let (service_areas, technicians, company, bookings, time_offs) = tokio::try_join!(
            self.store.service_areas(company_id),
            self.store.technicians(company_id),
            self.store.company(company_id),
            self.store.bookings_between(company_id, from, to),
            self.store.approved_time_offs(company_id, range.start, range.end),
        )?;

        let service_ids = referenced_service_ids(&bookings);
        let service_names = if service_ids.is_empty() {
            HashMap::new()
        } else {
            self.store.service_names(company_id, service_ids).await?
        };

        let inputs = CalendarInputs {
            service_areas: &service_areas,
            technicians: &technicians,
            company: company.as_ref(),
            bookings: &bookings,
            time_offs: &time_offs,
            service_names: &service_names,
        };
        Ok(ResourceAssembler::new(&self.parser, self.tz).assemble(&inputs, range))
    }
}
