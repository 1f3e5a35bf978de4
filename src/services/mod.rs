//! Business logic services

pub mod appointments;

use std::sync::Arc;

use crate::{config::CalendarConfig, error::AppResult, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub appointments: appointments::AppointmentsService,
    pub repository: Repository,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, calendar: CalendarConfig) -> AppResult<Self> {
        Ok(Self {
            appointments: appointments::AppointmentsService::new(
                Arc::new(repository.clone()),
                calendar,
            )?,
            repository,
        })
    }
}
