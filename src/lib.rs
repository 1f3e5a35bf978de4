//! Fieldbook technician scheduling server
//!
//! Serves the appointment calendar for a field-service company: technician
//! lanes grouped by service area, their unavailability derived from company
//! and personal working hours, bookings and approved time off.

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod scheduling;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
