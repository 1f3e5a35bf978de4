//! Appointment calendar endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::calendar::{ResourcesQuery, ResourcesResponse},
};

use super::AuthenticatedUser;

/// Technician lanes plus availability, booking and time-off events
#[utoipa::path(
    get,
    path = "/appointments/resources",
    tag = "appointments",
    security(("bearer_auth" = [])),
    params(ResourcesQuery),
    responses(
        (status = 200, description = "Calendar resources and events", body = ResourcesResponse),
        (status = 400, description = "Invalid date range", body = crate::error::ErrorResponse),
        (status = 401, description = "Not authenticated", body = crate::error::ErrorResponse),
        (status = 403, description = "No company on account", body = crate::error::ErrorResponse),
        (status = 500, description = "Calendar could not be built", body = crate::error::ErrorResponse)
    )
)]
pub async fn get_resources(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<ResourcesQuery>,
) -> AppResult<Json<ResourcesResponse>> {
    let company_id = claims.require_company()?;

    let range = state.services.appointments.resolve_range(&query)?;
    let response = state.services.appointments.resources(company_id, range).await?;
    Ok(Json(response))
}
