//! OpenAPI documentation

use axum::Router;
use utoipa::{
    openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    Modify, OpenApi,
};
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{appointments, health};
use crate::models::calendar;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Fieldbook API",
        version = "1.0.0",
        description = "Technician scheduling calendar REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        health::health_check,
        health::readiness_check,
        appointments::get_resources,
    ),
    components(
        schemas(
            calendar::ResourcesQuery,
            calendar::ResourcesResponse,
            calendar::Resource,
            calendar::CalendarEvent,
            calendar::AvailabilityBlock,
            calendar::BookingEvent,
            calendar::BookingDetails,
            calendar::TimeOffEvent,
            calendar::TimeOffDetails,
            calendar::EventKind,
            calendar::EventDisplay,
            health::HealthResponse,
            crate::error::ErrorResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "appointments", description = "Appointment calendar")
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
