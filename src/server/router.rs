//! HTTP routing and OpenAPI documentation configuration.
//!
//! All API endpoints are registered here with their utoipa annotations,
//! collected into one OpenAPI document, and Swagger UI is served at
//! `/api/docs` for interactive exploration.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger
/// UI documentation.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(
        info(
            title = "Larus",
            description = "Case-management API for wildlife-control licensing"
        ),
        tags(
            (name = controller::application::APPLICATION_TAG, description = "Application routes"),
            (name = controller::assessment::ASSESSMENT_TAG, description = "Assessment routes"),
            (name = controller::licence::LICENCE_TAG, description = "Licence routes"),
            (name = controller::amendment::AMENDMENT_TAG, description = "Amendment routes"),
            (name = controller::returns::RETURNS_TAG, description = "Returns routes"),
            (name = controller::case::CASE_TAG, description = "Withdrawal and revocation routes"),
            (name = controller::reference::REFERENCE_TAG, description = "Reference data and lookups"),
        )
    )]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(controller::application::create_application))
        .routes(routes!(controller::application::get_application))
        .routes(routes!(controller::application::get_application_status))
        .routes(routes!(controller::assessment::record_assessment))
        .routes(routes!(controller::licence::issue_licence))
        .routes(routes!(controller::licence::resend_licence_emails))
        .routes(routes!(controller::amendment::create_amendment))
        .routes(routes!(controller::returns::create_return))
        .routes(routes!(controller::case::withdraw_application))
        .routes(routes!(controller::case::revoke_licence))
        .routes(routes!(controller::reference::get_conditions))
        .routes(routes!(controller::reference::get_advisories))
        .routes(routes!(controller::reference::find_addresses))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}
