use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        application::{ApplicationDetailDto, CreateApplicationDto},
        status::CaseStatusDto,
    },
    server::{
        error::Error,
        model::app::AppState,
        service::{application::ApplicationService, status::StatusService},
    },
};

pub static APPLICATION_TAG: &str = "application";

/// Submit a licence application
#[utoipa::path(
    post,
    path = "/api/applications",
    tag = APPLICATION_TAG,
    request_body = CreateApplicationDto,
    responses(
        (status = 201, description = "Application created", body = ApplicationDetailDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_application(
    State(state): State<AppState>,
    Json(dto): Json<CreateApplicationDto>,
) -> Result<impl IntoResponse, Error> {
    let application_service = ApplicationService::new(&state);

    let application = application_service.create(&dto).await?;
    let detail = application_service.find_detail(application.id).await?;

    Ok((StatusCode::CREATED, Json(detail)))
}

/// Get a stored application
#[utoipa::path(
    get,
    path = "/api/applications/{id}",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application id / licence number")
    ),
    responses(
        (status = 200, description = "Application detail", body = ApplicationDetailDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let detail = ApplicationService::new(&state).find_detail(id).await?;

    Ok((StatusCode::OK, Json(detail)))
}

/// Get the derived case status for an application
#[utoipa::path(
    get,
    path = "/api/applications/{id}/status",
    tag = APPLICATION_TAG,
    params(
        ("id" = i32, Path, description = "Application id / licence number")
    ),
    responses(
        (status = 200, description = "Derived status", body = CaseStatusDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_application_status(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let status = StatusService::new(&state.db).status(id).await?;

    Ok((
        StatusCode::OK,
        Json(CaseStatusDto {
            application_id: id,
            status,
        }),
    ))
}
