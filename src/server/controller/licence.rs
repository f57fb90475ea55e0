use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        licence::{IssueLicenceDto, LicenceDto},
    },
    server::{error::Error, model::app::AppState, service::licence::LicenceService},
};

pub static LICENCE_TAG: &str = "licence";

/// Issue a licence against an application
#[utoipa::path(
    post,
    path = "/api/applications/{id}/licence",
    tag = LICENCE_TAG,
    params(
        ("id" = i32, Path, description = "Application id / licence number")
    ),
    request_body = IssueLicenceDto,
    responses(
        (status = 201, description = "Licence issued", body = LicenceDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn issue_licence(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<IssueLicenceDto>,
) -> Result<impl IntoResponse, Error> {
    let licence = LicenceService::new(&state).issue(id, &dto).await?;

    Ok((StatusCode::CREATED, Json(licence)))
}

/// Re-send the issuance emails for an issued licence
#[utoipa::path(
    post,
    path = "/api/applications/{id}/licence/resend-emails",
    tag = LICENCE_TAG,
    params(
        ("id" = i32, Path, description = "Application id / licence number")
    ),
    responses(
        (status = 204, description = "Emails re-sent"),
        (status = 404, description = "Application or licence not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn resend_licence_emails(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    LicenceService::new(&state).resend_emails(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
