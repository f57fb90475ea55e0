use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, application::CaseRecordDto},
    server::{
        data::{
            application::ApplicationRepository,
            case_record::{RevocationRepository, WithdrawalRepository},
            licence::LicenceRepository,
        },
        error::Error,
        model::app::AppState,
    },
};

pub static CASE_TAG: &str = "case";

/// Withdraw an application
#[utoipa::path(
    post,
    path = "/api/applications/{id}/withdrawal",
    tag = CASE_TAG,
    params(
        ("id" = i32, Path, description = "Application id / licence number")
    ),
    request_body = CaseRecordDto,
    responses(
        (status = 201, description = "Withdrawal recorded"),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn withdraw_application(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CaseRecordDto>,
) -> Result<impl IntoResponse, Error> {
    if ApplicationRepository::new(&state.db).find_one(id).await?.is_none() {
        return Err(Error::NotFound(format!("Application {id} not found")));
    }

    WithdrawalRepository::new(&state.db)
        .create(id, &dto.reason, &dto.created_by)
        .await?;

    Ok(StatusCode::CREATED)
}

/// Revoke an issued licence
#[utoipa::path(
    post,
    path = "/api/applications/{id}/revocation",
    tag = CASE_TAG,
    params(
        ("id" = i32, Path, description = "Application id / licence number")
    ),
    request_body = CaseRecordDto,
    responses(
        (status = 201, description = "Revocation recorded"),
        (status = 404, description = "No licence issued for this application", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn revoke_licence(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CaseRecordDto>,
) -> Result<impl IntoResponse, Error> {
    // Only an issued licence can be revoked.
    if !LicenceRepository::new(&state.db).exists(id).await? {
        return Err(Error::NotFound(format!(
            "No licence issued for application {id}"
        )));
    }

    RevocationRepository::new(&state.db)
        .create(id, &dto.reason, &dto.created_by)
        .await?;

    Ok(StatusCode::CREATED)
}
