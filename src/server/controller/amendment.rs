use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        amendment::{AmendmentDto, CreateAmendmentDto},
        api::ErrorDto,
    },
    server::{error::Error, model::app::AppState, service::amendment::AmendmentService},
};

pub static AMENDMENT_TAG: &str = "amendment";

/// Amend an issued licence
#[utoipa::path(
    post,
    path = "/api/applications/{id}/amendments",
    tag = AMENDMENT_TAG,
    params(
        ("id" = i32, Path, description = "Application id / licence number")
    ),
    request_body = CreateAmendmentDto,
    responses(
        (status = 201, description = "Amendment recorded", body = AmendmentDto),
        (status = 404, description = "No licence issued for this application", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_amendment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateAmendmentDto>,
) -> Result<impl IntoResponse, Error> {
    let amendment = AmendmentService::new(&state).amend(id, &dto).await?;

    Ok((StatusCode::CREATED, Json(amendment)))
}
