use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        returns::{CreateReturnDto, ReturnDto},
    },
    server::{error::Error, model::app::AppState, service::returns::ReturnService},
};

pub static RETURNS_TAG: &str = "returns";

/// Submit a return against an issued licence
#[utoipa::path(
    post,
    path = "/api/applications/{id}/returns",
    tag = RETURNS_TAG,
    params(
        ("id" = i32, Path, description = "Application id / licence number")
    ),
    request_body = CreateReturnDto,
    responses(
        (status = 201, description = "Return recorded", body = ReturnDto),
        (status = 404, description = "No licence issued for this application", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_return(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<CreateReturnDto>,
) -> Result<impl IntoResponse, Error> {
    let returned = ReturnService::new(&state).create(id, &dto).await?;

    Ok((StatusCode::CREATED, Json(returned)))
}
