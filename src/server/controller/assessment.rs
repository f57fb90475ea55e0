use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, application::AssessmentDto},
    server::{
        data::{application::ApplicationRepository, assessment::AssessmentRepository},
        error::Error,
        model::app::AppState,
    },
};

pub static ASSESSMENT_TAG: &str = "assessment";

/// Record or update the assessment for an application
#[utoipa::path(
    post,
    path = "/api/applications/{id}/assessment",
    tag = ASSESSMENT_TAG,
    params(
        ("id" = i32, Path, description = "Application id / licence number")
    ),
    request_body = AssessmentDto,
    responses(
        (status = 200, description = "Assessment recorded", body = AssessmentDto),
        (status = 404, description = "Application not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn record_assessment(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(dto): Json<AssessmentDto>,
) -> Result<impl IntoResponse, Error> {
    if ApplicationRepository::new(&state.db).find_one(id).await?.is_none() {
        return Err(Error::NotFound(format!("Application {id} not found")));
    }

    let assessment_repository = AssessmentRepository::new(&state.db);

    // Keyed 1:1 by application id, so the second submission is an update.
    let assessment = match assessment_repository.update(id, &dto).await? {
        Some(assessment) => assessment,
        None => assessment_repository.create(id, &dto).await?,
    };

    Ok((StatusCode::OK, Json(AssessmentDto::from(&assessment))))
}
