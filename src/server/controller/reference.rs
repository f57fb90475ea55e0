use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;

use crate::{
    model::{
        api::ErrorDto,
        reference::{FoundAddressDto, ReferenceItemDto},
    },
    server::{
        data::{advisory::AdvisoryRepository, condition::ConditionRepository},
        error::Error,
        model::app::AppState,
    },
};

pub static REFERENCE_TAG: &str = "reference";

/// Get all licence conditions
#[utoipa::path(
    get,
    path = "/api/conditions",
    tag = REFERENCE_TAG,
    responses(
        (status = 200, description = "All live conditions in display order", body = Vec<ReferenceItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_conditions(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let conditions = ConditionRepository::new(&state.db).find_all().await?;
    let items: Vec<ReferenceItemDto> = conditions.iter().map(ReferenceItemDto::from).collect();

    Ok((StatusCode::OK, Json(items)))
}

/// Get all licence advisories
#[utoipa::path(
    get,
    path = "/api/advisories",
    tag = REFERENCE_TAG,
    responses(
        (status = 200, description = "All live advisories in display order", body = Vec<ReferenceItemDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_advisories(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let advisories = AdvisoryRepository::new(&state.db).find_all().await?;
    let items: Vec<ReferenceItemDto> = advisories.iter().map(ReferenceItemDto::from).collect();

    Ok((StatusCode::OK, Json(items)))
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct AddressQuery {
    /// Postcode to look up.
    pub postcode: String,
}

/// Look up candidate addresses for a postcode
#[utoipa::path(
    get,
    path = "/api/addresses",
    tag = REFERENCE_TAG,
    params(AddressQuery),
    responses(
        (status = 200, description = "Candidate addresses", body = Vec<FoundAddressDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn find_addresses(
    State(state): State<AppState>,
    Query(query): Query<AddressQuery>,
) -> Result<impl IntoResponse, Error> {
    let addresses = state.postcodes.find_addresses(&query.postcode).await?;

    Ok((StatusCode::OK, Json(addresses)))
}
