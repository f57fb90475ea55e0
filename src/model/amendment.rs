use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::application::SpeciesRangesDto;

/// Request body for amending an issued licence.
///
/// Amendments supersede rather than mutate: the original licence and its
/// joined conditions are left untouched, and the justification is written to
/// the application's audit notes.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateAmendmentDto {
    pub species: SpeciesRangesDto,
    #[serde(default)]
    pub optional_condition_ids: Vec<i32>,
    #[serde(default)]
    pub optional_advisory_ids: Vec<i32>,
    pub period_from: Option<NaiveDate>,
    pub period_to: Option<NaiveDate>,
    pub justification: String,
    pub created_by: String,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AmendmentDto {
    pub id: i32,
    pub licence_id: i32,
    pub period_from: Option<NaiveDate>,
    pub period_to: Option<NaiveDate>,
    pub condition_ids: Vec<i32>,
    pub advisory_ids: Vec<i32>,
}
