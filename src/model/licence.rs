use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::model::application::SpeciesRangesDto;

/// Request body for issuing a licence against an approved application.
///
/// The permitted species set may differ from what was applied for, so the
/// payload carries its own per-species activities. Default conditions and
/// advisories are attached automatically; only optional selections are
/// listed here.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IssueLicenceDto {
    pub period_from: NaiveDate,
    pub period_to: NaiveDate,
    pub species: SpeciesRangesDto,
    #[serde(default)]
    pub optional_condition_ids: Vec<i32>,
    #[serde(default)]
    pub optional_advisory_ids: Vec<i32>,
}

/// Issued licence as stored.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct LicenceDto {
    /// Licence number, identical to the application id.
    pub application_id: i32,
    pub period_from: NaiveDate,
    pub period_to: NaiveDate,
    pub condition_ids: Vec<i32>,
    pub advisory_ids: Vec<i32>,
}
