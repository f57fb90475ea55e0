use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Activities actually carried out for one species: exact counts plus the
/// date the work took place.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReportedActivityDto {
    #[serde(default)]
    pub remove_nests: bool,
    pub quantity_nests_to_remove: Option<i32>,
    #[serde(default)]
    pub egg_destruction: bool,
    pub quantity_nests_where_eggs_destroyed: Option<i32>,
    #[serde(default)]
    pub chicks_to_rescue_centre: bool,
    pub quantity_chicks_to_rescue: Option<i32>,
    #[serde(default)]
    pub chicks_relocate_nearby: bool,
    pub quantity_chicks_to_relocate: Option<i32>,
    #[serde(default)]
    pub kill_chicks: bool,
    pub quantity_chicks_to_kill: Option<i32>,
    #[serde(default)]
    pub kill_adults: bool,
    pub quantity_adults_to_kill: Option<i32>,
    pub carried_out_on: Option<NaiveDate>,
}

#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReportedSpeciesDto {
    pub herring_gull: Option<ReportedActivityDto>,
    pub black_headed_gull: Option<ReportedActivityDto>,
    pub common_gull: Option<ReportedActivityDto>,
    pub great_black_backed_gull: Option<ReportedActivityDto>,
    pub lesser_black_backed_gull: Option<ReportedActivityDto>,
}

/// Request body for submitting a return against a licence.
///
/// The three purpose flags are independent; a single submission may serve
/// several purposes, each triggering its own email. Species payloads are
/// only persisted for reporting returns.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateReturnDto {
    #[serde(default)]
    pub is_reporting_return: bool,
    #[serde(default)]
    pub is_site_visit_return: bool,
    #[serde(default)]
    pub is_final_return: bool,
    #[serde(default)]
    pub species: ReportedSpeciesDto,
    pub has_tried_preventative_measures: Option<bool>,
    pub preventative_measures_details: Option<String>,
    pub site_visit_date: Option<NaiveDate>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ReturnDto {
    pub id: i32,
    pub licence_id: i32,
    pub is_reporting_return: bool,
    pub is_site_visit_return: bool,
    pub is_final_return: bool,
}
