use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A person or organisation attached to an application.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ContactDto {
    pub name: String,
    pub organisation: Option<String>,
    pub email_address: String,
    pub phone_number: Option<String>,
}

/// Either a looked-up address (carrying a UPRN) or a manually entered one;
/// the postcode is always present.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AddressDto {
    pub uprn: Option<i64>,
    pub address_line_1: Option<String>,
    pub address_line_2: Option<String>,
    pub address_town: Option<String>,
    pub address_county: Option<String>,
    pub postcode: String,
}

impl From<&entity::contact::Model> for ContactDto {
    fn from(model: &entity::contact::Model) -> Self {
        Self {
            name: model.name.clone(),
            organisation: model.organisation.clone(),
            email_address: model.email_address.clone(),
            phone_number: model.phone_number.clone(),
        }
    }
}

impl From<&entity::address::Model> for AddressDto {
    fn from(model: &entity::address::Model) -> Self {
        Self {
            uprn: model.uprn,
            address_line_1: model.address_line_1.clone(),
            address_line_2: model.address_line_2.clone(),
            address_town: model.address_town.clone(),
            address_county: model.address_county.clone(),
            postcode: model.postcode.clone(),
        }
    }
}

/// Requested activities for one species, quantities as coarse textual ranges
/// (`upTo10` … `upTo1000`).
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActivityRangesDto {
    #[serde(default)]
    pub remove_nests: bool,
    pub quantity_nests_to_remove: Option<String>,
    #[serde(default)]
    pub egg_destruction: bool,
    pub quantity_nests_where_eggs_destroyed: Option<String>,
    #[serde(default)]
    pub chicks_to_rescue_centre: bool,
    pub quantity_chicks_to_rescue: Option<String>,
    #[serde(default)]
    pub chicks_relocate_nearby: bool,
    pub quantity_chicks_to_relocate: Option<String>,
    #[serde(default)]
    pub kill_chicks: bool,
    pub quantity_chicks_to_kill: Option<String>,
    #[serde(default)]
    pub kill_adults: bool,
    pub quantity_adults_to_kill: Option<String>,
}

/// Per-species activity payloads; an absent species is not part of the case.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SpeciesRangesDto {
    pub herring_gull: Option<ActivityRangesDto>,
    pub black_headed_gull: Option<ActivityRangesDto>,
    pub common_gull: Option<ActivityRangesDto>,
    pub great_black_backed_gull: Option<ActivityRangesDto>,
    pub lesser_black_backed_gull: Option<ActivityRangesDto>,
}

/// The nuisance being reported.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct IssueDto {
    #[serde(default)]
    pub aggression: bool,
    #[serde(default)]
    pub dive_bombing: bool,
    #[serde(default)]
    pub noise: bool,
    #[serde(default)]
    pub droppings: bool,
    #[serde(default)]
    pub nesting_material: bool,
    #[serde(default)]
    pub at_height_aggression: bool,
    #[serde(default)]
    pub other: bool,
    pub issue_details: Option<String>,
    pub site_used_for: Option<String>,
}

/// One boolean per named mitigation measure.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MeasureFlagsDto {
    #[serde(default)]
    pub prevent_nesting: bool,
    #[serde(default)]
    pub remove_old_nests: bool,
    #[serde(default)]
    pub remove_litter: bool,
    #[serde(default)]
    pub human_disturbance: bool,
    #[serde(default)]
    pub scaring_devices: bool,
    #[serde(default)]
    pub hawking: bool,
    #[serde(default)]
    pub disturbance_by_dogs: bool,
}

impl From<&entity::issue::Model> for IssueDto {
    fn from(model: &entity::issue::Model) -> Self {
        Self {
            aggression: model.aggression,
            dive_bombing: model.dive_bombing,
            noise: model.noise,
            droppings: model.droppings,
            nesting_material: model.nesting_material,
            at_height_aggression: model.at_height_aggression,
            other: model.other,
            issue_details: model.issue_details.clone(),
            site_used_for: model.site_used_for.clone(),
        }
    }
}

/// Cleaned request body for creating an application.
///
/// `on_behalf_contact` absent means the licence holder applies directly;
/// `site_address` absent means the site is the holder's own address.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CreateApplicationDto {
    pub licence_holder: ContactDto,
    pub on_behalf_contact: Option<ContactDto>,
    pub licence_holder_address: AddressDto,
    pub site_address: Option<AddressDto>,
    pub species: SpeciesRangesDto,
    pub issue: IssueDto,
    pub measures_tried: MeasureFlagsDto,
    pub measures_intend_to_try: MeasureFlagsDto,
}

/// Stored activity detail with quantities resolved to integers.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActivityDetailDto {
    pub remove_nests: bool,
    pub quantity_nests_to_remove: Option<i32>,
    pub egg_destruction: bool,
    pub quantity_nests_where_eggs_destroyed: Option<i32>,
    pub chicks_to_rescue_centre: bool,
    pub quantity_chicks_to_rescue: Option<i32>,
    pub chicks_relocate_nearby: bool,
    pub quantity_chicks_to_relocate: Option<i32>,
    pub kill_chicks: bool,
    pub quantity_chicks_to_kill: Option<i32>,
    pub kill_adults: bool,
    pub quantity_adults_to_kill: Option<i32>,
}

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SpeciesDetailDto {
    pub herring_gull: Option<ActivityDetailDto>,
    pub black_headed_gull: Option<ActivityDetailDto>,
    pub common_gull: Option<ActivityDetailDto>,
    pub great_black_backed_gull: Option<ActivityDetailDto>,
    pub lesser_black_backed_gull: Option<ActivityDetailDto>,
}

impl From<&entity::activity::Model> for ActivityDetailDto {
    fn from(model: &entity::activity::Model) -> Self {
        Self {
            remove_nests: model.remove_nests,
            quantity_nests_to_remove: model.quantity_nests_to_remove,
            egg_destruction: model.egg_destruction,
            quantity_nests_where_eggs_destroyed: model.quantity_nests_where_eggs_destroyed,
            chicks_to_rescue_centre: model.chicks_to_rescue_centre,
            quantity_chicks_to_rescue: model.quantity_chicks_to_rescue,
            chicks_relocate_nearby: model.chicks_relocate_nearby,
            quantity_chicks_to_relocate: model.quantity_chicks_to_relocate,
            kill_chicks: model.kill_chicks,
            quantity_chicks_to_kill: model.quantity_chicks_to_kill,
            kill_adults: model.kill_adults,
            quantity_adults_to_kill: model.quantity_adults_to_kill,
        }
    }
}

/// Full application detail as stored.
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct ApplicationDetailDto {
    /// The public licence number.
    pub id: i32,
    pub licence_holder: ContactDto,
    pub licence_applicant: ContactDto,
    pub licence_holder_address: AddressDto,
    pub site_address: AddressDto,
    pub species: SpeciesDetailDto,
    pub issue: IssueDto,
    pub created_at: NaiveDateTime,
}

/// Evaluator findings against the statutory tests.
#[derive(Clone, Default, Serialize, Deserialize, utoipa::ToSchema)]
pub struct AssessmentDto {
    pub test_one_assessment: Option<String>,
    pub test_one_decision: Option<bool>,
    pub test_two_assessment: Option<String>,
    pub test_two_decision: Option<bool>,
    pub test_three_assessment: Option<String>,
    pub test_three_decision: Option<bool>,
    pub decision: Option<bool>,
    pub refusal_reason: Option<String>,
}

impl From<&entity::assessment::Model> for AssessmentDto {
    fn from(model: &entity::assessment::Model) -> Self {
        Self {
            test_one_assessment: model.test_one_assessment.clone(),
            test_one_decision: model.test_one_decision,
            test_two_assessment: model.test_two_assessment.clone(),
            test_two_decision: model.test_two_decision,
            test_three_assessment: model.test_three_assessment.clone(),
            test_three_decision: model.test_three_decision,
            decision: model.decision,
            refusal_reason: model.refusal_reason.clone(),
        }
    }
}

/// Terminal-state request body (withdrawal or revocation).
#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct CaseRecordDto {
    pub reason: String,
    pub created_by: String,
}
