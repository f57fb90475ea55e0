//! Internal representation of per-species activity payloads.
//!
//! The same five-species shape arrives from three request paths (application,
//! licence issuance, amendment) with textual range quantities, and from the
//! returns path with exact counts and event dates. Both converge on
//! [`SpeciesParams`] before anything touches the database.

use chrono::NaiveDate;

use crate::{
    model::{
        application::{ActivityRangesDto, SpeciesRangesDto},
        returns::{ReportedActivityDto, ReportedSpeciesDto},
    },
    server::util::range::range_to_integer,
};

/// One species' activities, quantities resolved to integers.
#[derive(Clone, Debug, Default)]
pub struct ActivityParams {
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
    pub carried_out_on: Option<NaiveDate>,
}

impl ActivityParams {
    /// A payload with no activity requested carries no licensing weight, so
    /// no activity row is created for it.
    pub fn requires_licence(&self) -> bool {
        self.remove_nests
            || self.egg_destruction
            || self.chicks_to_rescue_centre
            || self.chicks_relocate_nearby
            || self.kill_chicks
            || self.kill_adults
    }
}

/// Per-species activity payloads; `None` means the species is not part of
/// the case.
#[derive(Clone, Debug, Default)]
pub struct SpeciesParams {
    pub herring_gull: Option<ActivityParams>,
    pub black_headed_gull: Option<ActivityParams>,
    pub common_gull: Option<ActivityParams>,
    pub great_black_backed_gull: Option<ActivityParams>,
    pub lesser_black_backed_gull: Option<ActivityParams>,
}

fn quantity(flag: bool, range: Option<&str>) -> Option<i32> {
    // A quantity is only meaningful when its activity flag is set.
    flag.then(|| range_to_integer(range))
}

impl From<&ActivityRangesDto> for ActivityParams {
    fn from(dto: &ActivityRangesDto) -> Self {
        Self {
            remove_nests: dto.remove_nests,
            quantity_nests_to_remove: quantity(
                dto.remove_nests,
                dto.quantity_nests_to_remove.as_deref(),
            ),
            egg_destruction: dto.egg_destruction,
            quantity_nests_where_eggs_destroyed: quantity(
                dto.egg_destruction,
                dto.quantity_nests_where_eggs_destroyed.as_deref(),
            ),
            chicks_to_rescue_centre: dto.chicks_to_rescue_centre,
            quantity_chicks_to_rescue: quantity(
                dto.chicks_to_rescue_centre,
                dto.quantity_chicks_to_rescue.as_deref(),
            ),
            chicks_relocate_nearby: dto.chicks_relocate_nearby,
            quantity_chicks_to_relocate: quantity(
                dto.chicks_relocate_nearby,
                dto.quantity_chicks_to_relocate.as_deref(),
            ),
            kill_chicks: dto.kill_chicks,
            quantity_chicks_to_kill: quantity(
                dto.kill_chicks,
                dto.quantity_chicks_to_kill.as_deref(),
            ),
            kill_adults: dto.kill_adults,
            quantity_adults_to_kill: quantity(
                dto.kill_adults,
                dto.quantity_adults_to_kill.as_deref(),
            ),
            carried_out_on: None,
        }
    }
}

impl From<&SpeciesRangesDto> for SpeciesParams {
    fn from(dto: &SpeciesRangesDto) -> Self {
        Self {
            herring_gull: dto.herring_gull.as_ref().map(ActivityParams::from),
            black_headed_gull: dto.black_headed_gull.as_ref().map(ActivityParams::from),
            common_gull: dto.common_gull.as_ref().map(ActivityParams::from),
            great_black_backed_gull: dto
                .great_black_backed_gull
                .as_ref()
                .map(ActivityParams::from),
            lesser_black_backed_gull: dto
                .lesser_black_backed_gull
                .as_ref()
                .map(ActivityParams::from),
        }
    }
}

impl From<&ReportedActivityDto> for ActivityParams {
    fn from(dto: &ReportedActivityDto) -> Self {
        Self {
            remove_nests: dto.remove_nests,
            quantity_nests_to_remove: dto.quantity_nests_to_remove,
            egg_destruction: dto.egg_destruction,
            quantity_nests_where_eggs_destroyed: dto.quantity_nests_where_eggs_destroyed,
            chicks_to_rescue_centre: dto.chicks_to_rescue_centre,
            quantity_chicks_to_rescue: dto.quantity_chicks_to_rescue,
            chicks_relocate_nearby: dto.chicks_relocate_nearby,
            quantity_chicks_to_relocate: dto.quantity_chicks_to_relocate,
            kill_chicks: dto.kill_chicks,
            quantity_chicks_to_kill: dto.quantity_chicks_to_kill,
            kill_adults: dto.kill_adults,
            quantity_adults_to_kill: dto.quantity_adults_to_kill,
            carried_out_on: dto.carried_out_on,
        }
    }
}

impl From<&ReportedSpeciesDto> for SpeciesParams {
    fn from(dto: &ReportedSpeciesDto) -> Self {
        Self {
            herring_gull: dto.herring_gull.as_ref().map(ActivityParams::from),
            black_headed_gull: dto.black_headed_gull.as_ref().map(ActivityParams::from),
            common_gull: dto.common_gull.as_ref().map(ActivityParams::from),
            great_black_backed_gull: dto
                .great_black_backed_gull
                .as_ref()
                .map(ActivityParams::from),
            lesser_black_backed_gull: dto
                .lesser_black_backed_gull
                .as_ref()
                .map(ActivityParams::from),
        }
    }
}
