use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use crate::model::application::MeasureFlagsDto;

/// Tri-state value recorded per mitigation measure.
pub const MEASURE_TRIED: &str = "Tried";
pub const MEASURE_INTEND: &str = "Intend";
pub const MEASURE_NO: &str = "No";

/// Derived tri-state values for every named mitigation measure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MeasureValues {
    pub prevent_nesting: String,
    pub remove_old_nests: String,
    pub remove_litter: String,
    pub human_disturbance: String,
    pub scaring_devices: String,
    pub hawking: String,
    pub disturbance_by_dogs: String,
}

fn tri_state(tried: bool, intend: bool) -> String {
    // Tried takes priority over Intend over No.
    if tried {
        MEASURE_TRIED.to_string()
    } else if intend {
        MEASURE_INTEND.to_string()
    } else {
        MEASURE_NO.to_string()
    }
}

impl MeasureValues {
    /// Collapses the two disjoint input flag sets into one tri-state record.
    pub fn derive(tried: &MeasureFlagsDto, intend: &MeasureFlagsDto) -> Self {
        Self {
            prevent_nesting: tri_state(tried.prevent_nesting, intend.prevent_nesting),
            remove_old_nests: tri_state(tried.remove_old_nests, intend.remove_old_nests),
            remove_litter: tri_state(tried.remove_litter, intend.remove_litter),
            human_disturbance: tri_state(tried.human_disturbance, intend.human_disturbance),
            scaring_devices: tri_state(tried.scaring_devices, intend.scaring_devices),
            hawking: tri_state(tried.hawking, intend.hawking),
            disturbance_by_dogs: tri_state(tried.disturbance_by_dogs, intend.disturbance_by_dogs),
        }
    }
}

pub struct MeasureRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MeasureRepository<'a, C> {
    /// Creates a new instance of [`MeasureRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new measure record
    pub async fn create(&self, values: &MeasureValues) -> Result<entity::measure::Model, DbErr> {
        let model = entity::measure::ActiveModel {
            prevent_nesting: ActiveValue::Set(values.prevent_nesting.clone()),
            remove_old_nests: ActiveValue::Set(values.remove_old_nests.clone()),
            remove_litter: ActiveValue::Set(values.remove_litter.clone()),
            human_disturbance: ActiveValue::Set(values.human_disturbance.clone()),
            scaring_devices: ActiveValue::Set(values.scaring_devices.clone()),
            hawking: ActiveValue::Set(values.hawking.clone()),
            disturbance_by_dogs: ActiveValue::Set(values.disturbance_by_dogs.clone()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Gets a measure record by id
    pub async fn find_one(&self, id: i32) -> Result<Option<entity::measure::Model>, DbErr> {
        entity::prelude::Measure::find_by_id(id).one(self.db).await
    }
}

#[cfg(test)]
mod tests {
    use crate::model::application::MeasureFlagsDto;

    use super::{MeasureValues, MEASURE_INTEND, MEASURE_NO, MEASURE_TRIED};

    /// Expect Tried to win over Intend, and No only when neither is set
    #[test]
    fn tried_takes_priority() {
        let tried = MeasureFlagsDto {
            prevent_nesting: true,
            ..Default::default()
        };
        let intend = MeasureFlagsDto {
            prevent_nesting: true,
            remove_litter: true,
            ..Default::default()
        };

        let values = MeasureValues::derive(&tried, &intend);

        assert_eq!(values.prevent_nesting, MEASURE_TRIED);
        assert_eq!(values.remove_litter, MEASURE_INTEND);
        assert_eq!(values.hawking, MEASURE_NO);
    }
}
