use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, ConnectionTrait, DbErr, EntityTrait};

use entity::sea_orm_active_enums::Lifecycle;

use crate::server::model::species::{ActivityParams, SpeciesParams};

/// A species set with its activity rows resolved.
pub struct SpeciesSetDetail {
    pub set: entity::species_set::Model,
    pub herring_gull: Option<entity::activity::Model>,
    pub black_headed_gull: Option<entity::activity::Model>,
    pub common_gull: Option<entity::activity::Model>,
    pub great_black_backed_gull: Option<entity::activity::Model>,
    pub lesser_black_backed_gull: Option<entity::activity::Model>,
}

impl SpeciesSetDetail {
    /// Display-name / activity pairs in the order they appear in emails.
    pub fn species(&self) -> [(&'static str, Option<&entity::activity::Model>); 5] {
        [
            ("Herring gull", self.herring_gull.as_ref()),
            ("Black-headed gull", self.black_headed_gull.as_ref()),
            ("Common gull", self.common_gull.as_ref()),
            ("Great black-backed gull", self.great_black_backed_gull.as_ref()),
            (
                "Lesser black-backed gull",
                self.lesser_black_backed_gull.as_ref(),
            ),
        ]
    }
}

pub struct SpeciesSetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SpeciesSetRepository<'a, C> {
    /// Creates a new instance of [`SpeciesSetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the activity rows and then the set referencing them.
    ///
    /// Creation order is strict: activities first, then the set; the caller
    /// assigns the returned set's id into the parent record afterwards. An
    /// activity row is only created for species whose payload actually
    /// requests an activity; everything else leaves its foreign key null.
    pub async fn create(
        &self,
        lifecycle: Lifecycle,
        species: &SpeciesParams,
    ) -> Result<entity::species_set::Model, DbErr> {
        let herring_gull = self.maybe_create_activity(&lifecycle, &species.herring_gull).await?;
        let black_headed_gull = self
            .maybe_create_activity(&lifecycle, &species.black_headed_gull)
            .await?;
        let common_gull = self.maybe_create_activity(&lifecycle, &species.common_gull).await?;
        let great_black_backed_gull = self
            .maybe_create_activity(&lifecycle, &species.great_black_backed_gull)
            .await?;
        let lesser_black_backed_gull = self
            .maybe_create_activity(&lifecycle, &species.lesser_black_backed_gull)
            .await?;

        let set = entity::species_set::ActiveModel {
            lifecycle: ActiveValue::Set(lifecycle),
            herring_gull_id: ActiveValue::Set(herring_gull),
            black_headed_gull_id: ActiveValue::Set(black_headed_gull),
            common_gull_id: ActiveValue::Set(common_gull),
            great_black_backed_gull_id: ActiveValue::Set(great_black_backed_gull),
            lesser_black_backed_gull_id: ActiveValue::Set(lesser_black_backed_gull),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        set.insert(self.db).await
    }

    /// Gets a set with each referenced activity row resolved
    pub async fn find_detail(&self, id: i32) -> Result<Option<SpeciesSetDetail>, DbErr> {
        let Some(set) = entity::prelude::SpeciesSet::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let herring_gull = self.find_activity(set.herring_gull_id).await?;
        let black_headed_gull = self.find_activity(set.black_headed_gull_id).await?;
        let common_gull = self.find_activity(set.common_gull_id).await?;
        let great_black_backed_gull = self.find_activity(set.great_black_backed_gull_id).await?;
        let lesser_black_backed_gull = self.find_activity(set.lesser_black_backed_gull_id).await?;

        Ok(Some(SpeciesSetDetail {
            set,
            herring_gull,
            black_headed_gull,
            common_gull,
            great_black_backed_gull,
            lesser_black_backed_gull,
        }))
    }

    async fn find_activity(
        &self,
        id: Option<i32>,
    ) -> Result<Option<entity::activity::Model>, DbErr> {
        match id {
            Some(id) => entity::prelude::Activity::find_by_id(id).one(self.db).await,
            None => Ok(None),
        }
    }

    async fn maybe_create_activity(
        &self,
        lifecycle: &Lifecycle,
        params: &Option<ActivityParams>,
    ) -> Result<Option<i32>, DbErr> {
        let Some(params) = params else {
            return Ok(None);
        };
        if !params.requires_licence() {
            return Ok(None);
        }

        let activity = entity::activity::ActiveModel {
            lifecycle: ActiveValue::Set(lifecycle.clone()),
            remove_nests: ActiveValue::Set(params.remove_nests),
            quantity_nests_to_remove: ActiveValue::Set(params.quantity_nests_to_remove),
            egg_destruction: ActiveValue::Set(params.egg_destruction),
            quantity_nests_where_eggs_destroyed: ActiveValue::Set(
                params.quantity_nests_where_eggs_destroyed,
            ),
            chicks_to_rescue_centre: ActiveValue::Set(params.chicks_to_rescue_centre),
            quantity_chicks_to_rescue: ActiveValue::Set(params.quantity_chicks_to_rescue),
            chicks_relocate_nearby: ActiveValue::Set(params.chicks_relocate_nearby),
            quantity_chicks_to_relocate: ActiveValue::Set(params.quantity_chicks_to_relocate),
            kill_chicks: ActiveValue::Set(params.kill_chicks),
            quantity_chicks_to_kill: ActiveValue::Set(params.quantity_chicks_to_kill),
            kill_adults: ActiveValue::Set(params.kill_adults),
            quantity_adults_to_kill: ActiveValue::Set(params.quantity_adults_to_kill),
            carried_out_on: ActiveValue::Set(params.carried_out_on),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        Ok(Some(activity.insert(self.db).await?.id))
    }
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use entity::sea_orm_active_enums::Lifecycle;

    use crate::server::{
        model::species::{ActivityParams, SpeciesParams},
        util::test::setup_db,
    };

    use super::SpeciesSetRepository;

    fn nests_params(quantity: i32) -> ActivityParams {
        ActivityParams {
            remove_nests: true,
            quantity_nests_to_remove: Some(quantity),
            ..Default::default()
        }
    }

    /// Expect an activity row for each supplied species and null keys elsewhere
    #[tokio::test]
    async fn create_sets_only_supplied_species() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let species_repository = SpeciesSetRepository::new(&db);

        let set = species_repository
            .create(
                Lifecycle::Application,
                &SpeciesParams {
                    herring_gull: Some(nests_params(50)),
                    common_gull: Some(nests_params(10)),
                    ..Default::default()
                },
            )
            .await?;

        assert!(set.herring_gull_id.is_some());
        assert!(set.common_gull_id.is_some());
        assert!(set.black_headed_gull_id.is_none());
        assert!(set.great_black_backed_gull_id.is_none());
        assert!(set.lesser_black_backed_gull_id.is_none());

        let detail = species_repository.find_detail(set.id).await?.unwrap();
        let herring = detail.herring_gull.unwrap();
        assert_eq!(herring.quantity_nests_to_remove, Some(50));

        Ok(())
    }

    /// Expect no activity row when the payload requests no activity
    #[tokio::test]
    async fn create_skips_payload_without_activities() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let species_repository = SpeciesSetRepository::new(&db);

        let set = species_repository
            .create(
                Lifecycle::Application,
                &SpeciesParams {
                    herring_gull: Some(ActivityParams::default()),
                    ..Default::default()
                },
            )
            .await?;

        assert!(set.herring_gull_id.is_none());

        Ok(())
    }
}
