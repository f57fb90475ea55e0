use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct LicenceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> LicenceRepository<'a, C> {
    /// Creates a new instance of [`LicenceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the licence record, 1:1 with its application
    pub async fn create(
        &self,
        application_id: i32,
        period_from: NaiveDate,
        period_to: NaiveDate,
        species_set_id: i32,
    ) -> Result<entity::licence::Model, DbErr> {
        let model = entity::licence::ActiveModel {
            application_id: ActiveValue::Set(application_id),
            period_from: ActiveValue::Set(period_from),
            period_to: ActiveValue::Set(period_to),
            species_set_id: ActiveValue::Set(species_set_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            deleted_at: ActiveValue::Set(None),
        };

        model.insert(self.db).await
    }

    /// Attaches conditions to a licence via join rows.
    ///
    /// Called once at issuance with the full default-plus-selected set;
    /// the joined set is never recomputed afterwards.
    pub async fn attach_conditions(
        &self,
        licence_id: i32,
        condition_ids: &[i32],
    ) -> Result<(), DbErr> {
        for condition_id in condition_ids {
            let join = entity::licence_condition::ActiveModel {
                licence_id: ActiveValue::Set(licence_id),
                condition_id: ActiveValue::Set(*condition_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            };
            join.insert(self.db).await?;
        }

        Ok(())
    }

    /// Attaches advisories to a licence via join rows
    pub async fn attach_advisories(
        &self,
        licence_id: i32,
        advisory_ids: &[i32],
    ) -> Result<(), DbErr> {
        for advisory_id in advisory_ids {
            let join = entity::licence_advisory::ActiveModel {
                licence_id: ActiveValue::Set(licence_id),
                advisory_id: ActiveValue::Set(*advisory_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            };
            join.insert(self.db).await?;
        }

        Ok(())
    }

    /// Gets a live licence by its application id
    pub async fn find_one(
        &self,
        application_id: i32,
    ) -> Result<Option<entity::licence::Model>, DbErr> {
        entity::prelude::Licence::find_by_id(application_id)
            .filter(entity::licence::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Checks whether a licence has been issued for the application
    pub async fn exists(&self, application_id: i32) -> Result<bool, DbErr> {
        Ok(self.find_one(application_id).await?.is_some())
    }

    /// Gets the ids of conditions joined to a licence
    pub async fn condition_ids(&self, licence_id: i32) -> Result<Vec<i32>, DbErr> {
        let joins = entity::prelude::LicenceCondition::find()
            .filter(entity::licence_condition::Column::LicenceId.eq(licence_id))
            .filter(entity::licence_condition::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(joins.into_iter().map(|j| j.condition_id).collect())
    }

    /// Gets the ids of advisories joined to a licence
    pub async fn advisory_ids(&self, licence_id: i32) -> Result<Vec<i32>, DbErr> {
        let joins = entity::prelude::LicenceAdvisory::find()
            .filter(entity::licence_advisory::Column::LicenceId.eq(licence_id))
            .filter(entity::licence_advisory::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(joins.into_iter().map(|j| j.advisory_id).collect())
    }
}
