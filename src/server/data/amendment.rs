use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct AmendmentRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AmendmentRepository<'a, C> {
    /// Creates a new instance of [`AmendmentRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an amendment record referencing, never mutating, the licence
    pub async fn create(
        &self,
        licence_id: i32,
        species_set_id: i32,
        period_from: Option<NaiveDate>,
        period_to: Option<NaiveDate>,
    ) -> Result<entity::amendment::Model, DbErr> {
        let model = entity::amendment::ActiveModel {
            licence_id: ActiveValue::Set(licence_id),
            species_set_id: ActiveValue::Set(species_set_id),
            period_from: ActiveValue::Set(period_from),
            period_to: ActiveValue::Set(period_to),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Attaches the changed optional conditions to an amendment
    pub async fn attach_conditions(
        &self,
        amendment_id: i32,
        condition_ids: &[i32],
    ) -> Result<(), DbErr> {
        for condition_id in condition_ids {
            let join = entity::amend_condition::ActiveModel {
                amendment_id: ActiveValue::Set(amendment_id),
                condition_id: ActiveValue::Set(*condition_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            };
            join.insert(self.db).await?;
        }

        Ok(())
    }

    /// Attaches the changed optional advisories to an amendment
    pub async fn attach_advisories(
        &self,
        amendment_id: i32,
        advisory_ids: &[i32],
    ) -> Result<(), DbErr> {
        for advisory_id in advisory_ids {
            let join = entity::amend_advisory::ActiveModel {
                amendment_id: ActiveValue::Set(amendment_id),
                advisory_id: ActiveValue::Set(*advisory_id),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            };
            join.insert(self.db).await?;
        }

        Ok(())
    }

    /// Gets an amendment by id
    pub async fn find_one(&self, id: i32) -> Result<Option<entity::amendment::Model>, DbErr> {
        entity::prelude::Amendment::find_by_id(id).one(self.db).await
    }

    /// Gets every amendment recorded against a licence, oldest first.
    ///
    /// History read path: soft-deleted rows are included deliberately.
    pub async fn find_all_for_licence(
        &self,
        licence_id: i32,
    ) -> Result<Vec<entity::amendment::Model>, DbErr> {
        entity::prelude::Amendment::find()
            .filter(entity::amendment::Column::LicenceId.eq(licence_id))
            .order_by_asc(entity::amendment::Column::CreatedAt)
            .all(self.db)
            .await
    }

    /// Checks whether the licence has been amended at least once
    pub async fn any_for_licence(&self, licence_id: i32) -> Result<bool, DbErr> {
        Ok(!self.find_all_for_licence(licence_id).await?.is_empty())
    }

    /// Gets the ids of conditions carried by an amendment
    pub async fn condition_ids(&self, amendment_id: i32) -> Result<Vec<i32>, DbErr> {
        let joins = entity::prelude::AmendCondition::find()
            .filter(entity::amend_condition::Column::AmendmentId.eq(amendment_id))
            .filter(entity::amend_condition::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(joins.into_iter().map(|j| j.condition_id).collect())
    }

    /// Gets the ids of advisories carried by an amendment
    pub async fn advisory_ids(&self, amendment_id: i32) -> Result<Vec<i32>, DbErr> {
        let joins = entity::prelude::AmendAdvisory::find()
            .filter(entity::amend_advisory::Column::AmendmentId.eq(amendment_id))
            .filter(entity::amend_advisory::Column::DeletedAt.is_null())
            .all(self.db)
            .await?;

        Ok(joins.into_iter().map(|j| j.advisory_id).collect())
    }
}
