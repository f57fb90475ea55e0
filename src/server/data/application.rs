use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

/// Foreign keys gathered while building an application aggregate.
///
/// Applicant and holder (and site and holder address) may be the same row;
/// the ids are then simply equal.
pub struct ApplicationKeys {
    pub licence_holder_id: i32,
    pub licence_applicant_id: i32,
    pub licence_holder_address_id: i32,
    pub site_address_id: i32,
    pub species_set_id: i32,
    pub issue_id: i32,
    pub measure_id: i32,
}

pub struct ApplicationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ApplicationRepository<'a, C> {
    /// Creates a new instance of [`ApplicationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates the root application record under a caller-supplied id.
    ///
    /// The id is the probed random licence number; the primary key
    /// constraint backstops the probe if two creations race for the same
    /// number.
    pub async fn create(
        &self,
        id: i32,
        keys: ApplicationKeys,
    ) -> Result<entity::application::Model, DbErr> {
        let model = entity::application::ActiveModel {
            id: ActiveValue::Set(id),
            licence_holder_id: ActiveValue::Set(keys.licence_holder_id),
            licence_applicant_id: ActiveValue::Set(keys.licence_applicant_id),
            licence_holder_address_id: ActiveValue::Set(keys.licence_holder_address_id),
            site_address_id: ActiveValue::Set(keys.site_address_id),
            species_set_id: ActiveValue::Set(keys.species_set_id),
            issue_id: ActiveValue::Set(keys.issue_id),
            measure_id: ActiveValue::Set(keys.measure_id),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            deleted_at: ActiveValue::Set(None),
        };

        model.insert(self.db).await
    }

    /// Checks whether any row, live or soft-deleted, holds this id.
    ///
    /// Licence numbers are public and never reused, so soft-deleted rows
    /// still reserve theirs.
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Application::find_by_id(id)
            .one(self.db)
            .await?
            .is_some())
    }

    /// Gets a live application by id
    pub async fn find_one(&self, id: i32) -> Result<Option<entity::application::Model>, DbErr> {
        entity::prelude::Application::find_by_id(id)
            .filter(entity::application::Column::DeletedAt.is_null())
            .one(self.db)
            .await
    }

    /// Gets all live applications, newest first
    pub async fn find_all(&self) -> Result<Vec<entity::application::Model>, DbErr> {
        entity::prelude::Application::find()
            .filter(entity::application::Column::DeletedAt.is_null())
            .order_by_desc(entity::application::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
