//! Terminal-state records.
//!
//! A withdrawal or revocation row existing is itself the status signal;
//! there is no status column anywhere to update.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

pub struct WithdrawalRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WithdrawalRepository<'a, C> {
    /// Creates a new instance of [`WithdrawalRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records the applicant's withdrawal of the application
    pub async fn create(
        &self,
        application_id: i32,
        reason: &str,
        created_by: &str,
    ) -> Result<entity::withdrawal::Model, DbErr> {
        let model = entity::withdrawal::ActiveModel {
            application_id: ActiveValue::Set(application_id),
            reason: ActiveValue::Set(reason.to_string()),
            created_by: ActiveValue::Set(created_by.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Checks whether the application has been withdrawn
    pub async fn exists(&self, application_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Withdrawal::find()
            .filter(entity::withdrawal::Column::ApplicationId.eq(application_id))
            .one(self.db)
            .await?
            .is_some())
    }
}

pub struct RevocationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> RevocationRepository<'a, C> {
    /// Creates a new instance of [`RevocationRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Records the authority's revocation of the licence
    pub async fn create(
        &self,
        application_id: i32,
        reason: &str,
        created_by: &str,
    ) -> Result<entity::revocation::Model, DbErr> {
        let model = entity::revocation::ActiveModel {
            application_id: ActiveValue::Set(application_id),
            reason: ActiveValue::Set(reason.to_string()),
            created_by: ActiveValue::Set(created_by.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Checks whether the licence has been revoked
    pub async fn exists(&self, application_id: i32) -> Result<bool, DbErr> {
        Ok(entity::prelude::Revocation::find()
            .filter(entity::revocation::Column::ApplicationId.eq(application_id))
            .one(self.db)
            .await?
            .is_some())
    }
}
