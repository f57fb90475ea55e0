use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
    QueryOrder,
};

pub struct NoteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> NoteRepository<'a, C> {
    /// Creates a new instance of [`NoteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates an audit note against an application
    pub async fn create(
        &self,
        application_id: i32,
        note: &str,
        created_by: &str,
    ) -> Result<entity::note::Model, DbErr> {
        let model = entity::note::ActiveModel {
            application_id: ActiveValue::Set(application_id),
            note: ActiveValue::Set(note.to_string()),
            created_by: ActiveValue::Set(created_by.to_string()),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Gets an application's live audit trail, oldest first
    pub async fn find_all_for_application(
        &self,
        application_id: i32,
    ) -> Result<Vec<entity::note::Model>, DbErr> {
        entity::prelude::Note::find()
            .filter(entity::note::Column::ApplicationId.eq(application_id))
            .filter(entity::note::Column::DeletedAt.is_null())
            .order_by_asc(entity::note::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
