use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct AdvisoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> AdvisoryRepository<'a, C> {
    /// Creates a new instance of [`AdvisoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all live advisories in display order
    pub async fn find_all(&self) -> Result<Vec<entity::advisory::Model>, DbErr> {
        entity::prelude::Advisory::find()
            .filter(entity::advisory::Column::DeletedAt.is_null())
            .order_by_asc(entity::advisory::Column::OrderNo)
            .all(self.db)
            .await
    }

    /// Gets the advisories attached to every issued licence automatically
    pub async fn find_all_default(&self) -> Result<Vec<entity::advisory::Model>, DbErr> {
        entity::prelude::Advisory::find()
            .filter(entity::advisory::Column::DeletedAt.is_null())
            .filter(entity::advisory::Column::IsDefault.eq(true))
            .order_by_asc(entity::advisory::Column::OrderNo)
            .all(self.db)
            .await
    }

    /// Gets the advisories only attached when selected at issuance time
    pub async fn find_all_optional(&self) -> Result<Vec<entity::advisory::Model>, DbErr> {
        entity::prelude::Advisory::find()
            .filter(entity::advisory::Column::DeletedAt.is_null())
            .filter(entity::advisory::Column::IsDefault.eq(false))
            .order_by_asc(entity::advisory::Column::OrderNo)
            .all(self.db)
            .await
    }

    /// Gets advisories by id, preserving display order
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::advisory::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Advisory::find()
            .filter(entity::advisory::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::advisory::Column::OrderNo)
            .all(self.db)
            .await
    }
}
