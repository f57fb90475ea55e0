use sea_orm::{ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder};

pub struct ConditionRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ConditionRepository<'a, C> {
    /// Creates a new instance of [`ConditionRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all live conditions in display order
    pub async fn find_all(&self) -> Result<Vec<entity::condition::Model>, DbErr> {
        entity::prelude::Condition::find()
            .filter(entity::condition::Column::DeletedAt.is_null())
            .order_by_asc(entity::condition::Column::OrderNo)
            .all(self.db)
            .await
    }

    /// Gets the conditions attached to every issued licence automatically
    pub async fn find_all_default(&self) -> Result<Vec<entity::condition::Model>, DbErr> {
        entity::prelude::Condition::find()
            .filter(entity::condition::Column::DeletedAt.is_null())
            .filter(entity::condition::Column::IsDefault.eq(true))
            .order_by_asc(entity::condition::Column::OrderNo)
            .all(self.db)
            .await
    }

    /// Gets the conditions only attached when selected at issuance time
    pub async fn find_all_optional(&self) -> Result<Vec<entity::condition::Model>, DbErr> {
        entity::prelude::Condition::find()
            .filter(entity::condition::Column::DeletedAt.is_null())
            .filter(entity::condition::Column::IsDefault.eq(false))
            .order_by_asc(entity::condition::Column::OrderNo)
            .all(self.db)
            .await
    }

    /// Gets conditions by id, preserving display order
    pub async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<entity::condition::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Condition::find()
            .filter(entity::condition::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::condition::Column::OrderNo)
            .all(self.db)
            .await
    }
}
