use chrono::{NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryOrder,
    QueryFilter,
};

/// Values for a new returns row; `species_set_id` is only ever present for
/// reporting returns.
pub struct NewReturn {
    pub licence_id: i32,
    pub species_set_id: Option<i32>,
    pub is_reporting_return: bool,
    pub is_site_visit_return: bool,
    pub is_final_return: bool,
    pub has_tried_preventative_measures: Option<bool>,
    pub preventative_measures_details: Option<String>,
    pub site_visit_date: Option<NaiveDate>,
}

pub struct ReturnsRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReturnsRepository<'a, C> {
    /// Creates a new instance of [`ReturnsRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a returns record
    pub async fn create(&self, new: NewReturn) -> Result<entity::returns::Model, DbErr> {
        let model = entity::returns::ActiveModel {
            licence_id: ActiveValue::Set(new.licence_id),
            species_set_id: ActiveValue::Set(new.species_set_id),
            is_reporting_return: ActiveValue::Set(new.is_reporting_return),
            is_site_visit_return: ActiveValue::Set(new.is_site_visit_return),
            is_final_return: ActiveValue::Set(new.is_final_return),
            has_tried_preventative_measures: ActiveValue::Set(
                new.has_tried_preventative_measures,
            ),
            preventative_measures_details: ActiveValue::Set(
                new.preventative_measures_details,
            ),
            site_visit_date: ActiveValue::Set(new.site_visit_date),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        model.insert(self.db).await
    }

    /// Gets a returns record by id
    pub async fn find_one(&self, id: i32) -> Result<Option<entity::returns::Model>, DbErr> {
        entity::prelude::Returns::find_by_id(id).one(self.db).await
    }

    /// Gets every return submitted against a licence, oldest first.
    ///
    /// History read path: soft-deleted rows are included deliberately.
    pub async fn find_all_for_licence(
        &self,
        licence_id: i32,
    ) -> Result<Vec<entity::returns::Model>, DbErr> {
        entity::prelude::Returns::find()
            .filter(entity::returns::Column::LicenceId.eq(licence_id))
            .order_by_asc(entity::returns::Column::CreatedAt)
            .all(self.db)
            .await
    }
}
