use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "licence")]
pub struct Model {
    /// 1:1 with the application it was issued for.
    #[sea_orm(primary_key, auto_increment = false)]
    pub application_id: i32,
    pub period_from: Date,
    pub period_to: Date,
    pub species_set_id: i32,
    pub created_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
