use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::Lifecycle;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "species_set")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lifecycle: Lifecycle,
    pub herring_gull_id: Option<i32>,
    pub black_headed_gull_id: Option<i32>,
    pub common_gull_id: Option<i32>,
    pub great_black_backed_gull_id: Option<i32>,
    pub lesser_black_backed_gull_id: Option<i32>,
    pub created_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
