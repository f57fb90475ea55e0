use sea_orm::entity::prelude::*;

use crate::sea_orm_active_enums::Lifecycle;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "activity")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub lifecycle: Lifecycle,
    pub remove_nests: bool,
    pub quantity_nests_to_remove: Option<i32>,
    pub egg_destruction: bool,
    pub quantity_nests_where_eggs_destroyed: Option<i32>,
    pub chicks_to_rescue_centre: bool,
    pub quantity_chicks_to_rescue: Option<i32>,
    pub chicks_relocate_nearby: bool,
    pub quantity_chicks_to_relocate: Option<i32>,
    pub kill_chicks: bool,
    pub quantity_chicks_to_kill: Option<i32>,
    pub kill_adults: bool,
    pub quantity_adults_to_kill: Option<i32>,
    pub carried_out_on: Option<Date>,
    pub created_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
