use sea_orm::entity::prelude::*;

/// Tri-state mitigation record; each column holds `Tried`, `Intend` or `No`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "measure")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub prevent_nesting: String,
    pub remove_old_nests: String,
    pub remove_litter: String,
    pub human_disturbance: String,
    pub scaring_devices: String,
    pub hawking: String,
    pub disturbance_by_dogs: String,
    pub created_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
