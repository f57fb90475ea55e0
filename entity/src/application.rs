use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "application")]
pub struct Model {
    /// Random, collision-checked public licence number; never auto-increment.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    pub licence_holder_id: i32,
    pub licence_applicant_id: i32,
    pub licence_holder_address_id: i32,
    pub site_address_id: i32,
    pub species_set_id: i32,
    pub issue_id: i32,
    pub measure_id: i32,
    pub created_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
