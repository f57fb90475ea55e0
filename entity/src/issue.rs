use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "issue")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub aggression: bool,
    pub dive_bombing: bool,
    pub noise: bool,
    pub droppings: bool,
    pub nesting_material: bool,
    pub at_height_aggression: bool,
    pub other: bool,
    pub issue_details: Option<String>,
    pub site_used_for: Option<String>,
    pub created_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
