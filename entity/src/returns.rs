use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "returns")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub licence_id: i32,
    /// Populated only for reporting returns.
    pub species_set_id: Option<i32>,
    pub is_reporting_return: bool,
    pub is_site_visit_return: bool,
    pub is_final_return: bool,
    pub has_tried_preventative_measures: Option<bool>,
    pub preventative_measures_details: Option<String>,
    pub site_visit_date: Option<Date>,
    pub created_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
