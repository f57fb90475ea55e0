use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "assessment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub application_id: i32,
    pub test_one_assessment: Option<String>,
    pub test_one_decision: Option<bool>,
    pub test_two_assessment: Option<String>,
    pub test_two_decision: Option<bool>,
    pub test_three_assessment: Option<String>,
    pub test_three_decision: Option<bool>,
    pub decision: Option<bool>,
    pub refusal_reason: Option<String>,
    pub created_at: DateTime,
    pub deleted_at: Option<DateTime>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
