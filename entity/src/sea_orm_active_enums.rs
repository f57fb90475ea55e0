use sea_orm::entity::prelude::*;

/// Lifecycle stage a species/activity set belongs to.
///
/// The same five-species, six-activity shape is recorded at four points in a
/// case's life: what was applied for, what the licence permits, what an
/// amendment changes it to, and what a return reports as carried out.
#[derive(Debug, Clone, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
pub enum Lifecycle {
    #[sea_orm(string_value = "application")]
    Application,
    #[sea_orm(string_value = "permitted")]
    Permitted,
    #[sea_orm(string_value = "amendment")]
    Amendment,
    #[sea_orm(string_value = "return")]
    Return,
}
