use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260501_000001_condition::Condition, m20260501_000002_advisory::Advisory,
    m20260501_000006_species_set::SpeciesSet, m20260501_000009_application::Application,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Licence::Table)
                    .if_not_exists()
                    .col(integer(Licence::ApplicationId).primary_key())
                    .col(date(Licence::PeriodFrom))
                    .col(date(Licence::PeriodTo))
                    .col(integer(Licence::SpeciesSetId))
                    .col(timestamp(Licence::CreatedAt))
                    .col(timestamp_null(Licence::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_licence_application")
                            .from(Licence::Table, Licence::ApplicationId)
                            .to(Application::Table, Application::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_licence_species_set")
                            .from(Licence::Table, Licence::SpeciesSetId)
                            .to(SpeciesSet::Table, SpeciesSet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LicenceCondition::Table)
                    .if_not_exists()
                    .col(pk_auto(LicenceCondition::Id))
                    .col(integer(LicenceCondition::LicenceId))
                    .col(integer(LicenceCondition::ConditionId))
                    .col(timestamp(LicenceCondition::CreatedAt))
                    .col(timestamp_null(LicenceCondition::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_licence_condition_licence")
                            .from(LicenceCondition::Table, LicenceCondition::LicenceId)
                            .to(Licence::Table, Licence::ApplicationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_licence_condition_condition")
                            .from(LicenceCondition::Table, LicenceCondition::ConditionId)
                            .to(Condition::Table, Condition::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(LicenceAdvisory::Table)
                    .if_not_exists()
                    .col(pk_auto(LicenceAdvisory::Id))
                    .col(integer(LicenceAdvisory::LicenceId))
                    .col(integer(LicenceAdvisory::AdvisoryId))
                    .col(timestamp(LicenceAdvisory::CreatedAt))
                    .col(timestamp_null(LicenceAdvisory::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_licence_advisory_licence")
                            .from(LicenceAdvisory::Table, LicenceAdvisory::LicenceId)
                            .to(Licence::Table, Licence::ApplicationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_licence_advisory_advisory")
                            .from(LicenceAdvisory::Table, LicenceAdvisory::AdvisoryId)
                            .to(Advisory::Table, Advisory::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LicenceAdvisory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(LicenceCondition::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Licence::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Licence {
    Table,
    ApplicationId,
    PeriodFrom,
    PeriodTo,
    SpeciesSetId,
    CreatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum LicenceCondition {
    Table,
    Id,
    LicenceId,
    ConditionId,
    CreatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum LicenceAdvisory {
    Table,
    Id,
    LicenceId,
    AdvisoryId,
    CreatedAt,
    DeletedAt,
}
