use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260501_000001_condition::Condition, m20260501_000002_advisory::Advisory,
    m20260501_000006_species_set::SpeciesSet, m20260501_000011_licence::Licence,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Amendment::Table)
                    .if_not_exists()
                    .col(pk_auto(Amendment::Id))
                    .col(integer(Amendment::LicenceId))
                    .col(integer(Amendment::SpeciesSetId))
                    .col(date_null(Amendment::PeriodFrom))
                    .col(date_null(Amendment::PeriodTo))
                    .col(timestamp(Amendment::CreatedAt))
                    .col(timestamp_null(Amendment::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amendment_licence")
                            .from(Amendment::Table, Amendment::LicenceId)
                            .to(Licence::Table, Licence::ApplicationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amendment_species_set")
                            .from(Amendment::Table, Amendment::SpeciesSetId)
                            .to(SpeciesSet::Table, SpeciesSet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AmendCondition::Table)
                    .if_not_exists()
                    .col(pk_auto(AmendCondition::Id))
                    .col(integer(AmendCondition::AmendmentId))
                    .col(integer(AmendCondition::ConditionId))
                    .col(timestamp(AmendCondition::CreatedAt))
                    .col(timestamp_null(AmendCondition::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amend_condition_amendment")
                            .from(AmendCondition::Table, AmendCondition::AmendmentId)
                            .to(Amendment::Table, Amendment::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amend_condition_condition")
                            .from(AmendCondition::Table, AmendCondition::ConditionId)
                            .to(Condition::Table, Condition::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AmendAdvisory::Table)
                    .if_not_exists()
                    .col(pk_auto(AmendAdvisory::Id))
                    .col(integer(AmendAdvisory::AmendmentId))
                    .col(integer(AmendAdvisory::AdvisoryId))
                    .col(timestamp(AmendAdvisory::CreatedAt))
                    .col(timestamp_null(AmendAdvisory::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amend_advisory_amendment")
                            .from(AmendAdvisory::Table, AmendAdvisory::AmendmentId)
                            .to(Amendment::Table, Amendment::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_amend_advisory_advisory")
                            .from(AmendAdvisory::Table, AmendAdvisory::AdvisoryId)
                            .to(Advisory::Table, Advisory::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AmendAdvisory::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AmendCondition::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Amendment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Amendment {
    Table,
    Id,
    LicenceId,
    SpeciesSetId,
    PeriodFrom,
    PeriodTo,
    CreatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum AmendCondition {
    Table,
    Id,
    AmendmentId,
    ConditionId,
    CreatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum AmendAdvisory {
    Table,
    Id,
    AmendmentId,
    AdvisoryId,
    CreatedAt,
    DeletedAt,
}
