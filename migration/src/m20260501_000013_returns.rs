use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20260501_000006_species_set::SpeciesSet, m20260501_000011_licence::Licence};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Returns::Table)
                    .if_not_exists()
                    .col(pk_auto(Returns::Id))
                    .col(integer(Returns::LicenceId))
                    .col(integer_null(Returns::SpeciesSetId))
                    .col(boolean(Returns::IsReportingReturn))
                    .col(boolean(Returns::IsSiteVisitReturn))
                    .col(boolean(Returns::IsFinalReturn))
                    .col(boolean_null(Returns::HasTriedPreventativeMeasures))
                    .col(text_null(Returns::PreventativeMeasuresDetails))
                    .col(date_null(Returns::SiteVisitDate))
                    .col(timestamp(Returns::CreatedAt))
                    .col(timestamp_null(Returns::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_returns_licence")
                            .from(Returns::Table, Returns::LicenceId)
                            .to(Licence::Table, Licence::ApplicationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_returns_species_set")
                            .from(Returns::Table, Returns::SpeciesSetId)
                            .to(SpeciesSet::Table, SpeciesSet::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Returns::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Returns {
    Table,
    Id,
    LicenceId,
    SpeciesSetId,
    IsReportingReturn,
    IsSiteVisitReturn,
    IsFinalReturn,
    HasTriedPreventativeMeasures,
    PreventativeMeasuresDetails,
    SiteVisitDate,
    CreatedAt,
    DeletedAt,
}
