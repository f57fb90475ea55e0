use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Measure::Table)
                    .if_not_exists()
                    .col(pk_auto(Measure::Id))
                    .col(string_len(Measure::PreventNesting, 8))
                    .col(string_len(Measure::RemoveOldNests, 8))
                    .col(string_len(Measure::RemoveLitter, 8))
                    .col(string_len(Measure::HumanDisturbance, 8))
                    .col(string_len(Measure::ScaringDevices, 8))
                    .col(string_len(Measure::Hawking, 8))
                    .col(string_len(Measure::DisturbanceByDogs, 8))
                    .col(timestamp(Measure::CreatedAt))
                    .col(timestamp_null(Measure::DeletedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Measure::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Measure {
    Table,
    Id,
    PreventNesting,
    RemoveOldNests,
    RemoveLitter,
    HumanDisturbance,
    ScaringDevices,
    Hawking,
    DisturbanceByDogs,
    CreatedAt,
    DeletedAt,
}
