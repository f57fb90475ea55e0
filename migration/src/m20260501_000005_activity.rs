use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Activity::Table)
                    .if_not_exists()
                    .col(pk_auto(Activity::Id))
                    .col(string_len(Activity::Lifecycle, 16))
                    .col(boolean(Activity::RemoveNests))
                    .col(integer_null(Activity::QuantityNestsToRemove))
                    .col(boolean(Activity::EggDestruction))
                    .col(integer_null(Activity::QuantityNestsWhereEggsDestroyed))
                    .col(boolean(Activity::ChicksToRescueCentre))
                    .col(integer_null(Activity::QuantityChicksToRescue))
                    .col(boolean(Activity::ChicksRelocateNearby))
                    .col(integer_null(Activity::QuantityChicksToRelocate))
                    .col(boolean(Activity::KillChicks))
                    .col(integer_null(Activity::QuantityChicksToKill))
                    .col(boolean(Activity::KillAdults))
                    .col(integer_null(Activity::QuantityAdultsToKill))
                    .col(date_null(Activity::CarriedOutOn))
                    .col(timestamp(Activity::CreatedAt))
                    .col(timestamp_null(Activity::DeletedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Activity::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Activity {
    Table,
    Id,
    Lifecycle,
    RemoveNests,
    QuantityNestsToRemove,
    EggDestruction,
    QuantityNestsWhereEggsDestroyed,
    ChicksToRescueCentre,
    QuantityChicksToRescue,
    ChicksRelocateNearby,
    QuantityChicksToRelocate,
    KillChicks,
    QuantityChicksToKill,
    KillAdults,
    QuantityAdultsToKill,
    CarriedOutOn,
    CreatedAt,
    DeletedAt,
}
