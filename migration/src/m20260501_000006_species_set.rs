use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260501_000005_activity::Activity;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpeciesSet::Table)
                    .if_not_exists()
                    .col(pk_auto(SpeciesSet::Id))
                    .col(string_len(SpeciesSet::Lifecycle, 16))
                    .col(integer_null(SpeciesSet::HerringGullId))
                    .col(integer_null(SpeciesSet::BlackHeadedGullId))
                    .col(integer_null(SpeciesSet::CommonGullId))
                    .col(integer_null(SpeciesSet::GreatBlackBackedGullId))
                    .col(integer_null(SpeciesSet::LesserBlackBackedGullId))
                    .col(timestamp(SpeciesSet::CreatedAt))
                    .col(timestamp_null(SpeciesSet::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_species_set_herring_gull")
                            .from(SpeciesSet::Table, SpeciesSet::HerringGullId)
                            .to(Activity::Table, Activity::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_species_set_black_headed_gull")
                            .from(SpeciesSet::Table, SpeciesSet::BlackHeadedGullId)
                            .to(Activity::Table, Activity::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_species_set_common_gull")
                            .from(SpeciesSet::Table, SpeciesSet::CommonGullId)
                            .to(Activity::Table, Activity::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_species_set_great_black_backed_gull")
                            .from(SpeciesSet::Table, SpeciesSet::GreatBlackBackedGullId)
                            .to(Activity::Table, Activity::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_species_set_lesser_black_backed_gull")
                            .from(SpeciesSet::Table, SpeciesSet::LesserBlackBackedGullId)
                            .to(Activity::Table, Activity::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpeciesSet::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SpeciesSet {
    Table,
    Id,
    Lifecycle,
    HerringGullId,
    BlackHeadedGullId,
    CommonGullId,
    GreatBlackBackedGullId,
    LesserBlackBackedGullId,
    CreatedAt,
    DeletedAt,
}
