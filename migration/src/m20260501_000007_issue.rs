use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Issue::Table)
                    .if_not_exists()
                    .col(pk_auto(Issue::Id))
                    .col(boolean(Issue::Aggression))
                    .col(boolean(Issue::DiveBombing))
                    .col(boolean(Issue::Noise))
                    .col(boolean(Issue::Droppings))
                    .col(boolean(Issue::NestingMaterial))
                    .col(boolean(Issue::AtHeightAggression))
                    .col(boolean(Issue::Other))
                    .col(text_null(Issue::IssueDetails))
                    .col(text_null(Issue::SiteUsedFor))
                    .col(timestamp(Issue::CreatedAt))
                    .col(timestamp_null(Issue::DeletedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Issue::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Issue {
    Table,
    Id,
    Aggression,
    DiveBombing,
    Noise,
    Droppings,
    NestingMaterial,
    AtHeightAggression,
    Other,
    IssueDetails,
    SiteUsedFor,
    CreatedAt,
    DeletedAt,
}
