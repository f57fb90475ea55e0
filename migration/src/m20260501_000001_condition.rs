use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Condition::Table)
                    .if_not_exists()
                    .col(pk_auto(Condition::Id))
                    .col(string(Condition::Category))
                    .col(text(Condition::Text))
                    .col(boolean(Condition::IsDefault))
                    .col(integer(Condition::OrderNo))
                    .col(timestamp(Condition::CreatedAt))
                    .col(timestamp_null(Condition::DeletedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Condition::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Condition {
    Table,
    Id,
    Category,
    Text,
    IsDefault,
    OrderNo,
    CreatedAt,
    DeletedAt,
}
