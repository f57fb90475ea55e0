use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Advisory::Table)
                    .if_not_exists()
                    .col(pk_auto(Advisory::Id))
                    .col(string(Advisory::Category))
                    .col(text(Advisory::Text))
                    .col(boolean(Advisory::IsDefault))
                    .col(integer(Advisory::OrderNo))
                    .col(timestamp(Advisory::CreatedAt))
                    .col(timestamp_null(Advisory::DeletedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Advisory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Advisory {
    Table,
    Id,
    Category,
    Text,
    IsDefault,
    OrderNo,
    CreatedAt,
    DeletedAt,
}
