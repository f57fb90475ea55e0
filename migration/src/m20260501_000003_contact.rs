use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Contact::Table)
                    .if_not_exists()
                    .col(pk_auto(Contact::Id))
                    .col(string(Contact::Name))
                    .col(string_null(Contact::Organisation))
                    .col(string(Contact::EmailAddress))
                    .col(string_null(Contact::PhoneNumber))
                    .col(timestamp(Contact::CreatedAt))
                    .col(timestamp_null(Contact::DeletedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Contact::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Contact {
    Table,
    Id,
    Name,
    Organisation,
    EmailAddress,
    PhoneNumber,
    CreatedAt,
    DeletedAt,
}
