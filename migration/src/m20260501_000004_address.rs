use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Address::Table)
                    .if_not_exists()
                    .col(pk_auto(Address::Id))
                    .col(big_integer_null(Address::Uprn))
                    .col(string_null(Address::AddressLine1))
                    .col(string_null(Address::AddressLine2))
                    .col(string_null(Address::AddressTown))
                    .col(string_null(Address::AddressCounty))
                    .col(string(Address::Postcode))
                    .col(timestamp(Address::CreatedAt))
                    .col(timestamp_null(Address::DeletedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Address::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Address {
    Table,
    Id,
    Uprn,
    AddressLine1,
    AddressLine2,
    AddressTown,
    AddressCounty,
    Postcode,
    CreatedAt,
    DeletedAt,
}
