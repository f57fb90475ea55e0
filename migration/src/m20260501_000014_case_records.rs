use sea_orm_migration::{prelude::*, schema::*};

use crate::m20260501_000009_application::Application;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Note::Table)
                    .if_not_exists()
                    .col(pk_auto(Note::Id))
                    .col(integer(Note::ApplicationId))
                    .col(text(Note::Note))
                    .col(string(Note::CreatedBy))
                    .col(timestamp(Note::CreatedAt))
                    .col(timestamp_null(Note::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_note_application")
                            .from(Note::Table, Note::ApplicationId)
                            .to(Application::Table, Application::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Withdrawal::Table)
                    .if_not_exists()
                    .col(pk_auto(Withdrawal::Id))
                    .col(integer(Withdrawal::ApplicationId))
                    .col(text(Withdrawal::Reason))
                    .col(string(Withdrawal::CreatedBy))
                    .col(timestamp(Withdrawal::CreatedAt))
                    .col(timestamp_null(Withdrawal::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_withdrawal_application")
                            .from(Withdrawal::Table, Withdrawal::ApplicationId)
                            .to(Application::Table, Application::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Revocation::Table)
                    .if_not_exists()
                    .col(pk_auto(Revocation::Id))
                    .col(integer(Revocation::ApplicationId))
                    .col(text(Revocation::Reason))
                    .col(string(Revocation::CreatedBy))
                    .col(timestamp(Revocation::CreatedAt))
                    .col(timestamp_null(Revocation::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_revocation_application")
                            .from(Revocation::Table, Revocation::ApplicationId)
                            .to(Application::Table, Application::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Revocation::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Withdrawal::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Note::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Note {
    Table,
    Id,
    ApplicationId,
    Note,
    CreatedBy,
    CreatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum Withdrawal {
    Table,
    Id,
    ApplicationId,
    Reason,
    CreatedBy,
    CreatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
pub enum Revocation {
    Table,
    Id,
    ApplicationId,
    Reason,
    CreatedBy,
    CreatedAt,
    DeletedAt,
}
