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
                    .table(Assessment::Table)
                    .if_not_exists()
                    .col(integer(Assessment::ApplicationId).primary_key())
                    .col(text_null(Assessment::TestOneAssessment))
                    .col(boolean_null(Assessment::TestOneDecision))
                    .col(text_null(Assessment::TestTwoAssessment))
                    .col(boolean_null(Assessment::TestTwoDecision))
                    .col(text_null(Assessment::TestThreeAssessment))
                    .col(boolean_null(Assessment::TestThreeDecision))
                    .col(boolean_null(Assessment::Decision))
                    .col(text_null(Assessment::RefusalReason))
                    .col(timestamp(Assessment::CreatedAt))
                    .col(timestamp_null(Assessment::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_assessment_application")
                            .from(Assessment::Table, Assessment::ApplicationId)
                            .to(Application::Table, Application::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Assessment::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Assessment {
    Table,
    ApplicationId,
    TestOneAssessment,
    TestOneDecision,
    TestTwoAssessment,
    TestTwoDecision,
    TestThreeAssessment,
    TestThreeDecision,
    Decision,
    RefusalReason,
    CreatedAt,
    DeletedAt,
}
