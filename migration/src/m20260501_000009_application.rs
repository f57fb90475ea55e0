use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20260501_000003_contact::Contact, m20260501_000004_address::Address,
    m20260501_000006_species_set::SpeciesSet, m20260501_000007_issue::Issue,
    m20260501_000008_measure::Measure,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Application::Table)
                    .if_not_exists()
                    // Primary key is the randomly generated public licence
                    // number, so no auto-increment here.
                    .col(integer(Application::Id).primary_key())
                    .col(integer(Application::LicenceHolderId))
                    .col(integer(Application::LicenceApplicantId))
                    .col(integer(Application::LicenceHolderAddressId))
                    .col(integer(Application::SiteAddressId))
                    .col(integer(Application::SpeciesSetId))
                    .col(integer(Application::IssueId))
                    .col(integer(Application::MeasureId))
                    .col(timestamp(Application::CreatedAt))
                    .col(timestamp_null(Application::DeletedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_licence_holder")
                            .from(Application::Table, Application::LicenceHolderId)
                            .to(Contact::Table, Contact::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_licence_applicant")
                            .from(Application::Table, Application::LicenceApplicantId)
                            .to(Contact::Table, Contact::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_licence_holder_address")
                            .from(Application::Table, Application::LicenceHolderAddressId)
                            .to(Address::Table, Address::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_site_address")
                            .from(Application::Table, Application::SiteAddressId)
                            .to(Address::Table, Address::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_species_set")
                            .from(Application::Table, Application::SpeciesSetId)
                            .to(SpeciesSet::Table, SpeciesSet::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_issue")
                            .from(Application::Table, Application::IssueId)
                            .to(Issue::Table, Issue::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_application_measure")
                            .from(Application::Table, Application::MeasureId)
                            .to(Measure::Table, Measure::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Application::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Application {
    Table,
    Id,
    LicenceHolderId,
    LicenceApplicantId,
    LicenceHolderAddressId,
    SiteAddressId,
    SpeciesSetId,
    IssueId,
    MeasureId,
    CreatedAt,
    DeletedAt,
}
