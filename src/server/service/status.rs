use sea_orm::DatabaseConnection;

use crate::{
    model::status::CaseStatus,
    server::{
        data::{
            amendment::AmendmentRepository,
            application::ApplicationRepository,
            assessment::AssessmentRepository,
            case_record::{RevocationRepository, WithdrawalRepository},
            licence::LicenceRepository,
        },
        error::Error,
    },
};

pub struct StatusService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StatusService<'a> {
    /// Creates a new instance of [`StatusService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Derives the case status from which dependent rows exist.
    ///
    /// Precedence: Revoked, Withdrawn, Amended, Issued, Assessed, Received.
    /// Records are append-only, so a later state never removes the rows of
    /// an earlier one.
    pub async fn status(&self, application_id: i32) -> Result<CaseStatus, Error> {
        if ApplicationRepository::new(self.db)
            .find_one(application_id)
            .await?
            .is_none()
        {
            return Err(Error::NotFound(format!(
                "Application {application_id} not found"
            )));
        }

        if RevocationRepository::new(self.db).exists(application_id).await? {
            return Ok(CaseStatus::Revoked);
        }
        if WithdrawalRepository::new(self.db).exists(application_id).await? {
            return Ok(CaseStatus::Withdrawn);
        }
        if AmendmentRepository::new(self.db)
            .any_for_licence(application_id)
            .await?
        {
            return Ok(CaseStatus::Amended);
        }
        if LicenceRepository::new(self.db).exists(application_id).await? {
            return Ok(CaseStatus::Issued);
        }
        if AssessmentRepository::new(self.db).exists(application_id).await? {
            return Ok(CaseStatus::Assessed);
        }

        Ok(CaseStatus::Received)
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::DbErr;

    use entity::sea_orm_active_enums::Lifecycle;

    use crate::{
        model::{application::AssessmentDto, status::CaseStatus},
        server::{
            data::{
                amendment::AmendmentRepository,
                assessment::AssessmentRepository,
                case_record::{RevocationRepository, WithdrawalRepository},
                licence::LicenceRepository,
                species::SpeciesSetRepository,
            },
            error::Error,
            model::species::SpeciesParams,
            util::test::{insert_application, setup_db},
        },
    };

    use super::StatusService;

    /// Expect the status to walk the precedence as rows accumulate
    #[tokio::test]
    async fn status_follows_row_presence() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let application = insert_application(&db, 123456, "holder@example.com").await?;
        let service = StatusService::new(&db);

        assert_eq!(service.status(application.id).await.unwrap(), CaseStatus::Received);

        AssessmentRepository::new(&db)
            .create(application.id, &AssessmentDto::default())
            .await?;
        assert_eq!(service.status(application.id).await.unwrap(), CaseStatus::Assessed);

        let species_set = SpeciesSetRepository::new(&db)
            .create(Lifecycle::Permitted, &SpeciesParams::default())
            .await?;
        LicenceRepository::new(&db)
            .create(
                application.id,
                NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
                species_set.id,
            )
            .await?;
        assert_eq!(service.status(application.id).await.unwrap(), CaseStatus::Issued);

        let amended_set = SpeciesSetRepository::new(&db)
            .create(Lifecycle::Amendment, &SpeciesParams::default())
            .await?;
        AmendmentRepository::new(&db)
            .create(application.id, amended_set.id, None, None)
            .await?;
        assert_eq!(service.status(application.id).await.unwrap(), CaseStatus::Amended);

        WithdrawalRepository::new(&db)
            .create(application.id, "No longer needed", "holder@example.com")
            .await?;
        assert_eq!(service.status(application.id).await.unwrap(), CaseStatus::Withdrawn);

        RevocationRepository::new(&db)
            .create(application.id, "Licence misused", "case.officer@example.gov.uk")
            .await?;
        assert_eq!(service.status(application.id).await.unwrap(), CaseStatus::Revoked);

        Ok(())
    }

    /// Expect NotFound for an unknown application
    #[tokio::test]
    async fn status_unknown_application() -> Result<(), DbErr> {
        let db = setup_db().await?;
        let service = StatusService::new(&db);

        assert!(matches!(service.status(999999).await, Err(Error::NotFound(_))));

        Ok(())
    }
}
