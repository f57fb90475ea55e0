use sea_orm::TransactionTrait;

use entity::sea_orm_active_enums::Lifecycle;

use crate::{
    model::amendment::{AmendmentDto, CreateAmendmentDto},
    server::{
        data::{
            address::AddressRepository,
            advisory::AdvisoryRepository,
            amendment::AmendmentRepository,
            application::ApplicationRepository,
            condition::ConditionRepository,
            contact::ContactRepository,
            licence::LicenceRepository,
            note::NoteRepository,
            species::SpeciesSetRepository,
        },
        error::Error,
        model::{app::AppState, species::SpeciesParams},
        notify::{
            personalisation::{self, CaseParties},
            Template,
        },
    },
};

pub struct AmendmentService<'a> {
    state: &'a AppState,
}

impl<'a> AmendmentService<'a> {
    /// Creates a new instance of [`AmendmentService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Records an amendment against an issued licence.
    ///
    /// The original licence rows are never touched: the amendment carries
    /// its own species set and its own optional condition/advisory joins,
    /// and the justification lands in the application's audit notes. After
    /// commit the amendment emails go out best-effort.
    pub async fn amend(
        &self,
        application_id: i32,
        dto: &CreateAmendmentDto,
    ) -> Result<AmendmentDto, Error> {
        let licence = LicenceRepository::new(&self.state.db)
            .find_one(application_id)
            .await?
            .ok_or_else(|| {
                Error::NotFound(format!("No licence issued for application {application_id}"))
            })?;

        let txn = self.state.db.begin().await?;

        let species_set = SpeciesSetRepository::new(&txn)
            .create(Lifecycle::Amendment, &SpeciesParams::from(&dto.species))
            .await?;

        let amendment_repository = AmendmentRepository::new(&txn);
        let amendment = amendment_repository
            .create(
                licence.application_id,
                species_set.id,
                dto.period_from,
                dto.period_to,
            )
            .await?;
        amendment_repository
            .attach_conditions(amendment.id, &dto.optional_condition_ids)
            .await?;
        amendment_repository
            .attach_advisories(amendment.id, &dto.optional_advisory_ids)
            .await?;

        NoteRepository::new(&txn)
            .create(application_id, &dto.justification, &dto.created_by)
            .await?;

        txn.commit().await?;

        if let Err(e) = self.send_amendment_emails(&licence, &amendment).await {
            tracing::warn!(
                "Amended licence {} but could not send emails: {}",
                application_id,
                e
            );
        }

        Ok(AmendmentDto {
            id: amendment.id,
            licence_id: amendment.licence_id,
            period_from: amendment.period_from,
            period_to: amendment.period_to,
            condition_ids: dto.optional_condition_ids.clone(),
            advisory_ids: dto.optional_advisory_ids.clone(),
        })
    }

    /// Sends the amendment email to the holder, the applicant when
    /// distinct, and the internal licensing mailbox.
    async fn send_amendment_emails(
        &self,
        licence: &entity::licence::Model,
        amendment: &entity::amendment::Model,
    ) -> Result<(), Error> {
        let db = &self.state.db;

        let application = ApplicationRepository::new(db)
            .find_one(licence.application_id)
            .await?
            .ok_or_else(|| Error::InternalError("Application row missing".to_string()))?;

        let contact_repository = ContactRepository::new(db);
        let holder = contact_repository
            .find_one(application.licence_holder_id)
            .await?
            .ok_or_else(|| Error::InternalError("Licence holder contact missing".to_string()))?;
        let applicant = contact_repository
            .find_one(application.licence_applicant_id)
            .await?
            .ok_or_else(|| Error::InternalError("Applicant contact missing".to_string()))?;

        let site_address = AddressRepository::new(db)
            .find_one(application.site_address_id)
            .await?
            .ok_or_else(|| Error::InternalError("Site address missing".to_string()))?;

        let species = SpeciesSetRepository::new(db)
            .find_detail(amendment.species_set_id)
            .await?
            .ok_or_else(|| Error::InternalError("Amendment species set missing".to_string()))?;

        let amendment_repository = AmendmentRepository::new(db);
        let condition_ids = amendment_repository.condition_ids(amendment.id).await?;
        let optional_conditions =
            ConditionRepository::new(db).find_by_ids(&condition_ids).await?;
        let advisory_ids = amendment_repository.advisory_ids(amendment.id).await?;
        let optional_advisories =
            AdvisoryRepository::new(db).find_by_ids(&advisory_ids).await?;

        let parties = CaseParties {
            application: &application,
            licence_holder: &holder,
            site_address: &site_address,
        };
        let bundle = personalisation::amendment(
            &parties,
            amendment,
            licence,
            &species,
            &optional_conditions,
            &optional_advisories,
        );

        let notify = &self.state.notify;
        notify
            .dispatch(Template::LicenceAmended, &holder.email_address, &bundle)
            .await;
        if applicant.id != holder.id {
            notify
                .dispatch(Template::LicenceAmended, &applicant.email_address, &bundle)
                .await;
        }
        notify
            .dispatch(Template::LicenceAmended, &self.state.licensing_mailbox, &bundle)
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::DbErr;

    use entity::sea_orm_active_enums::Lifecycle;

    use crate::{
        model::{
            application::{ActivityRangesDto, SpeciesRangesDto},
            amendment::CreateAmendmentDto,
        },
        server::{
            data::{
                licence::LicenceRepository, note::NoteRepository,
                species::SpeciesSetRepository,
            },
            error::Error,
            model::species::SpeciesParams,
            util::test::{insert_application, seed_reference_data, test_setup},
        },
    };

    use super::AmendmentService;

    fn amend_dto() -> CreateAmendmentDto {
        CreateAmendmentDto {
            species: SpeciesRangesDto {
                herring_gull: Some(ActivityRangesDto {
                    remove_nests: true,
                    quantity_nests_to_remove: Some("upTo100".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            optional_condition_ids: Vec::new(),
            optional_advisory_ids: Vec::new(),
            period_from: None,
            period_to: Some(NaiveDate::from_ymd_opt(2026, 10, 31).unwrap()),
            justification: "Colony has grown since issuance".to_string(),
            created_by: "case.officer@example.gov.uk".to_string(),
        }
    }

    async fn issue_licence(
        db: &sea_orm::DatabaseConnection,
        application_id: i32,
    ) -> Result<entity::licence::Model, DbErr> {
        let species_set = SpeciesSetRepository::new(db)
            .create(Lifecycle::Permitted, &SpeciesParams::default())
            .await?;

        LicenceRepository::new(db)
            .create(
                application_id,
                NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
                species_set.id,
            )
            .await
    }

    /// Expect the amendment to leave the licence untouched and write the
    /// justification into the audit notes
    #[tokio::test]
    async fn amend_writes_note_and_new_rows() -> Result<(), DbErr> {
        let mut test = test_setup().await?;
        // Holder and applicant share a row, so two sends: holder + mailbox.
        let mock = test
            .server
            .mock("POST", "/v2/notifications/email")
            .with_status(201)
            .with_body("{}")
            .expect(2)
            .create_async()
            .await;

        seed_reference_data(&test.state.db).await?;
        let application = insert_application(&test.state.db, 123456, "holder@example.com").await?;
        let licence = issue_licence(&test.state.db, application.id).await?;

        let service = AmendmentService::new(&test.state);
        let amendment = service.amend(application.id, &amend_dto()).await.unwrap();

        assert_eq!(amendment.licence_id, application.id);

        // The licence's own species set is untouched.
        let unchanged = LicenceRepository::new(&test.state.db)
            .find_one(application.id)
            .await?
            .unwrap();
        assert_eq!(unchanged.species_set_id, licence.species_set_id);

        let notes = NoteRepository::new(&test.state.db)
            .find_all_for_application(application.id)
            .await?;
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].note, "Colony has grown since issuance");

        mock.assert_async().await;

        Ok(())
    }

    /// Expect NotFound when amending an application without a licence
    #[tokio::test]
    async fn amend_requires_licence() -> Result<(), DbErr> {
        let test = test_setup().await?;
        let application = insert_application(&test.state.db, 123457, "holder@example.com").await?;

        let service = AmendmentService::new(&test.state);
        let result = service.amend(application.id, &amend_dto()).await;

        assert!(matches!(result, Err(Error::NotFound(_))));

        Ok(())
    }
}
