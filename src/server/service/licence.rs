use sea_orm::TransactionTrait;

use entity::sea_orm_active_enums::Lifecycle;

use crate::{
    model::licence::{IssueLicenceDto, LicenceDto},
    server::{
        data::{
            address::AddressRepository,
            advisory::AdvisoryRepository,
            application::ApplicationRepository,
            condition::ConditionRepository,
            contact::ContactRepository,
            licence::LicenceRepository,
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

pub struct LicenceService<'a> {
    state: &'a AppState,
}

impl<'a> LicenceService<'a> {
    /// Creates a new instance of [`LicenceService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Issues a licence against an application.
    ///
    /// In one transaction: the permitted species set, the licence row, and a
    /// join row for every default condition and advisory plus each selected
    /// optional one. The joined set is fixed at issuance and never
    /// recomputed. After commit the issuance emails go out best-effort.
    pub async fn issue(
        &self,
        application_id: i32,
        dto: &IssueLicenceDto,
    ) -> Result<LicenceDto, Error> {
        let application = ApplicationRepository::new(&self.state.db)
            .find_one(application_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Application {application_id} not found")))?;

        let txn = self.state.db.begin().await?;

        let species_set = SpeciesSetRepository::new(&txn)
            .create(Lifecycle::Permitted, &SpeciesParams::from(&dto.species))
            .await?;

        let licence_repository = LicenceRepository::new(&txn);
        let licence = licence_repository
            .create(application_id, dto.period_from, dto.period_to, species_set.id)
            .await?;

        let mut condition_ids: Vec<i32> = ConditionRepository::new(&txn)
            .find_all_default()
            .await?
            .iter()
            .map(|c| c.id)
            .collect();
        condition_ids.extend(&dto.optional_condition_ids);
        licence_repository
            .attach_conditions(licence.application_id, &condition_ids)
            .await?;

        let mut advisory_ids: Vec<i32> = AdvisoryRepository::new(&txn)
            .find_all_default()
            .await?
            .iter()
            .map(|a| a.id)
            .collect();
        advisory_ids.extend(&dto.optional_advisory_ids);
        licence_repository
            .attach_advisories(licence.application_id, &advisory_ids)
            .await?;

        txn.commit().await?;

        if let Err(e) = self.send_issuance_emails(&application).await {
            tracing::warn!("Issued licence {} but could not send emails: {}", application_id, e);
        }

        Ok(LicenceDto {
            application_id: licence.application_id,
            period_from: licence.period_from,
            period_to: licence.period_to,
            condition_ids,
            advisory_ids,
        })
    }

    /// Re-derives the issuance bundle and re-sends the issuance emails
    /// without persisting anything.
    pub async fn resend_emails(&self, application_id: i32) -> Result<(), Error> {
        let application = ApplicationRepository::new(&self.state.db)
            .find_one(application_id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Application {application_id} not found")))?;

        self.send_issuance_emails(&application).await
    }

    /// Sends the issuance email to the holder, the applicant when distinct,
    /// and the internal licensing mailbox.
    async fn send_issuance_emails(
        &self,
        application: &entity::application::Model,
    ) -> Result<(), Error> {
        let db = &self.state.db;

        let licence_repository = LicenceRepository::new(db);
        let licence = licence_repository
            .find_one(application.id)
            .await?
            .ok_or_else(|| {
                Error::NotFound(format!("No licence issued for application {}", application.id))
            })?;

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
            .find_detail(licence.species_set_id)
            .await?
            .ok_or_else(|| Error::InternalError("Permitted species set missing".to_string()))?;

        let condition_ids = licence_repository.condition_ids(licence.application_id).await?;
        let conditions = ConditionRepository::new(db).find_by_ids(&condition_ids).await?;
        let (default_conditions, optional_conditions): (Vec<_>, Vec<_>) =
            conditions.into_iter().partition(|c| c.is_default);

        let advisory_ids = licence_repository.advisory_ids(licence.application_id).await?;
        let advisories = AdvisoryRepository::new(db).find_by_ids(&advisory_ids).await?;
        let (default_advisories, optional_advisories): (Vec<_>, Vec<_>) =
            advisories.into_iter().partition(|a| a.is_default);

        let parties = CaseParties {
            application,
            licence_holder: &holder,
            site_address: &site_address,
        };
        let bundle = personalisation::licence_issuance(
            &parties,
            &licence,
            &species,
            &default_conditions,
            &optional_conditions,
            &default_advisories,
            &optional_advisories,
        );

        let notify = &self.state.notify;
        notify
            .dispatch(Template::LicenceIssued, &holder.email_address, &bundle)
            .await;
        if applicant.id != holder.id {
            notify
                .dispatch(Template::LicenceIssued, &applicant.email_address, &bundle)
                .await;
        }
        notify
            .dispatch(Template::LicenceIssued, &self.state.licensing_mailbox, &bundle)
            .await;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use sea_orm::DbErr;

    use crate::{
        model::{
            application::{ActivityRangesDto, SpeciesRangesDto},
            licence::IssueLicenceDto,
        },
        server::{
            data::licence::LicenceRepository,
            error::Error,
            util::test::{insert_application, seed_reference_data, test_setup},
        },
    };

    use super::LicenceService;

    fn issue_dto() -> IssueLicenceDto {
        IssueLicenceDto {
            period_from: NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
            period_to: NaiveDate::from_ymd_opt(2026, 9, 30).unwrap(),
            species: SpeciesRangesDto {
                herring_gull: Some(ActivityRangesDto {
                    remove_nests: true,
                    quantity_nests_to_remove: Some("upTo50".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            optional_condition_ids: Vec::new(),
            optional_advisory_ids: Vec::new(),
        }
    }

    /// Expect an issuance with no optional selections to join exactly the
    /// default condition set, and to email the holder and the mailbox
    #[tokio::test]
    async fn issue_attaches_exactly_defaults() -> Result<(), DbErr> {
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

        let seeded = seed_reference_data(&test.state.db).await?;
        let application = insert_application(&test.state.db, 123456, "holder@example.com").await?;

        let service = LicenceService::new(&test.state);
        let licence = service.issue(application.id, &issue_dto()).await.unwrap();

        let mut condition_ids = LicenceRepository::new(&test.state.db)
            .condition_ids(application.id)
            .await?;
        condition_ids.sort_unstable();

        assert_eq!(condition_ids, seeded.default_condition_ids);
        assert_eq!(licence.application_id, application.id);

        mock.assert_async().await;

        Ok(())
    }

    /// Expect each selected optional condition to add exactly one join row
    #[tokio::test]
    async fn issue_adds_selected_optionals() -> Result<(), DbErr> {
        let mut test = test_setup().await?;
        let _mock = test
            .server
            .mock("POST", "/v2/notifications/email")
            .with_status(201)
            .with_body("{}")
            .create_async()
            .await;

        let seeded = seed_reference_data(&test.state.db).await?;
        let application = insert_application(&test.state.db, 123457, "holder@example.com").await?;

        let mut dto = issue_dto();
        dto.optional_condition_ids = vec![seeded.optional_condition_ids[0]];

        let service = LicenceService::new(&test.state);
        service.issue(application.id, &dto).await.unwrap();

        let condition_ids = LicenceRepository::new(&test.state.db)
            .condition_ids(application.id)
            .await?;

        assert_eq!(
            condition_ids.len(),
            seeded.default_condition_ids.len() + 1
        );
        assert!(condition_ids.contains(&seeded.optional_condition_ids[0]));

        Ok(())
    }

    /// Expect NotFound when issuing against an unknown application
    #[tokio::test]
    async fn issue_unknown_application() -> Result<(), DbErr> {
        let test = test_setup().await?;

        let service = LicenceService::new(&test.state);
        let result = service.issue(999999, &issue_dto()).await;

        assert!(matches!(result, Err(Error::NotFound(_))));

        Ok(())
    }

    /// Expect resend to re-send the issuance emails without new rows
    #[tokio::test]
    async fn resend_emails_resends() -> Result<(), DbErr> {
        let mut test = test_setup().await?;
        // Two sends at issuance, two more on resend.
        let mock = test
            .server
            .mock("POST", "/v2/notifications/email")
            .with_status(201)
            .with_body("{}")
            .expect(4)
            .create_async()
            .await;

        seed_reference_data(&test.state.db).await?;
        let application = insert_application(&test.state.db, 123458, "holder@example.com").await?;

        let service = LicenceService::new(&test.state);
        service.issue(application.id, &issue_dto()).await.unwrap();
        service.resend_emails(application.id).await.unwrap();

        mock.assert_async().await;

        Ok(())
    }
}
