use rand::Rng;
use sea_orm::{ConnectionTrait, TransactionTrait};

use entity::sea_orm_active_enums::Lifecycle;

use crate::{
    model::application::{
        ActivityDetailDto, ApplicationDetailDto, CreateApplicationDto, SpeciesDetailDto,
    },
    server::{
        data::{
            address::AddressRepository,
            application::{ApplicationKeys, ApplicationRepository},
            contact::ContactRepository,
            issue::IssueRepository,
            measure::{MeasureRepository, MeasureValues},
            species::{SpeciesSetDetail, SpeciesSetRepository},
        },
        error::Error,
        model::{app::AppState, species::SpeciesParams},
        notify::{
            personalisation::{self, CaseParties},
            Template,
        },
    },
};

/// Probe attempts before giving up on finding a free licence number.
pub const MAX_ID_PROBES: u32 = 10;

/// Draws the candidate licence numbers for one creation attempt.
///
/// Licence numbers are random six-digit integers rather than sequential ids;
/// they are public-facing and must not be guessable from one another.
fn draw_candidates() -> Vec<i32> {
    let mut rng = rand::rng();

    (0..MAX_ID_PROBES).map(|_| rng.random_range(0..=999_999)).collect()
}

/// Returns the first candidate not already taken by any application row,
/// live or soft-deleted.
///
/// The check-then-insert race is backstopped by the primary key constraint:
/// a colliding concurrent insert fails rather than overwrites.
async fn probe_licence_number<C: ConnectionTrait>(
    repository: &ApplicationRepository<'_, C>,
    candidates: &[i32],
) -> Result<i32, Error> {
    for candidate in candidates {
        if !repository.exists(*candidate).await? {
            return Ok(*candidate);
        }
    }

    Err(Error::LicenceNumberExhausted(candidates.len() as u32))
}

fn species_detail_dto(detail: &SpeciesSetDetail) -> SpeciesDetailDto {
    SpeciesDetailDto {
        herring_gull: detail.herring_gull.as_ref().map(ActivityDetailDto::from),
        black_headed_gull: detail.black_headed_gull.as_ref().map(ActivityDetailDto::from),
        common_gull: detail.common_gull.as_ref().map(ActivityDetailDto::from),
        great_black_backed_gull: detail
            .great_black_backed_gull
            .as_ref()
            .map(ActivityDetailDto::from),
        lesser_black_backed_gull: detail
            .lesser_black_backed_gull
            .as_ref()
            .map(ActivityDetailDto::from),
    }
}

pub struct ApplicationService<'a> {
    state: &'a AppState,
}

impl<'a> ApplicationService<'a> {
    /// Creates a new instance of [`ApplicationService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Creates the full application aggregate in one transaction.
    ///
    /// When no on-behalf contact is supplied the applicant IS the holder
    /// row, and likewise an absent site address reuses the holder address
    /// row; equality of the foreign keys is how "applied directly" is
    /// represented. A direct applicant gets a confirmation email after
    /// commit, best-effort.
    pub async fn create(
        &self,
        dto: &CreateApplicationDto,
    ) -> Result<entity::application::Model, Error> {
        let candidates = draw_candidates();

        let txn = self.state.db.begin().await?;

        let contact_repository = ContactRepository::new(&txn);
        let holder = contact_repository.create(&dto.licence_holder).await?;
        let applicant = match &dto.on_behalf_contact {
            Some(on_behalf) => contact_repository.create(on_behalf).await?,
            None => holder.clone(),
        };

        let address_repository = AddressRepository::new(&txn);
        let holder_address = address_repository.create(&dto.licence_holder_address).await?;
        let site_address = match &dto.site_address {
            Some(site) => address_repository.create(site).await?,
            None => holder_address.clone(),
        };

        let issue = IssueRepository::new(&txn).create(&dto.issue).await?;
        let measure = MeasureRepository::new(&txn)
            .create(&MeasureValues::derive(
                &dto.measures_tried,
                &dto.measures_intend_to_try,
            ))
            .await?;
        let species_set = SpeciesSetRepository::new(&txn)
            .create(Lifecycle::Application, &SpeciesParams::from(&dto.species))
            .await?;

        let application_repository = ApplicationRepository::new(&txn);
        let id = probe_licence_number(&application_repository, &candidates).await?;
        let application = application_repository
            .create(
                id,
                ApplicationKeys {
                    licence_holder_id: holder.id,
                    licence_applicant_id: applicant.id,
                    licence_holder_address_id: holder_address.id,
                    site_address_id: site_address.id,
                    species_set_id: species_set.id,
                    issue_id: issue.id,
                    measure_id: measure.id,
                },
            )
            .await?;

        txn.commit().await?;

        if dto.on_behalf_contact.is_none() {
            self.send_confirmation(&application, &holder, &site_address, &issue, &measure)
                .await;
        }

        Ok(application)
    }

    /// Best-effort confirmation email to a direct applicant.
    async fn send_confirmation(
        &self,
        application: &entity::application::Model,
        holder: &entity::contact::Model,
        site_address: &entity::address::Model,
        issue: &entity::issue::Model,
        measure: &entity::measure::Model,
    ) {
        let species = match SpeciesSetRepository::new(&self.state.db)
            .find_detail(application.species_set_id)
            .await
        {
            Ok(Some(species)) => species,
            Ok(None) => return,
            Err(e) => {
                tracing::warn!(
                    "Skipping confirmation email for application {}: {}",
                    application.id,
                    e
                );
                return;
            }
        };

        let parties = CaseParties {
            application,
            licence_holder: holder,
            site_address,
        };
        let bundle = personalisation::confirmation(&parties, &species, issue, measure);

        self.state
            .notify
            .dispatch(
                Template::ApplicationConfirmation,
                &holder.email_address,
                &bundle,
            )
            .await;
    }

    /// Gets the stored application aggregate as one detail object.
    pub async fn find_detail(&self, id: i32) -> Result<ApplicationDetailDto, Error> {
        let db = &self.state.db;

        let application = ApplicationRepository::new(db)
            .find_one(id)
            .await?
            .ok_or_else(|| Error::NotFound(format!("Application {id} not found")))?;

        let contact_repository = ContactRepository::new(db);
        let holder = contact_repository
            .find_one(application.licence_holder_id)
            .await?
            .ok_or_else(|| missing(id, "licence holder contact"))?;
        let applicant = if application.licence_applicant_id == application.licence_holder_id {
            holder.clone()
        } else {
            contact_repository
                .find_one(application.licence_applicant_id)
                .await?
                .ok_or_else(|| missing(id, "applicant contact"))?
        };

        let address_repository = AddressRepository::new(db);
        let holder_address = address_repository
            .find_one(application.licence_holder_address_id)
            .await?
            .ok_or_else(|| missing(id, "holder address"))?;
        let site_address = if application.site_address_id == application.licence_holder_address_id
        {
            holder_address.clone()
        } else {
            address_repository
                .find_one(application.site_address_id)
                .await?
                .ok_or_else(|| missing(id, "site address"))?
        };

        let species = SpeciesSetRepository::new(db)
            .find_detail(application.species_set_id)
            .await?
            .ok_or_else(|| missing(id, "species set"))?;

        let issue = IssueRepository::new(db)
            .find_one(application.issue_id)
            .await?
            .ok_or_else(|| missing(id, "issue record"))?;

        Ok(ApplicationDetailDto {
            id: application.id,
            licence_holder: (&holder).into(),
            licence_applicant: (&applicant).into(),
            licence_holder_address: (&holder_address).into(),
            site_address: (&site_address).into(),
            species: species_detail_dto(&species),
            issue: (&issue).into(),
            created_at: application.created_at,
        })
    }
}

fn missing(application_id: i32, what: &str) -> Error {
    Error::InternalError(format!("Application {application_id} is missing its {what} row"))
}

#[cfg(test)]
mod tests {
    use sea_orm::DbErr;

    use crate::{
        model::application::{
            ActivityRangesDto, CreateApplicationDto, IssueDto, MeasureFlagsDto, SpeciesRangesDto,
        },
        server::{
            data::application::ApplicationRepository,
            error::Error,
            util::test::{
                insert_application, setup_db, test_address, test_contact, test_setup,
            },
        },
    };

    use super::{probe_licence_number, ApplicationService};

    fn create_dto() -> CreateApplicationDto {
        CreateApplicationDto {
            licence_holder: test_contact("holder@example.com"),
            on_behalf_contact: None,
            licence_holder_address: test_address("AB1 2CD"),
            site_address: None,
            species: SpeciesRangesDto {
                herring_gull: Some(ActivityRangesDto {
                    remove_nests: true,
                    quantity_nests_to_remove: Some("upTo50".to_string()),
                    ..Default::default()
                }),
                ..Default::default()
            },
            issue: IssueDto {
                droppings: true,
                ..Default::default()
            },
            measures_tried: MeasureFlagsDto {
                prevent_nesting: true,
                ..Default::default()
            },
            measures_intend_to_try: MeasureFlagsDto::default(),
        }
    }

    /// Expect a direct application to share contact and address rows and to
    /// trigger exactly one confirmation email
    #[tokio::test]
    async fn create_direct_application() -> Result<(), DbErr> {
        let mut test = test_setup().await?;
        let mock = test
            .server
            .mock("POST", "/v2/notifications/email")
            .with_status(201)
            .with_body("{}")
            .expect(1)
            .create_async()
            .await;

        let service = ApplicationService::new(&test.state);
        let application = service.create(&create_dto()).await.unwrap();

        assert_eq!(application.licence_applicant_id, application.licence_holder_id);
        assert_eq!(application.site_address_id, application.licence_holder_address_id);
        assert!(application.id <= 999_999);

        let detail = service.find_detail(application.id).await.unwrap();
        let herring = detail.species.herring_gull.unwrap();
        assert_eq!(herring.quantity_nests_to_remove, Some(50));

        mock.assert_async().await;

        Ok(())
    }

    /// Expect an on-behalf application to create a distinct applicant and
    /// send no confirmation email
    #[tokio::test]
    async fn create_on_behalf_application() -> Result<(), DbErr> {
        let mut test = test_setup().await?;
        let mock = test
            .server
            .mock("POST", "/v2/notifications/email")
            .expect(0)
            .create_async()
            .await;

        let mut dto = create_dto();
        dto.on_behalf_contact = Some(test_contact("agent@example.com"));
        dto.site_address = Some(test_address("ZZ9 9ZZ"));

        let service = ApplicationService::new(&test.state);
        let application = service.create(&dto).await.unwrap();

        assert_ne!(application.licence_applicant_id, application.licence_holder_id);
        assert_ne!(application.site_address_id, application.licence_holder_address_id);

        mock.assert_async().await;

        Ok(())
    }

    /// Expect the probe to skip a taken number and settle on a free one
    #[tokio::test]
    async fn probe_skips_taken_numbers() -> Result<(), DbErr> {
        let db = setup_db().await?;
        insert_application(&db, 111111, "holder@example.com").await?;

        let repository = ApplicationRepository::new(&db);
        let id = probe_licence_number(&repository, &[111111, 222222])
            .await
            .unwrap();

        assert_eq!(id, 222222);

        Ok(())
    }

    /// Expect an error when every candidate collides
    #[tokio::test]
    async fn probe_errors_when_exhausted() -> Result<(), DbErr> {
        let db = setup_db().await?;
        insert_application(&db, 111111, "holder@example.com").await?;

        let repository = ApplicationRepository::new(&db);
        let result = probe_licence_number(&repository, &[111111; 10]).await;

        match result {
            Err(Error::LicenceNumberExhausted(attempts)) => assert_eq!(attempts, 10),
            other => panic!("Expected exhaustion error, got {:?}", other.map(|_| ())),
        }

        Ok(())
    }
}
