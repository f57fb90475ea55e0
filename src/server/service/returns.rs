use sea_orm::TransactionTrait;

use entity::sea_orm_active_enums::Lifecycle;

use crate::{
    model::returns::{CreateReturnDto, ReturnDto},
    server::{
        data::{
            address::AddressRepository,
            application::ApplicationRepository,
            contact::ContactRepository,
            licence::LicenceRepository,
            returns::{NewReturn, ReturnsRepository},
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

pub struct ReturnService<'a> {
    state: &'a AppState,
}

impl<'a> ReturnService<'a> {
    /// Creates a new instance of [`ReturnService`]
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Records a return against an issued licence.
    ///
    /// Species payloads are only persisted for reporting returns; for any
    /// other purpose the returns row keeps a null species set even when
    /// payloads were passed. The purpose flags are independent, and each
    /// true flag sends its own email to the holder and the applicant,
    /// deduplicated when they share a contact row.
    pub async fn create(
        &self,
        application_id: i32,
        dto: &CreateReturnDto,
    ) -> Result<ReturnDto, Error> {
        let licence = LicenceRepository::new(&self.state.db)
            .find_one(application_id)
            .await?
            .ok_or_else(|| {
                Error::NotFound(format!("No licence issued for application {application_id}"))
            })?;

        let txn = self.state.db.begin().await?;

        let species_set_id = if dto.is_reporting_return {
            let species_set = SpeciesSetRepository::new(&txn)
                .create(Lifecycle::Return, &SpeciesParams::from(&dto.species))
                .await?;
            Some(species_set.id)
        } else {
            None
        };

        let returned = ReturnsRepository::new(&txn)
            .create(NewReturn {
                licence_id: licence.application_id,
                species_set_id,
                is_reporting_return: dto.is_reporting_return,
                is_site_visit_return: dto.is_site_visit_return,
                is_final_return: dto.is_final_return,
                has_tried_preventative_measures: dto.has_tried_preventative_measures,
                preventative_measures_details: dto.preventative_measures_details.clone(),
                site_visit_date: dto.site_visit_date,
            })
            .await?;

        txn.commit().await?;

        if let Err(e) = self.send_return_emails(&returned).await {
            tracing::warn!(
                "Recorded return {} but could not send emails: {}",
                returned.id,
                e
            );
        }

        Ok(ReturnDto {
            id: returned.id,
            licence_id: returned.licence_id,
            is_reporting_return: returned.is_reporting_return,
            is_site_visit_return: returned.is_site_visit_return,
            is_final_return: returned.is_final_return,
        })
    }

    /// One email per active purpose flag, to each distinct recipient.
    async fn send_return_emails(&self, returned: &entity::returns::Model) -> Result<(), Error> {
        let db = &self.state.db;

        let application = ApplicationRepository::new(db)
            .find_one(returned.licence_id)
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

        let mut recipients = vec![holder.email_address.as_str()];
        if applicant.id != holder.id {
            recipients.push(applicant.email_address.as_str());
        }

        let parties = CaseParties {
            application: &application,
            licence_holder: &holder,
            site_address: &site_address,
        };

        if returned.is_reporting_return {
            let species_set_id = returned
                .species_set_id
                .ok_or_else(|| Error::InternalError("Reported species set missing".to_string()))?;
            let species = SpeciesSetRepository::new(db)
                .find_detail(species_set_id)
                .await?
                .ok_or_else(|| Error::InternalError("Reported species set missing".to_string()))?;

            let bundle = personalisation::reporting_return(&parties, &species);
            for recipient in &recipients {
                self.state
                    .notify
                    .dispatch(Template::ReportingReturn, recipient, &bundle)
                    .await;
            }
        }

        if returned.is_final_return {
            let bundle = personalisation::final_return(&parties, returned);
            for recipient in &recipients {
                self.state
                    .notify
                    .dispatch(Template::FinalReturn, recipient, &bundle)
                    .await;
            }
        }

        if returned.is_site_visit_return {
            let bundle = personalisation::site_visit_return(&parties, returned);
            for recipient in &recipients {
                self.state
                    .notify
                    .dispatch(Template::SiteVisitReturn, recipient, &bundle)
                    .await;
            }
        }

        Ok(())
    }
}
