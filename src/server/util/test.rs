//! Shared fixtures for data and service tests.

use chrono::Utc;
use mockito::ServerGuard;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, Database, DatabaseConnection, DbBackend, DbErr,
    Schema,
};

use entity::sea_orm_active_enums::Lifecycle;

use crate::{
    model::application::{AddressDto, ContactDto, IssueDto, MeasureFlagsDto},
    server::{
        data::{
            address::AddressRepository,
            application::{ApplicationKeys, ApplicationRepository},
            contact::ContactRepository,
            issue::IssueRepository,
            measure::{MeasureRepository, MeasureValues},
            species::SpeciesSetRepository,
        },
        model::{
            app::AppState,
            species::{ActivityParams, SpeciesParams},
        },
        notify::NotifyClient,
        postcode::PostcodeClient,
    },
};

/// Creates an in-memory database with every table the crate uses.
pub async fn setup_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    let schema = Schema::new(DbBackend::Sqlite);

    db.execute(&schema.create_table_from_entity(entity::prelude::Contact)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Address)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Activity)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::SpeciesSet)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Issue)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Measure)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Application)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Assessment)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Condition)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Advisory)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Licence)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::LicenceCondition)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::LicenceAdvisory)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Amendment)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::AmendCondition)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::AmendAdvisory)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Returns)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Note)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Withdrawal)).await?;
    db.execute(&schema.create_table_from_entity(entity::prelude::Revocation)).await?;

    Ok(db)
}

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: AppState,
}

/// Creates an in-memory database plus clients pointed at one mock server.
pub async fn test_setup() -> Result<TestSetup, DbErr> {
    let server = mockito::Server::new_async().await;

    let state = AppState {
        db: setup_db().await?,
        notify: NotifyClient::new(&server.url(), "test-api-key"),
        postcodes: PostcodeClient::new(&server.url()),
        licensing_mailbox: "licensing@example.gov.uk".to_string(),
    };

    Ok(TestSetup { server, state })
}

pub fn test_contact(email_address: &str) -> ContactDto {
    ContactDto {
        name: "Jo Bloggs".to_string(),
        organisation: Some("Harbourton Rooftops Ltd".to_string()),
        email_address: email_address.to_string(),
        phone_number: Some("01234 567890".to_string()),
    }
}

pub fn test_address(postcode: &str) -> AddressDto {
    AddressDto {
        uprn: Some(100021860764),
        address_line_1: Some("1 High Street".to_string()),
        address_line_2: None,
        address_town: Some("Harbourton".to_string()),
        address_county: None,
        postcode: postcode.to_string(),
    }
}

/// Herring gull only, up to 50 nests taken and destroyed.
pub fn test_species_params() -> SpeciesParams {
    SpeciesParams {
        herring_gull: Some(ActivityParams {
            remove_nests: true,
            quantity_nests_to_remove: Some(50),
            egg_destruction: true,
            quantity_nests_where_eggs_destroyed: Some(50),
            ..Default::default()
        }),
        ..Default::default()
    }
}

pub struct SeededReference {
    pub default_condition_ids: Vec<i32>,
    pub optional_condition_ids: Vec<i32>,
    pub default_advisory_ids: Vec<i32>,
    pub optional_advisory_ids: Vec<i32>,
}

/// `(category, text, is_default, order_no)` rows matching the shape the
/// reference-data migration seeds in production.
const TEST_CONDITIONS: &[(&str, &str, bool, i32)] = &[
    (
        "General",
        "The licence holder must comply with all conditions of this licence.",
        true,
        1,
    ),
    (
        "Recording and reporting",
        "A return must be submitted to the licensing authority.",
        true,
        2,
    ),
    (
        "Methods",
        "Any killing of birds must be carried out by a competent person.",
        false,
        3,
    ),
    (
        "Health and safety",
        "Work at height must only be undertaken with appropriate equipment.",
        false,
        4,
    ),
];

const TEST_ADVISORIES: &[(&str, &str, bool, i32)] = &[
    (
        "General",
        "Preventative measures should be continued or put in place.",
        true,
        1,
    ),
    (
        "Welfare",
        "Where eggs are destroyed, doing so early in incubation is preferable.",
        false,
        2,
    ),
];

/// Inserts a small condition and advisory set and returns the ids by kind.
pub async fn seed_reference_data<C: ConnectionTrait>(db: &C) -> Result<SeededReference, DbErr> {
    let mut seeded = SeededReference {
        default_condition_ids: Vec::new(),
        optional_condition_ids: Vec::new(),
        default_advisory_ids: Vec::new(),
        optional_advisory_ids: Vec::new(),
    };

    for (category, text, is_default, order_no) in TEST_CONDITIONS {
        let condition = entity::condition::ActiveModel {
            category: ActiveValue::Set(category.to_string()),
            text: ActiveValue::Set(text.to_string()),
            is_default: ActiveValue::Set(*is_default),
            order_no: ActiveValue::Set(*order_no),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        if *is_default {
            seeded.default_condition_ids.push(condition.id);
        } else {
            seeded.optional_condition_ids.push(condition.id);
        }
    }

    for (category, text, is_default, order_no) in TEST_ADVISORIES {
        let advisory = entity::advisory::ActiveModel {
            category: ActiveValue::Set(category.to_string()),
            text: ActiveValue::Set(text.to_string()),
            is_default: ActiveValue::Set(*is_default),
            order_no: ActiveValue::Set(*order_no),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await?;

        if *is_default {
            seeded.default_advisory_ids.push(advisory.id);
        } else {
            seeded.optional_advisory_ids.push(advisory.id);
        }
    }

    Ok(seeded)
}

/// Inserts the aggregate rows an application row points at; applicant and
/// holder share one contact, site and holder one address.
pub async fn insert_application_keys<C: ConnectionTrait>(
    db: &C,
    email_address: &str,
) -> Result<ApplicationKeys, DbErr> {
    let contact = ContactRepository::new(db).create(&test_contact(email_address)).await?;
    let address = AddressRepository::new(db).create(&test_address("AB1 2CD")).await?;

    let species_set = SpeciesSetRepository::new(db)
        .create(Lifecycle::Application, &test_species_params())
        .await?;

    let issue = IssueRepository::new(db)
        .create(&IssueDto {
            droppings: true,
            issue_details: Some("Droppings over the rear fire escape".to_string()),
            site_used_for: Some("Commercial premises".to_string()),
            ..Default::default()
        })
        .await?;

    let measure = MeasureRepository::new(db)
        .create(&MeasureValues::derive(
            &MeasureFlagsDto {
                prevent_nesting: true,
                ..Default::default()
            },
            &MeasureFlagsDto {
                scaring_devices: true,
                ..Default::default()
            },
        ))
        .await?;

    Ok(ApplicationKeys {
        licence_holder_id: contact.id,
        licence_applicant_id: contact.id,
        licence_holder_address_id: address.id,
        site_address_id: address.id,
        species_set_id: species_set.id,
        issue_id: issue.id,
        measure_id: measure.id,
    })
}

/// Inserts a full application aggregate under the given licence number.
pub async fn insert_application<C: ConnectionTrait>(
    db: &C,
    id: i32,
    email_address: &str,
) -> Result<entity::application::Model, DbErr> {
    let keys = insert_application_keys(db, email_address).await?;

    ApplicationRepository::new(db).create(id, keys).await
}
