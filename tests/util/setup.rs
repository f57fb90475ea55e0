use chrono::Utc;
use mockito::ServerGuard;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ConnectionTrait, Database, DatabaseConnection, DbBackend,
    DbErr, Schema,
};

use entity::sea_orm_active_enums::Lifecycle;

use larus::{
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
        model::{app::AppState, species::SpeciesParams},
        notify::NotifyClient,
        postcode::PostcodeClient,
    },
};

pub struct TestSetup {
    pub server: ServerGuard,
    pub state: AppState,
}

async fn create_tables(db: &DatabaseConnection) -> Result<(), DbErr> {
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

    Ok(())
}

/// In-memory database with all tables, plus clients pointed at one mock
/// server.
pub async fn test_setup() -> Result<TestSetup, DbErr> {
    let server = mockito::Server::new_async().await;

    let db = Database::connect("sqlite::memory:").await?;
    create_tables(&db).await?;

    let state = AppState {
        db,
        notify: NotifyClient::new(&server.url(), "test-api-key"),
        postcodes: PostcodeClient::new(&server.url()),
        licensing_mailbox: "licensing@example.gov.uk".to_string(),
    };

    Ok(TestSetup { server, state })
}

pub fn test_contact(email_address: &str) -> ContactDto {
    ContactDto {
        name: "Jo Bloggs".to_string(),
        organisation: None,
        email_address: email_address.to_string(),
        phone_number: None,
    }
}

pub fn test_address(postcode: &str) -> AddressDto {
    AddressDto {
        uprn: None,
        address_line_1: Some("1 High Street".to_string()),
        address_line_2: None,
        address_town: Some("Harbourton".to_string()),
        address_county: None,
        postcode: postcode.to_string(),
    }
}

/// Inserts a full application aggregate under the given licence number.
pub async fn insert_application(
    db: &DatabaseConnection,
    id: i32,
) -> Result<entity::application::Model, DbErr> {
    let contact = ContactRepository::new(db).create(&test_contact("holder@example.com")).await?;
    let address = AddressRepository::new(db).create(&test_address("AB1 2CD")).await?;
    let species_set = SpeciesSetRepository::new(db)
        .create(Lifecycle::Application, &SpeciesParams::default())
        .await?;
    let issue = IssueRepository::new(db).create(&IssueDto::default()).await?;
    let measure = MeasureRepository::new(db)
        .create(&MeasureValues::derive(
            &MeasureFlagsDto::default(),
            &MeasureFlagsDto::default(),
        ))
        .await?;

    ApplicationRepository::new(db)
        .create(
            id,
            ApplicationKeys {
                licence_holder_id: contact.id,
                licence_applicant_id: contact.id,
                licence_holder_address_id: address.id,
                site_address_id: address.id,
                species_set_id: species_set.id,
                issue_id: issue.id,
                measure_id: measure.id,
            },
        )
        .await
}

/// Inserts one default and one optional condition.
pub async fn seed_conditions(db: &DatabaseConnection) -> Result<(), DbErr> {
    for (is_default, order_no, text) in [
        (true, 1, "Comply with all conditions of this licence."),
        (false, 2, "Any killing must use a humane method."),
    ] {
        entity::condition::ActiveModel {
            category: ActiveValue::Set("General".to_string()),
            text: ActiveValue::Set(text.to_string()),
            is_default: ActiveValue::Set(is_default),
            order_no: ActiveValue::Set(order_no),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(db)
        .await?;
    }

    Ok(())
}
