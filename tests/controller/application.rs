use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DbErr;

use larus::{
    model::application::{
        ActivityRangesDto, CreateApplicationDto, IssueDto, MeasureFlagsDto, SpeciesRangesDto,
    },
    server::controller::application::{
        create_application, get_application, get_application_status,
    },
};

use crate::util::setup::{insert_application, test_contact, test_address, test_setup};

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
        measures_tried: MeasureFlagsDto::default(),
        measures_intend_to_try: MeasureFlagsDto::default(),
    }
}

/// Expect 201 with the stored detail when creating an application
#[tokio::test]
async fn create_returns_created() -> Result<(), DbErr> {
    let mut test = test_setup().await?;
    let _mock = test
        .server
        .mock("POST", "/v2/notifications/email")
        .with_status(201)
        .with_body("{}")
        .create_async()
        .await;

    let result = create_application(State(test.state), Json(create_dto())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 404 for an application that does not exist
#[tokio::test]
async fn get_unknown_application_not_found() -> Result<(), DbErr> {
    let test = test_setup().await?;

    let result = get_application(State(test.state), Path(999999)).await;

    let response = result.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect a fresh application to report the Received status
#[tokio::test]
async fn status_of_fresh_application() -> Result<(), DbErr> {
    let test = test_setup().await?;
    let application = insert_application(&test.state.db, 123456).await?;

    let result = get_application_status(State(test.state), Path(application.id)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}
