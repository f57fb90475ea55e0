use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use sea_orm::DbErr;

use larus::server::controller::reference::{find_addresses, get_conditions, AddressQuery};

use crate::util::setup::{seed_conditions, test_setup};

/// Expect 200 with the seeded conditions
#[tokio::test]
async fn conditions_listed() -> Result<(), DbErr> {
    let test = test_setup().await?;
    seed_conditions(&test.state.db).await?;

    let result = get_conditions(State(test.state)).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Expect the lookup passthrough to surface the collaborator's results
#[tokio::test]
async fn addresses_looked_up() -> Result<(), DbErr> {
    let mut test = test_setup().await?;
    let mock = test
        .server
        .mock("GET", "/addresses?postcode=AB1%202CD")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"results":[{"uprn":100021860764,"address_line_1":"1 High Street","address_line_2":null,"address_town":"Harbourton","address_county":null,"postcode":"AB1 2CD"}]}"#)
        .create_async()
        .await;

    let result = find_addresses(
        State(test.state),
        Query(AddressQuery {
            postcode: "AB1 2CD".to_string(),
        }),
    )
    .await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::OK);

    mock.assert_async().await;

    Ok(())
}
