use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DbErr;

use larus::{
    model::application::CaseRecordDto,
    server::controller::case::{revoke_licence, withdraw_application},
};

use crate::util::setup::{insert_application, test_setup};

fn record() -> CaseRecordDto {
    CaseRecordDto {
        reason: "No longer needed".to_string(),
        created_by: "holder@example.com".to_string(),
    }
}

/// Expect 201 when withdrawing an existing application
#[tokio::test]
async fn withdraw_existing_application() -> Result<(), DbErr> {
    let test = test_setup().await?;
    let application = insert_application(&test.state.db, 123456).await?;

    let result = withdraw_application(State(test.state), Path(application.id), Json(record())).await;

    assert!(result.is_ok());
    let response = result.unwrap().into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 404 when revoking an application without a licence
#[tokio::test]
async fn revoke_without_licence_not_found() -> Result<(), DbErr> {
    let test = test_setup().await?;
    let application = insert_application(&test.state.db, 123457).await?;

    let result = revoke_licence(State(test.state), Path(application.id), Json(record())).await;

    let response = result.into_response();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
