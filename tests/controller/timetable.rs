//! Tests for the timetable endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use registrar::{
    controller::timetable::{create_timetable, export_timetables, get_timetable, get_timetables},
    model::session::SessionAdminId,
    service::timetable::TimetableService,
};
use registrar_test_utils::prelude::*;

use crate::util::factory;

/// Expect 200 with an empty list before any timetable exists, no login needed
#[tokio::test]
async fn listing_is_public() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Timetables)?;

    let result = get_timetables(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 for an existing timetable and 404 otherwise, no login needed
#[tokio::test]
async fn fetch_one_is_public() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Timetables)?;
    let timetable = TimetableService::new(&test.state.db)
        .create(&factory::mock_timetable_request("BCA"))
        .await
        .unwrap();

    let result = get_timetable(State(test.state()), Path(timetable.id)).await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    let result = get_timetable(State(test.state()), Path(timetable.id + 100)).await;
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 without a session and 201 once logged in
#[tokio::test]
async fn create_requires_login() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Admins, entity::prelude::Timetables)?;

    let result = create_timetable(
        State(test.state()),
        test.session.clone(),
        Json(factory::mock_timetable_request("BCA")),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    let admin = factory::insert_mock_admin(&test.state.db, "admin@college.edu", "hunter2").await?;
    SessionAdminId::insert(&test.session, admin.id).await.unwrap();

    let result = create_timetable(
        State(test.state()),
        test.session.clone(),
        Json(factory::mock_timetable_request("BCA")),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::CREATED);

    Ok(())
}

/// Expect the export response to carry the CSV content type headers
#[tokio::test]
async fn export_answers_csv() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Timetables)?;
    TimetableService::new(&test.state.db)
        .create(&factory::mock_timetable_request("BCA"))
        .await
        .unwrap();

    let result = export_timetables(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp
        .headers()
        .get(axum::http::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/csv"));

    Ok(())
}
