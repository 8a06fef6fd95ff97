//! Tests for the college profile endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use registrar::{
    controller::college::{get_college, put_college},
    model::session::SessionAdminId,
};
use registrar_test_utils::prelude::*;

use crate::util::factory;

/// Expect 404 before any profile has been saved
#[tokio::test]
async fn get_before_save_is_not_found() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::College)?;

    let result = get_college(State(test.state())).await;

    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 saving without a session, then 200 and a readable profile once
/// logged in
#[tokio::test]
async fn put_is_gated_then_saves() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Admins, entity::prelude::College)?;

    let result = put_college(
        State(test.state()),
        test.session.clone(),
        Json(factory::mock_college_request()),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    let admin = factory::insert_mock_admin(&test.state.db, "admin@college.edu", "hunter2").await?;
    SessionAdminId::insert(&test.session, admin.id).await.unwrap();

    let result = put_college(
        State(test.state()),
        test.session.clone(),
        Json(factory::mock_college_request()),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    let result = get_college(State(test.state())).await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    Ok(())
}
