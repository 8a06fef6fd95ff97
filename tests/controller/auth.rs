//! Tests for the authentication endpoints.

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use registrar::{
    controller::auth::{get_admin, login, logout},
    model::{admin::LoginRequest, session::SessionAdminId},
};
use registrar_test_utils::prelude::*;

/// Expect 200 and a stored session id after signing in with valid credentials
#[tokio::test]
async fn login_stores_admin_in_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Admins)?;
    let admin = factory::insert_mock_admin(&test.state.db, "admin@college.edu", "hunter2").await?;

    let request = LoginRequest {
        email: "admin@college.edu".to_string(),
        password: "hunter2".to_string(),
    };

    let result = login(State(test.state()), test.session.clone(), Json(request)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let session_admin = SessionAdminId::get(&test.session).await.unwrap();
    assert_eq!(session_admin, Some(admin.id));

    Ok(())
}

/// Expect 401 and no session data for a wrong password
#[tokio::test]
async fn login_rejects_wrong_password() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Admins)?;
    factory::insert_mock_admin(&test.state.db, "admin@college.edu", "hunter2").await?;

    let request = LoginRequest {
        email: "admin@college.edu".to_string(),
        password: "wrong".to_string(),
    };

    let result = login(State(test.state()), test.session.clone(), Json(request)).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    assert!(SessionAdminId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 204 after logout and the session to be cleared
#[tokio::test]
async fn logout_clears_session() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Admins)?;
    SessionAdminId::insert(&test.session, 1).await.unwrap();

    let result = logout(test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::NO_CONTENT);

    assert!(SessionAdminId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

/// Expect 200 with the admin record for a logged-in session
#[tokio::test]
async fn get_admin_returns_current_admin() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Admins)?;
    let admin = factory::insert_mock_admin(&test.state.db, "admin@college.edu", "hunter2").await?;
    SessionAdminId::insert(&test.session, admin.id).await.unwrap();

    let result = get_admin(State(test.state()), test.session.clone()).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 401 without a logged-in session
#[tokio::test]
async fn get_admin_rejects_anonymous() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Admins)?;

    let result = get_admin(State(test.state()), test.session.clone()).await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
