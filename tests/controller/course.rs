//! Tests for the course endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use registrar::{
    controller::course::{
        create_course, delete_course, export_courses, get_course, get_courses, import_courses,
        update_course,
    },
    model::session::SessionAdminId,
    service::course::CourseService,
};
use registrar_test_utils::prelude::*;

use crate::util::factory;

async fn logged_in_setup() -> Result<TestSetup, TestError> {
    let test = test_setup_with_tables!(entity::prelude::Admins, entity::prelude::Courses)?;

    let admin = factory::insert_mock_admin(&test.state.db, "admin@college.edu", "hunter2").await?;
    SessionAdminId::insert(&test.session, admin.id).await.unwrap();

    Ok(test)
}

/// Expect 200 with an empty list before any course exists, no login needed
#[tokio::test]
async fn listing_is_public() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Courses)?;

    let result = get_courses(State(test.state())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 for an existing course and 404 otherwise, no login needed
#[tokio::test]
async fn fetch_one_is_public() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Courses)?;
    let course = CourseService::new(&test.state.db)
        .create(&factory::mock_course_request("BCA"))
        .await
        .unwrap();

    let result = get_course(State(test.state()), Path(course.id)).await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    let result = get_course(State(test.state()), Path(course.id + 100)).await;
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 401 when creating a course without a session
#[tokio::test]
async fn create_requires_login() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Admins, entity::prelude::Courses)?;

    let result = create_course(
        State(test.state()),
        test.session.clone(),
        Json(factory::mock_course_request("BCA")),
    )
    .await;

    let resp = result.into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let courses = CourseService::new(&test.state.db).get_all().await.unwrap();
    assert!(courses.is_empty());

    Ok(())
}

/// Expect 201 when creating a course as a logged-in admin
#[tokio::test]
async fn create_returns_created() -> Result<(), TestError> {
    let test = logged_in_setup().await?;

    let result = create_course(
        State(test.state()),
        test.session.clone(),
        Json(factory::mock_course_request("BCA")),
    )
    .await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    Ok(())
}

/// Expect 200 on update and 404 for a missing id
#[tokio::test]
async fn update_maps_missing_to_not_found() -> Result<(), TestError> {
    let test = logged_in_setup().await?;
    let service = CourseService::new(&test.state.db);
    let course = service
        .create(&factory::mock_course_request("BCA"))
        .await
        .unwrap();

    let mut request = factory::mock_course_request("BCA");
    request.total_seats = 90;

    let result = update_course(
        State(test.state()),
        test.session.clone(),
        Path(course.id),
        Json(request.clone()),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    let result = update_course(
        State(test.state()),
        test.session.clone(),
        Path(course.id + 100),
        Json(request),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::NOT_FOUND);

    Ok(())
}

/// Expect 204 on delete and the course gone from the listing
#[tokio::test]
async fn delete_removes_course() -> Result<(), TestError> {
    let test = logged_in_setup().await?;
    let service = CourseService::new(&test.state.db);
    let course = service
        .create(&factory::mock_course_request("BCA"))
        .await
        .unwrap();

    let result = delete_course(State(test.state()), test.session.clone(), Path(course.id)).await;

    assert_eq!(result.into_response().status(), StatusCode::NO_CONTENT);
    assert!(service.get_all().await.unwrap().is_empty());

    Ok(())
}

/// Expect the export response to carry the CSV content type headers
#[tokio::test]
async fn export_answers_csv() -> Result<(), TestError> {
    let test = logged_in_setup().await?;
    CourseService::new(&test.state.db)
        .create(&factory::mock_course_request("BCA"))
        .await
        .unwrap();

    let result = export_courses(State(test.state())).await;

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

/// Expect 401 when importing without a session and 200 with a report when
/// logged in
#[tokio::test]
async fn import_is_gated_and_reports() -> Result<(), TestError> {
    let test = test_setup_with_tables!(entity::prelude::Admins, entity::prelude::Courses)?;

    let content = "\
Name,Department,Affiliation,Duration,Total Seats,Fee Structure
BCA,Computer Applications,State University,3 Years,60,45000/year
";

    let result = import_courses(
        State(test.state()),
        test.session.clone(),
        content.to_string(),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::UNAUTHORIZED);

    let admin = factory::insert_mock_admin(&test.state.db, "admin@college.edu", "hunter2").await?;
    SessionAdminId::insert(&test.session, admin.id).await.unwrap();

    let result = import_courses(
        State(test.state()),
        test.session.clone(),
        content.to_string(),
    )
    .await;
    assert_eq!(result.into_response().status(), StatusCode::OK);

    let courses = CourseService::new(&test.state.db).get_all().await.unwrap();
    assert_eq!(courses.len(), 1);

    Ok(())
}
