use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    controller::util::require_admin,
    error::Error,
    model::{
        api::{ErrorDto, ImportReportDto},
        app::AppState,
        course::{CourseDto, CourseRequest},
    },
    service::course::CourseService,
};

pub static COURSE_TAG: &str = "course";

/// List all courses
#[utoipa::path(
    get,
    path = "/api/courses",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Success when listing courses", body = Vec<CourseDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_courses(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let courses = CourseService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(courses)))
}

/// Fetch a single course
#[utoipa::path(
    get,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course id")),
    responses(
        (status = 200, description = "Success when retrieving a course", body = CourseDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_course(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let course = CourseService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(course)))
}

/// Create a new course
#[utoipa::path(
    post,
    path = "/api/courses",
    tag = COURSE_TAG,
    request_body = CourseRequest,
    responses(
        (status = 201, description = "Success when creating a course", body = CourseDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_course(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CourseRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let course = CourseService::new(&state.db).create(&request).await?;

    Ok((StatusCode::CREATED, Json(course)))
}

/// Update an existing course
#[utoipa::path(
    put,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course id")),
    request_body = CourseRequest,
    responses(
        (status = 200, description = "Success when updating a course", body = CourseDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_course(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(request): Json<CourseRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let course = CourseService::new(&state.db).update(id, &request).await?;

    Ok((StatusCode::OK, Json(course)))
}

/// Delete a course
#[utoipa::path(
    delete,
    path = "/api/courses/{id}",
    tag = COURSE_TAG,
    params(("id" = i32, Path, description = "Course id")),
    responses(
        (status = 204, description = "Success when deleting a course"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Course not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_course(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    CourseService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download all courses as CSV
#[utoipa::path(
    get,
    path = "/api/courses/export",
    tag = COURSE_TAG,
    responses(
        (status = 200, description = "Success when exporting courses", content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_courses(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let csv = CourseService::new(&state.db).export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"courses.csv\"",
            ),
        ],
        csv,
    ))
}

/// Import courses from an uploaded CSV file
#[utoipa::path(
    post,
    path = "/api/courses/import",
    tag = COURSE_TAG,
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Import finished, per-row results in the report", body = ImportReportDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_courses(
    State(state): State<AppState>,
    session: Session,
    body: String,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let report = CourseService::new(&state.db).import_csv(&body).await?;

    tracing::info!(
        imported = report.imported,
        skipped = report.skipped,
        "Course import finished"
    );

    Ok((StatusCode::OK, Json(report)))
}
