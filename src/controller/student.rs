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
        student::{StudentDto, StudentRequest},
    },
    service::student::StudentService,
};

pub static STUDENT_TAG: &str = "student";

/// List all students
#[utoipa::path(
    get,
    path = "/api/students",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Success when listing students", body = Vec<StudentDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_students(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let students = StudentService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(students)))
}

/// Fetch a single student record by roll number
#[utoipa::path(
    get,
    path = "/api/students/{roll_no}",
    tag = STUDENT_TAG,
    params(("roll_no" = String, Path, description = "Student roll number")),
    responses(
        (status = 200, description = "Success when retrieving a student", body = StudentDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_student(
    State(state): State<AppState>,
    Path(roll_no): Path<String>,
) -> Result<impl IntoResponse, Error> {
    let student = StudentService::new(&state.db).get(&roll_no).await?;

    Ok((StatusCode::OK, Json(student)))
}

/// Create a new student record
#[utoipa::path(
    post,
    path = "/api/students",
    tag = STUDENT_TAG,
    request_body = StudentRequest,
    responses(
        (status = 201, description = "Success when creating a student", body = StudentDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_student(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<StudentRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let student = StudentService::new(&state.db).create(&request).await?;

    Ok((StatusCode::CREATED, Json(student)))
}

/// Update a student record by roll number
#[utoipa::path(
    put,
    path = "/api/students/{roll_no}",
    tag = STUDENT_TAG,
    params(("roll_no" = String, Path, description = "Student roll number")),
    request_body = StudentRequest,
    responses(
        (status = 200, description = "Success when updating a student", body = StudentDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_student(
    State(state): State<AppState>,
    session: Session,
    Path(roll_no): Path<String>,
    Json(request): Json<StudentRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let student = StudentService::new(&state.db)
        .update(&roll_no, &request)
        .await?;

    Ok((StatusCode::OK, Json(student)))
}

/// Delete a student record by roll number
#[utoipa::path(
    delete,
    path = "/api/students/{roll_no}",
    tag = STUDENT_TAG,
    params(("roll_no" = String, Path, description = "Student roll number")),
    responses(
        (status = 204, description = "Success when deleting a student"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Student not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_student(
    State(state): State<AppState>,
    session: Session,
    Path(roll_no): Path<String>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    StudentService::new(&state.db).delete(&roll_no).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download all students as CSV
#[utoipa::path(
    get,
    path = "/api/students/export",
    tag = STUDENT_TAG,
    responses(
        (status = 200, description = "Success when exporting students", content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_students(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let csv = StudentService::new(&state.db).export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"students.csv\"",
            ),
        ],
        csv,
    ))
}

/// Import students from an uploaded CSV file
#[utoipa::path(
    post,
    path = "/api/students/import",
    tag = STUDENT_TAG,
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Import finished, per-row results in the report", body = ImportReportDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_students(
    State(state): State<AppState>,
    session: Session,
    body: String,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let report = StudentService::new(&state.db).import_csv(&body).await?;

    tracing::info!(
        imported = report.imported,
        skipped = report.skipped,
        "Student import finished"
    );

    Ok((StatusCode::OK, Json(report)))
}
