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
        api::ErrorDto,
        app::AppState,
        faculty::{FacultyDto, FacultyRequest},
    },
    service::faculty::FacultyService,
};

pub static FACULTY_TAG: &str = "faculty";

/// List all department faculty groups
#[utoipa::path(
    get,
    path = "/api/faculty",
    tag = FACULTY_TAG,
    responses(
        (status = 200, description = "Success when listing faculty groups", body = Vec<FacultyDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faculty(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let faculty = FacultyService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(faculty)))
}

/// Fetch a single department faculty group
#[utoipa::path(
    get,
    path = "/api/faculty/{id}",
    tag = FACULTY_TAG,
    params(("id" = i32, Path, description = "Faculty group id")),
    responses(
        (status = 200, description = "Success when retrieving a faculty group", body = FacultyDto),
        (status = 404, description = "Faculty group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_faculty_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let faculty = FacultyService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(faculty)))
}

/// Create a new department faculty group
#[utoipa::path(
    post,
    path = "/api/faculty",
    tag = FACULTY_TAG,
    request_body = FacultyRequest,
    responses(
        (status = 201, description = "Success when creating a faculty group", body = FacultyDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_faculty(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<FacultyRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let faculty = FacultyService::new(&state.db).create(&request).await?;

    Ok((StatusCode::CREATED, Json(faculty)))
}

/// Update a department faculty group
#[utoipa::path(
    put,
    path = "/api/faculty/{id}",
    tag = FACULTY_TAG,
    params(("id" = i32, Path, description = "Faculty group id")),
    request_body = FacultyRequest,
    responses(
        (status = 200, description = "Success when updating a faculty group", body = FacultyDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Faculty group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_faculty(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(request): Json<FacultyRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let faculty = FacultyService::new(&state.db).update(id, &request).await?;

    Ok((StatusCode::OK, Json(faculty)))
}

/// Delete a department faculty group
#[utoipa::path(
    delete,
    path = "/api/faculty/{id}",
    tag = FACULTY_TAG,
    params(("id" = i32, Path, description = "Faculty group id")),
    responses(
        (status = 204, description = "Success when deleting a faculty group"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Faculty group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_faculty(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    FacultyService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download all faculty members as CSV, one row per member
#[utoipa::path(
    get,
    path = "/api/faculty/export",
    tag = FACULTY_TAG,
    responses(
        (status = 200, description = "Success when exporting faculty", content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_faculty(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let csv = FacultyService::new(&state.db).export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"faculty.csv\"",
            ),
        ],
        csv,
    ))
}
