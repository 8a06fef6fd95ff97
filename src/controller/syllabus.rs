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
        syllabus::{SyllabusDto, SyllabusRequest},
    },
    service::syllabus::SyllabusService,
};

pub static SYLLABUS_TAG: &str = "syllabus";

/// List all semester syllabuses
#[utoipa::path(
    get,
    path = "/api/syllabus",
    tag = SYLLABUS_TAG,
    responses(
        (status = 200, description = "Success when listing syllabuses", body = Vec<SyllabusDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_syllabus(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let syllabus = SyllabusService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(syllabus)))
}

/// Fetch a single semester syllabus
#[utoipa::path(
    get,
    path = "/api/syllabus/{id}",
    tag = SYLLABUS_TAG,
    params(("id" = i32, Path, description = "Syllabus id")),
    responses(
        (status = 200, description = "Success when retrieving a syllabus", body = SyllabusDto),
        (status = 404, description = "Syllabus not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_syllabus_entry(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let syllabus = SyllabusService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(syllabus)))
}

/// Create a new semester syllabus
#[utoipa::path(
    post,
    path = "/api/syllabus",
    tag = SYLLABUS_TAG,
    request_body = SyllabusRequest,
    responses(
        (status = 201, description = "Success when creating a syllabus", body = SyllabusDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_syllabus(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<SyllabusRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let syllabus = SyllabusService::new(&state.db).create(&request).await?;

    Ok((StatusCode::CREATED, Json(syllabus)))
}

/// Update a semester syllabus
#[utoipa::path(
    put,
    path = "/api/syllabus/{id}",
    tag = SYLLABUS_TAG,
    params(("id" = i32, Path, description = "Syllabus id")),
    request_body = SyllabusRequest,
    responses(
        (status = 200, description = "Success when updating a syllabus", body = SyllabusDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Syllabus not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_syllabus(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(request): Json<SyllabusRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let syllabus = SyllabusService::new(&state.db).update(id, &request).await?;

    Ok((StatusCode::OK, Json(syllabus)))
}

/// Delete a semester syllabus
#[utoipa::path(
    delete,
    path = "/api/syllabus/{id}",
    tag = SYLLABUS_TAG,
    params(("id" = i32, Path, description = "Syllabus id")),
    responses(
        (status = 204, description = "Success when deleting a syllabus"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Syllabus not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_syllabus(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    SyllabusService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download all syllabus subjects as CSV, one row per subject
#[utoipa::path(
    get,
    path = "/api/syllabus/export",
    tag = SYLLABUS_TAG,
    responses(
        (status = 200, description = "Success when exporting syllabuses", content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_syllabus(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let csv = SyllabusService::new(&state.db).export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"syllabus.csv\"",
            ),
        ],
        csv,
    ))
}
