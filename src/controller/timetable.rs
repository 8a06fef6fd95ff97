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
        timetable::{TimetableDto, TimetableRequest},
    },
    service::timetable::TimetableService,
};

pub static TIMETABLE_TAG: &str = "timetable";

/// List all weekly timetables
#[utoipa::path(
    get,
    path = "/api/timetables",
    tag = TIMETABLE_TAG,
    responses(
        (status = 200, description = "Success when listing timetables", body = Vec<TimetableDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timetables(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let timetables = TimetableService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(timetables)))
}

/// Fetch a single weekly timetable
#[utoipa::path(
    get,
    path = "/api/timetables/{id}",
    tag = TIMETABLE_TAG,
    params(("id" = i32, Path, description = "Timetable id")),
    responses(
        (status = 200, description = "Success when retrieving a timetable", body = TimetableDto),
        (status = 404, description = "Timetable not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_timetable(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let timetable = TimetableService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(timetable)))
}

/// Create a new weekly timetable
#[utoipa::path(
    post,
    path = "/api/timetables",
    tag = TIMETABLE_TAG,
    request_body = TimetableRequest,
    responses(
        (status = 201, description = "Success when creating a timetable", body = TimetableDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_timetable(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<TimetableRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let timetable = TimetableService::new(&state.db).create(&request).await?;

    Ok((StatusCode::CREATED, Json(timetable)))
}

/// Update a weekly timetable
#[utoipa::path(
    put,
    path = "/api/timetables/{id}",
    tag = TIMETABLE_TAG,
    params(("id" = i32, Path, description = "Timetable id")),
    request_body = TimetableRequest,
    responses(
        (status = 200, description = "Success when updating a timetable", body = TimetableDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Timetable not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_timetable(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(request): Json<TimetableRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let timetable = TimetableService::new(&state.db).update(id, &request).await?;

    Ok((StatusCode::OK, Json(timetable)))
}

/// Delete a weekly timetable
#[utoipa::path(
    delete,
    path = "/api/timetables/{id}",
    tag = TIMETABLE_TAG,
    params(("id" = i32, Path, description = "Timetable id")),
    responses(
        (status = 204, description = "Success when deleting a timetable"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Timetable not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_timetable(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    TimetableService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download all timetable slots as CSV, one row per slot
#[utoipa::path(
    get,
    path = "/api/timetables/export",
    tag = TIMETABLE_TAG,
    responses(
        (status = 200, description = "Success when exporting timetables", content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_timetables(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let csv = TimetableService::new(&state.db).export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"timetables.csv\"",
            ),
        ],
        csv,
    ))
}
