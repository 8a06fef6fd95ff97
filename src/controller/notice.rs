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
        notice::{NoticeDto, NoticeRequest},
    },
    service::notice::NoticeService,
};

pub static NOTICE_TAG: &str = "notice";

/// List all notices with their derived publication status
#[utoipa::path(
    get,
    path = "/api/notices",
    tag = NOTICE_TAG,
    responses(
        (status = 200, description = "Success when listing notices", body = Vec<NoticeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notices(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let notices = NoticeService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(notices)))
}

/// Fetch a single notice with its derived publication status
#[utoipa::path(
    get,
    path = "/api/notices/{id}",
    tag = NOTICE_TAG,
    params(("id" = i32, Path, description = "Notice id")),
    responses(
        (status = 200, description = "Success when retrieving a notice", body = NoticeDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_notice(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let notice = NoticeService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(notice)))
}

/// Create a new notice
#[utoipa::path(
    post,
    path = "/api/notices",
    tag = NOTICE_TAG,
    request_body = NoticeRequest,
    responses(
        (status = 201, description = "Success when creating a notice", body = NoticeDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_notice(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<NoticeRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let notice = NoticeService::new(&state.db).create(&request).await?;

    Ok((StatusCode::CREATED, Json(notice)))
}

/// Update an existing notice
#[utoipa::path(
    put,
    path = "/api/notices/{id}",
    tag = NOTICE_TAG,
    params(("id" = i32, Path, description = "Notice id")),
    request_body = NoticeRequest,
    responses(
        (status = 200, description = "Success when updating a notice", body = NoticeDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_notice(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(request): Json<NoticeRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let notice = NoticeService::new(&state.db).update(id, &request).await?;

    Ok((StatusCode::OK, Json(notice)))
}

/// Delete a notice
#[utoipa::path(
    delete,
    path = "/api/notices/{id}",
    tag = NOTICE_TAG,
    params(("id" = i32, Path, description = "Notice id")),
    responses(
        (status = 204, description = "Success when deleting a notice"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Notice not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_notice(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    NoticeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download all notices as CSV
#[utoipa::path(
    get,
    path = "/api/notices/export",
    tag = NOTICE_TAG,
    responses(
        (status = 200, description = "Success when exporting notices", content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_notices(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let csv = NoticeService::new(&state.db).export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"notices.csv\"",
            ),
        ],
        csv,
    ))
}

/// Import notices from an uploaded CSV file
#[utoipa::path(
    post,
    path = "/api/notices/import",
    tag = NOTICE_TAG,
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Import finished, per-row results in the report", body = ImportReportDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_notices(
    State(state): State<AppState>,
    session: Session,
    body: String,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let report = NoticeService::new(&state.db).import_csv(&body).await?;

    tracing::info!(
        imported = report.imported,
        skipped = report.skipped,
        "Notice import finished"
    );

    Ok((StatusCode::OK, Json(report)))
}
