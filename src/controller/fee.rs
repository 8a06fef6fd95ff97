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
        fee::{FeeDto, FeeRequest},
    },
    service::fee::FeeService,
};

pub static FEE_TAG: &str = "fee";

/// List all fee structures
#[utoipa::path(
    get,
    path = "/api/fees",
    tag = FEE_TAG,
    responses(
        (status = 200, description = "Success when listing fee structures", body = Vec<FeeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fees(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let fees = FeeService::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(fees)))
}

/// Fetch a single fee structure
#[utoipa::path(
    get,
    path = "/api/fees/{id}",
    tag = FEE_TAG,
    params(("id" = i32, Path, description = "Fee structure id")),
    responses(
        (status = 200, description = "Success when retrieving a fee structure", body = FeeDto),
        (status = 404, description = "Fee structure not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_fee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let fee = FeeService::new(&state.db).get(id).await?;

    Ok((StatusCode::OK, Json(fee)))
}

/// Create a new fee structure
#[utoipa::path(
    post,
    path = "/api/fees",
    tag = FEE_TAG,
    request_body = FeeRequest,
    responses(
        (status = 201, description = "Success when creating a fee structure", body = FeeDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_fee(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<FeeRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let fee = FeeService::new(&state.db).create(&request).await?;

    Ok((StatusCode::CREATED, Json(fee)))
}

/// Update an existing fee structure
#[utoipa::path(
    put,
    path = "/api/fees/{id}",
    tag = FEE_TAG,
    params(("id" = i32, Path, description = "Fee structure id")),
    request_body = FeeRequest,
    responses(
        (status = 200, description = "Success when updating a fee structure", body = FeeDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Fee structure not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_fee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(request): Json<FeeRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let fee = FeeService::new(&state.db).update(id, &request).await?;

    Ok((StatusCode::OK, Json(fee)))
}

/// Delete a fee structure
#[utoipa::path(
    delete,
    path = "/api/fees/{id}",
    tag = FEE_TAG,
    params(("id" = i32, Path, description = "Fee structure id")),
    responses(
        (status = 204, description = "Success when deleting a fee structure"),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Fee structure not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_fee(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    FeeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Download all fee structures as CSV
#[utoipa::path(
    get,
    path = "/api/fees/export",
    tag = FEE_TAG,
    responses(
        (status = 200, description = "Success when exporting fee structures", content_type = "text/csv"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn export_fees(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let csv = FeeService::new(&state.db).export_csv().await?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"fees.csv\"",
            ),
        ],
        csv,
    ))
}

/// Import fee structures from an uploaded CSV file
#[utoipa::path(
    post,
    path = "/api/fees/import",
    tag = FEE_TAG,
    request_body(content = String, content_type = "text/csv"),
    responses(
        (status = 200, description = "Import finished, per-row results in the report", body = ImportReportDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn import_fees(
    State(state): State<AppState>,
    session: Session,
    body: String,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let report = FeeService::new(&state.db).import_csv(&body).await?;

    tracing::info!(
        imported = report.imported,
        skipped = report.skipped,
        "Fee import finished"
    );

    Ok((StatusCode::OK, Json(report)))
}
