use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    controller::util::require_admin,
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        college::{CollegeDto, CollegeRequest},
    },
    service::college::CollegeService,
};

pub static COLLEGE_TAG: &str = "college";

/// Get the college profile
#[utoipa::path(
    get,
    path = "/api/college",
    tag = COLLEGE_TAG,
    responses(
        (status = 200, description = "Success when retrieving the college profile", body = CollegeDto),
        (status = 404, description = "No college profile has been saved yet", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_college(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let college = CollegeService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(college)))
}

/// Create or replace the college profile
#[utoipa::path(
    put,
    path = "/api/college",
    tag = COLLEGE_TAG,
    request_body = CollegeRequest,
    responses(
        (status = 200, description = "Success when saving the college profile", body = CollegeDto),
        (status = 400, description = "Validation failed", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_college(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<CollegeRequest>,
) -> Result<impl IntoResponse, Error> {
    require_admin(&state, &session).await?;

    let college = CollegeService::new(&state.db).upsert(&request).await?;

    Ok((StatusCode::OK, Json(college)))
}
