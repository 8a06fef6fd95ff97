use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    controller::util::require_admin,
    error::Error,
    model::{
        admin::{AdminDto, LoginRequest},
        api::ErrorDto,
        app::AppState,
        session::SessionAdminId,
    },
    service::auth::AuthService,
};

pub static AUTH_TAG: &str = "auth";

/// Sign in with email and password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Success when signing in", body = AdminDto),
        (status = 401, description = "Invalid email or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, Error> {
    let admin = AuthService::new(&state.db)
        .sign_in(&request.email, &request.password)
        .await?;

    SessionAdminId::insert(&session, admin.id).await?;

    tracing::info!(admin_id = %admin.id, "Admin signed in");

    Ok((StatusCode::OK, Json(admin)))
}

/// Sign out the current admin
#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 204, description = "Success when signing out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    session.clear().await;

    Ok(StatusCode::NO_CONTENT)
}

/// Get the currently signed-in admin
#[utoipa::path(
    get,
    path = "/api/auth/admin",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Success when retrieving the signed-in admin", body = AdminDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Admin not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let admin = require_admin(&state, &session).await?;

    Ok((StatusCode::OK, Json(admin)))
}
