use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::json;

use crate::app::AppState;
use crate::authz::PermissionEvaluator;
use crate::errors::{AppError, AppResult};
use crate::models::admin::{AdminLoginRequest, AdminPermissionsResponse, MessageResponse, UpstreamAdminLogin};
use crate::session::{admin_data_raw, clear_admin_session, store_admin_session, CookieSessionStore};
use crate::upstream::{ApiCall, UpstreamError};

#[utoipa::path(
    post,
    path = "/api/admin/login",
    tag = "Admin",
    request_body = AdminLoginRequest,
    responses(
        (status = 200, description = "Session cookies written", body = AdminPermissionsResponse),
        (status = 400, description = "Missing email or senha"),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    session: CookieSessionStore,
    payload: Result<Json<AdminLoginRequest>, JsonRejection>,
) -> AppResult<Json<AdminPermissionsResponse>> {
    let Json(payload) = payload.map_err(|err| AppError::bad_request(err.body_text()))?;
    if payload.email.trim().is_empty() || payload.senha.is_empty() {
        return Err(AppError::bad_request("email and senha are required"));
    }

    let call = ApiCall::post(
        "/admin/login",
        json!({ "email": payload.email.trim(), "senha": payload.senha }),
    );

    let body = match state.upstream.call(None, call).await {
        Ok(body) => body,
        Err(UpstreamError::Status { status: 400 | 401, .. }) => {
            tracing::info!("admin login rejected by upstream");
            return Err(AppError::unauthorized("invalid credentials"));
        }
        Err(err) => return Err(err.into()),
    };

    let login: UpstreamAdminLogin =
        serde_json::from_value(body).map_err(|err| UpstreamError::Decode(err.to_string()))?;
    if login.token.trim().is_empty() {
        return Err(UpstreamError::Decode("login response carried an empty token".to_string()).into());
    }

    store_admin_session(&session, &login.token, &login.admin)?;
    tracing::info!(funcao = %login.admin.funcao, "admin session started");

    let evaluator = PermissionEvaluator::new(Some(login.admin));
    Ok(Json(AdminPermissionsResponse::from(&evaluator)))
}

#[utoipa::path(
    post,
    path = "/api/admin/logout",
    tag = "Admin",
    responses((status = 200, description = "Session cookies cleared", body = MessageResponse))
)]
pub async fn logout(session: CookieSessionStore) -> Json<MessageResponse> {
    clear_admin_session(&session);
    Json(MessageResponse::new("Logged out"))
}

#[utoipa::path(
    get,
    path = "/api/admin/permissions",
    tag = "Admin",
    responses((status = 200, description = "Decoded admin_data cookie", body = AdminPermissionsResponse))
)]
pub async fn permissions(session: CookieSessionStore) -> Json<AdminPermissionsResponse> {
    let evaluator = PermissionEvaluator::from_cookie(admin_data_raw(&session).as_deref());
    Json(AdminPermissionsResponse::from(&evaluator))
}
