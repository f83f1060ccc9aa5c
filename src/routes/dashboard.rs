use axum::extract::State;
use axum::Json;
use serde_json::Value;

use crate::app::AppState;
use crate::authz::PageTag;
use crate::bearer::BearerToken;
use crate::errors::AppResult;
use crate::guard::check_page_access;
use crate::session::CookieSessionStore;
use crate::upstream::ApiCall;

#[utoipa::path(
    get,
    path = "/api/dashboard/metrics",
    tag = "Dashboard",
    responses((status = 200, description = "Dashboard metrics from the business API")),
    security(("bearerAuth" = []))
)]
pub async fn metrics(
    State(state): State<AppState>,
    bearer: BearerToken,
    session: CookieSessionStore,
) -> AppResult<Json<Value>> {
    check_page_access(state.config.authz_mode, &session, PageTag::Dashboard)?;

    let metrics = state
        .upstream
        .call(Some(bearer.as_str()), ApiCall::get("/dashboard/metrics"))
        .await?;

    Ok(Json(metrics))
}
