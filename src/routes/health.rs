use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::app::AppState;
use crate::errors::AppResult;
use crate::upstream::TableQuery;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub upstream_ok: bool,
}

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses((status = 200, description = "Health check", body = HealthResponse))
)]
pub async fn health(State(state): State<AppState>) -> AppResult<Json<HealthResponse>> {
    // Lightweight upstream check
    let probe = TableQuery::new("promocoes").select("id").limit(1);
    let upstream_ok = match state.upstream.select(None, probe).await {
        Ok(_) => true,
        Err(err) => {
            tracing::warn!(error = %err, "health probe failed");
            false
        }
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        upstream_ok,
    }))
}
