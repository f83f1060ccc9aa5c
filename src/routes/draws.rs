use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::app::AppState;
use crate::bearer::BearerToken;
use crate::errors::{AppError, AppResult};
use crate::models::draw::DrawRequest;
use crate::upstream::ApiCall;

#[utoipa::path(
    post,
    path = "/api/sorteio/instantaneo",
    tag = "Sorteio",
    request_body = DrawRequest,
    responses(
        (status = 200, description = "Draw outcome computed by the business API"),
        (status = 400, description = "Invalid draw request"),
        (status = 401, description = "Missing bearer token")
    ),
    security(("bearerAuth" = []))
)]
pub async fn instant_draw(
    State(state): State<AppState>,
    bearer: BearerToken,
    payload: Result<Json<DrawRequest>, JsonRejection>,
) -> AppResult<Json<Value>> {
    let Json(request) = payload.map_err(|err| AppError::bad_request(err.body_text()))?;
    let quantidade = request.ticket_count()?;

    tracing::info!(raspadinha_id = %request.raspadinha_id, quantidade, "requesting instant draw");

    let call = ApiCall::post(
        "/sorteio/instantaneo",
        json!({ "raspadinha_id": request.raspadinha_id, "quantidade": quantidade }),
    );
    let outcome = state.upstream.call(Some(bearer.as_str()), call).await?;

    Ok(Json(outcome))
}
