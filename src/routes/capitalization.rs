use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::Value;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::app::AppState;
use crate::authz::PageTag;
use crate::bearer::BearerToken;
use crate::errors::{AppError, AppResult};
use crate::guard::check_page_access;
use crate::session::CookieSessionStore;
use crate::upstream::TableQuery;

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NumbersQuery {
    /// Scratch card whose capitalization numbers are listed
    pub raspadinha_id: Option<String>,
}

/// Capitalization-bond numbers are returned as stored; the back office reads
/// the columns directly.
#[utoipa::path(
    get,
    path = "/api/numeros-capitalizadora",
    tag = "Integracao",
    params(NumbersQuery),
    responses(
        (status = 200, description = "Capitalization numbers for one scratch card"),
        (status = 400, description = "raspadinha_id missing or malformed")
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_numbers(
    State(state): State<AppState>,
    bearer: BearerToken,
    session: CookieSessionStore,
    Query(query): Query<NumbersQuery>,
) -> AppResult<Json<Vec<Value>>> {
    let raw_id = query
        .raspadinha_id
        .filter(|id| !id.trim().is_empty())
        .ok_or_else(|| AppError::bad_request("raspadinha_id is required"))?;
    let raspadinha_id =
        Uuid::parse_str(raw_id.trim()).map_err(|_| AppError::bad_request("raspadinha_id must be a uuid"))?;

    check_page_access(state.config.authz_mode, &session, PageTag::Integracao)?;

    let table_query = TableQuery::new("numeros_capitalizadora")
        .eq("raspadinha_id", raspadinha_id)
        .order("numero", true);
    let rows = state.upstream.select(Some(bearer.as_str()), table_query).await?;

    Ok(Json(rows))
}
