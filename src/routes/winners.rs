use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::app::AppState;
use crate::authz::PageTag;
use crate::bearer::BearerToken;
use crate::errors::{AppError, AppResult};
use crate::guard::check_page_access;
use crate::models::decode_rows;
use crate::models::winner::{Winner, WinnerRow, WinnersQuery, DEFAULT_WINNERS_LIMIT, MAX_WINNERS_LIMIT};
use crate::session::CookieSessionStore;
use crate::upstream::TableQuery;

#[utoipa::path(
    get,
    path = "/api/ganhadores",
    tag = "Ganhadores",
    params(WinnersQuery),
    responses(
        (status = 200, description = "Most recent winners", body = Vec<Winner>),
        (status = 400, description = "limit out of range")
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_winners(
    State(state): State<AppState>,
    bearer: BearerToken,
    session: CookieSessionStore,
    query: Result<Query<WinnersQuery>, QueryRejection>,
) -> AppResult<Json<Vec<Winner>>> {
    let Query(query) = query.map_err(|err| AppError::bad_request(err.body_text()))?;
    let limit = query.limit.unwrap_or(DEFAULT_WINNERS_LIMIT);
    if limit == 0 || limit > MAX_WINNERS_LIMIT {
        return Err(AppError::bad_request(format!(
            "limit must be between 1 and {}",
            MAX_WINNERS_LIMIT
        )));
    }

    check_page_access(state.config.authz_mode, &session, PageTag::PortalDoSorteado)?;

    let table_query = TableQuery::new("ganhadores")
        .order("created_at", false)
        .limit(limit);
    let rows = state.upstream.select(Some(bearer.as_str()), table_query).await?;
    let rows: Vec<WinnerRow> = decode_rows(rows)?;

    Ok(Json(rows.into_iter().map(Winner::from).collect()))
}
