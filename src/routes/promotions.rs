use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::bearer::BearerToken;
use crate::errors::AppResult;
use crate::models::decode_rows;
use crate::models::promotion::{Promotion, PromotionRow};
use crate::upstream::TableQuery;

#[utoipa::path(
    get,
    path = "/api/promocoes",
    tag = "Promocoes",
    responses((status = 200, description = "Active promotions in display order", body = Vec<Promotion>)),
    security(("bearerAuth" = []))
)]
pub async fn list_promotions(
    State(state): State<AppState>,
    bearer: BearerToken,
) -> AppResult<Json<Vec<Promotion>>> {
    let query = TableQuery::new("promocoes")
        .eq("ativo", true)
        .order("ordem", true);
    let rows = state.upstream.select(Some(bearer.as_str()), query).await?;
    let rows: Vec<PromotionRow> = decode_rows(rows)?;

    Ok(Json(rows.into_iter().map(Promotion::from).collect()))
}
