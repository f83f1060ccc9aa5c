use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde_json::Value;
use uuid::Uuid;

use crate::app::AppState;
use crate::authz::PageTag;
use crate::bearer::BearerToken;
use crate::errors::{AppError, AppResult};
use crate::guard::check_page_access;
use crate::models::decode_rows;
use crate::models::influencer::{Influencer, InfluencerRow};
use crate::session::CookieSessionStore;
use crate::upstream::{ApiCall, TableQuery};

const TABLE: &str = "influencers";

fn influencer_id(id: Result<Path<Uuid>, PathRejection>) -> AppResult<Uuid> {
    id.map(|Path(id)| id)
        .map_err(|_| AppError::bad_request("invalid influencer id"))
}

#[utoipa::path(
    get,
    path = "/api/influencers",
    tag = "Influencers",
    responses(
        (status = 200, description = "Referral program participants", body = Vec<Influencer>),
        (status = 401, description = "Missing bearer token")
    ),
    security(("bearerAuth" = []))
)]
pub async fn list_influencers(
    State(state): State<AppState>,
    bearer: BearerToken,
    session: CookieSessionStore,
) -> AppResult<Json<Vec<Influencer>>> {
    check_page_access(state.config.authz_mode, &session, PageTag::Influencers)?;

    let query = TableQuery::new(TABLE).order("created_at", false);
    let rows = state.upstream.select(Some(bearer.as_str()), query).await?;
    let rows: Vec<InfluencerRow> = decode_rows(rows)?;

    Ok(Json(rows.into_iter().map(Influencer::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/influencers/{id}",
    tag = "Influencers",
    params(("id" = Uuid, Path, description = "Influencer id")),
    responses(
        (status = 200, description = "Influencer detail", body = Influencer),
        (status = 400, description = "Malformed id"),
        (status = 404, description = "Influencer not found")
    ),
    security(("bearerAuth" = []))
)]
pub async fn get_influencer(
    State(state): State<AppState>,
    bearer: BearerToken,
    session: CookieSessionStore,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<Influencer>> {
    let id = influencer_id(id)?;
    check_page_access(state.config.authz_mode, &session, PageTag::Influencers)?;

    let query = TableQuery::new(TABLE).eq("id", id).limit(1);
    let rows = state.upstream.select(Some(bearer.as_str()), query).await?;
    let row = decode_rows::<InfluencerRow>(rows)?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::not_found("influencer not found"))?;

    Ok(Json(Influencer::from(row)))
}

/// Commission breakdown is computed by the business API and passed through as-is.
#[utoipa::path(
    get,
    path = "/api/influencers/{id}/comissoes",
    tag = "Influencers",
    params(("id" = Uuid, Path, description = "Influencer id")),
    responses(
        (status = 200, description = "Commission report from the business API"),
        (status = 400, description = "Malformed id")
    ),
    security(("bearerAuth" = []))
)]
pub async fn influencer_commissions(
    State(state): State<AppState>,
    bearer: BearerToken,
    session: CookieSessionStore,
    id: Result<Path<Uuid>, PathRejection>,
) -> AppResult<Json<Value>> {
    let id = influencer_id(id)?;
    check_page_access(state.config.authz_mode, &session, PageTag::Influencers)?;

    let call = ApiCall::get(format!("/influencers/{id}/comissoes"));
    let report = state.upstream.call(Some(bearer.as_str()), call).await?;

    Ok(Json(report))
}
