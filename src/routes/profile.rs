use axum::extract::State;
use axum::Json;

use crate::app::AppState;
use crate::bearer::BearerToken;
use crate::errors::{AppError, AppResult};
use crate::models::decode_rows;
use crate::models::profile::{Profile, ProfileRow};
use crate::upstream::TableQuery;

/// Row-level security on `profiles` limits the result to the token's owner.
#[utoipa::path(
    get,
    path = "/api/profile",
    tag = "Profile",
    responses(
        (status = 200, description = "Caller's profile", body = Profile),
        (status = 401, description = "Missing or rejected bearer token"),
        (status = 404, description = "Profile not found")
    ),
    security(("bearerAuth" = []))
)]
pub async fn get_profile(State(state): State<AppState>, bearer: BearerToken) -> AppResult<Json<Profile>> {
    let query = TableQuery::new("profiles").limit(1);
    let rows = state.upstream.select(Some(bearer.as_str()), query).await?;
    let row = decode_rows::<ProfileRow>(rows)?
        .into_iter()
        .next()
        .ok_or_else(|| AppError::not_found("profile not found"))?;

    Ok(Json(Profile::from(row)))
}
