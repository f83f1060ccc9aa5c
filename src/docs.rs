use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Json, Router};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::openapi::server::Server;
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::{authz, models, routes};

#[derive(OpenApi)]
#[openapi(
	paths(
		routes::health::health,
		routes::admin::login,
		routes::admin::logout,
		routes::admin::permissions,
		routes::influencers::list_influencers,
		routes::influencers::get_influencer,
		routes::influencers::influencer_commissions,
		routes::winners::list_winners,
		routes::capitalization::list_numbers,
		routes::promotions::list_promotions,
		routes::profile::get_profile,
		routes::draws::instant_draw,
		routes::dashboard::metrics
	),
	components(
		schemas(
			authz::AdminPermissionSet,
			models::admin::AdminLoginRequest,
			models::admin::AdminPermissionsResponse,
			models::admin::MessageResponse,
			models::influencer::Influencer,
			models::winner::Winner,
			models::promotion::Promotion,
			models::profile::Profile,
			models::draw::DrawRequest,
			routes::health::HealthResponse
		)
	),
	modifiers(&BearerAuth),
	tags(
		(name = "Admin", description = "Admin session cookies"),
		(name = "Influencers", description = "Referral program"),
		(name = "Ganhadores", description = "Winners portal"),
		(name = "Sorteio", description = "Instant scratch-card draws"),
		(name = "Dashboard", description = "Back-office metrics")
	)
)]
pub struct ApiDoc;

struct BearerAuth;

impl Modify for BearerAuth {
	fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
		if let Some(components) = openapi.components.as_mut() {
			components.add_security_scheme(
				"bearerAuth",
				SecurityScheme::Http(HttpBuilder::new().scheme(HttpAuthScheme::Bearer).build()),
			);
		}
	}
}

pub fn build_openapi(port: u16) -> utoipa::openapi::OpenApi {
	let mut doc = ApiDoc::openapi();
	doc.servers = Some(vec![Server::new(format!("http://localhost:{}", port))]);
	doc
}

pub fn write_openapi(path: &Path, port: u16) -> anyhow::Result<()> {
	let doc = build_openapi(port);
	let json = serde_json::to_string_pretty(&doc).context("failed to serialize OpenAPI")?;
	std::fs::write(path, json).with_context(|| format!("failed to write {}", path.display()))?;
	Ok(())
}

pub fn swagger_routes(doc: utoipa::openapi::OpenApi) -> anyhow::Result<Router> {
	let swagger_config = utoipa_swagger_ui::Config::new(["/api-docs/openapi.json"])
		.try_it_out_enabled(true)
		.with_credentials(true)
		.persist_authorization(true);

	let doc_json = Arc::new(serde_json::to_value(&doc).context("failed to serialize OpenAPI")?);

	let json_route = {
		let doc_json = Arc::clone(&doc_json);
		get(move || {
			let doc_json = Arc::clone(&doc_json);
			async move { Json((*doc_json).clone()) }
		})
	};

	Ok(Router::new()
		.route("/api-docs/openapi.json", json_route)
		.merge(SwaggerUi::new("/docs").config(swagger_config)))
}
