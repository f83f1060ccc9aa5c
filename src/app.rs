use std::sync::Arc;

use axum::http::Method;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_cookies::CookieManagerLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppConfig;
use crate::guard::require_admin_session;
use crate::routes::{admin, capitalization, dashboard, draws, health, influencers, pages, profile, promotions, winners};
use crate::upstream::Upstream;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub upstream: Arc<dyn Upstream>,
}

impl AppState {
    pub fn new(config: AppConfig, upstream: Arc<dyn Upstream>) -> Self {
        Self {
            config: Arc::new(config),
            upstream,
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_origin(Any)
        .allow_headers(Any);

    // Every admin page, the login page included, passes through the session gate.
    let admin_pages = Router::new()
        .route("/admin", get(pages::admin_root))
        .route(&state.config.login_path, get(pages::login_page))
        .route("/admin/logout", get(pages::logout))
        .route("/admin/:page", get(pages::admin_page))
        .route_layer(middleware::from_fn_with_state(state.clone(), require_admin_session));

    let admin_api = Router::new()
        .route("/login", post(admin::login))
        .route("/logout", post(admin::logout))
        .route("/permissions", get(admin::permissions));

    let influencer_routes = Router::new()
        .route("/", get(influencers::list_influencers))
        .route("/:id", get(influencers::get_influencer))
        .route("/:id/comissoes", get(influencers::influencer_commissions));

    let api = Router::new()
        .route("/health", get(health::health))
        .nest("/admin", admin_api)
        .nest("/influencers", influencer_routes)
        .route("/ganhadores", get(winners::list_winners))
        .route("/numeros-capitalizadora", get(capitalization::list_numbers))
        .route("/promocoes", get(promotions::list_promotions))
        .route("/profile", get(profile::get_profile))
        .route("/sorteio/instantaneo", post(draws::instant_draw))
        .route("/dashboard/metrics", get(dashboard::metrics));

    Router::new()
        .merge(admin_pages)
        .nest("/api", api)
        .with_state(state)
        .layer(CookieManagerLayer::new())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
