//! Server-rendered admin shells. The real UI is loaded client-side; these
//! handlers only decide whether a page may render at all.

use axum::extract::{Path, State};
use axum::response::{Html, Response};

use crate::app::AppState;
use crate::authz::{PageTag, PermissionEvaluator};
use crate::config::{same_path, AppConfig};
use crate::errors::{AppError, AppResult};
use crate::guard::{hard_redirect, PageGuard, PermissionState};
use crate::session::{admin_data_raw, clear_admin_session, CookieSessionStore};

const LOGIN_HTML: &str = r#"<!doctype html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>RaspePix Admin - Login</title></head>
<body><main id="admin-login" data-endpoint="/api/admin/login"></main></body>
</html>"#;

const ACCESS_DENIED_HTML: &str = r#"<!doctype html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>RaspePix Admin</title></head>
<body><section class="access-denied"><h1>Acesso negado</h1><p>Você não tem permissão para acessar esta página.</p></section></body>
</html>"#;

fn page_title(tag: PageTag) -> &'static str {
    match tag {
        PageTag::Dashboard => "Dashboard",
        PageTag::Clientes => "Clientes",
        PageTag::Auditoria => "Auditoria",
        PageTag::PortalDoSorteado => "Portal do Sorteado",
        PageTag::Integracao => "Integração",
        PageTag::Influencers => "Influencers",
        PageTag::Afiliados => "Afiliados",
        PageTag::Hq => "HQ",
        PageTag::Configuracoes => "Configurações",
    }
}

fn page_shell(tag: PageTag) -> String {
    format!(
        r#"<!doctype html>
<html lang="pt-BR">
<head><meta charset="utf-8"><title>RaspePix Admin - {title}</title></head>
<body><main id="admin-page" data-page="{tag}"><h1>{title}</h1></main></body>
</html>"#,
        title = page_title(tag),
        tag = tag.as_str(),
    )
}

fn page_path(tag: PageTag) -> String {
    format!("/admin/{}", tag)
}

/// Whichever page the configured dashboard path names is where denied pages
/// send users, so that page shows the panel instead of redirecting.
pub fn page_guard_for(tag: PageTag, config: &AppConfig) -> PageGuard {
    let guard = PageGuard::new(tag, config.dashboard_path.as_str());
    if same_path(&page_path(tag), &config.dashboard_path) {
        guard.with_fallback(ACCESS_DENIED_HTML)
    } else {
        guard
    }
}

pub async fn login_page() -> Html<&'static str> {
    Html(LOGIN_HTML)
}

pub async fn admin_root(State(state): State<AppState>) -> Response {
    hard_redirect(&state.config.dashboard_path)
}

pub async fn logout(State(state): State<AppState>, session: CookieSessionStore) -> Response {
    clear_admin_session(&session);
    tracing::info!("admin session cleared");
    hard_redirect(&state.config.login_path)
}

pub async fn admin_page(
    State(state): State<AppState>,
    session: CookieSessionStore,
    Path(page): Path<String>,
) -> AppResult<Response> {
    let tag: PageTag = page
        .parse()
        .map_err(|_| AppError::not_found("page not found"))?;

    let evaluator = PermissionEvaluator::from_cookie(admin_data_raw(&session).as_deref());
    let guard = page_guard_for(tag, &state.config);

    Ok(guard.respond(&PermissionState::Loaded(evaluator), || page_shell(tag)))
}
