use axum::extract::{OriginalUri, Request, State};
use axum::http::{header, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::app::AppState;
use crate::config::same_path;
use crate::session::{admin_token, CookieSessionStore, SessionStore};

/// Outcome of the admin layout gate for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuardState {
    /// Not evaluated yet; nothing is rendered.
    #[default]
    Unknown,
    Authorized,
    Unauthorized,
}

impl GuardState {
    pub fn renders_children(&self) -> bool {
        matches!(self, GuardState::Authorized)
    }

    pub fn requires_redirect(&self) -> bool {
        matches!(self, GuardState::Unauthorized)
    }
}

/// Token-presence gate for admin pages. The token is never validated here;
/// an expired or forged value passes and is rejected later by the upstream.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    login_path: String,
}

impl RouteGuard {
    pub fn new(login_path: impl Into<String>) -> Self {
        Self {
            login_path: login_path.into(),
        }
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn is_login_path(&self, path: &str) -> bool {
        same_path(path, &self.login_path)
    }

    pub fn evaluate(&self, path: &str, store: &dyn SessionStore) -> GuardState {
        if self.is_login_path(path) {
            return GuardState::Authorized;
        }

        match admin_token(store) {
            Some(_) => GuardState::Authorized,
            None => GuardState::Unauthorized,
        }
    }
}

/// Full-page redirect. The response carries no body and must not be cached,
/// so the browser discards whatever page state it had.
pub fn hard_redirect(location: &str) -> Response {
    (
        StatusCode::SEE_OTHER,
        [
            (header::LOCATION, location.to_string()),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
    )
        .into_response()
}

pub async fn require_admin_session(
    State(state): State<AppState>,
    session: CookieSessionStore,
    request: Request,
    next: Next,
) -> Response {
    let path = request
        .extensions()
        .get::<OriginalUri>()
        .map(|uri| uri.0.path().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    let guard = RouteGuard::new(state.config.login_path.as_str());
    let outcome = guard.evaluate(&path, &session);

    if outcome.renders_children() {
        return next.run(request).await;
    }

    tracing::info!(path = %path, "no admin session, redirecting to login");
    hard_redirect(guard.login_path())
}
