use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use super::route::hard_redirect;
use crate::authz::{PageTag, PermissionEvaluator};

const LOADING_HTML: &str = r#"<div class="page-loading" role="status">Carregando...</div>"#;

/// Permission data as seen by a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PermissionState {
    Loading,
    Loaded(PermissionEvaluator),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageDecision {
    Loading,
    Render,
    Fallback,
    Redirect(String),
}

/// Wraps one admin page and requires a single page tag.
///
/// This only keeps unauthorized users from seeing a page render. The cookie it
/// reads is client-controlled, so data endpoints must enforce access upstream.
#[derive(Debug, Clone)]
pub struct PageGuard {
    required: PageTag,
    fallback: Option<String>,
    dashboard_path: String,
}

impl PageGuard {
    pub fn new(required: PageTag, dashboard_path: impl Into<String>) -> Self {
        Self {
            required,
            fallback: None,
            dashboard_path: dashboard_path.into(),
        }
    }

    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = Some(fallback.into());
        self
    }

    pub fn required(&self) -> PageTag {
        self.required
    }

    pub fn decide(&self, state: &PermissionState) -> PageDecision {
        let evaluator = match state {
            PermissionState::Loading => return PageDecision::Loading,
            PermissionState::Loaded(evaluator) => evaluator,
        };

        if evaluator.has_page(self.required) {
            return PageDecision::Render;
        }

        match self.fallback {
            Some(_) => PageDecision::Fallback,
            None => PageDecision::Redirect(self.dashboard_path.clone()),
        }
    }

    pub fn respond<F>(&self, state: &PermissionState, content: F) -> Response
    where
        F: FnOnce() -> String,
    {
        match self.decide(state) {
            PageDecision::Loading => Html(LOADING_HTML).into_response(),
            PageDecision::Render => Html(content()).into_response(),
            PageDecision::Fallback => {
                tracing::info!(page = %self.required, "page access denied, showing fallback");
                let body = self.fallback.clone().unwrap_or_default();
                (StatusCode::FORBIDDEN, Html(body)).into_response()
            }
            PageDecision::Redirect(location) => {
                tracing::info!(page = %self.required, "page access denied, redirecting");
                hard_redirect(&location)
            }
        }
    }
}
