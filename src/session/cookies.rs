use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use tower_cookies::cookie::SameSite;
use tower_cookies::{Cookie, Cookies};

use super::SessionStore;
use crate::app::AppState;
use crate::errors::AppError;

/// Path shared by every admin cookie so removal matches what was written.
const COOKIE_PATH: &str = "/";

/// [`SessionStore`] over the request's cookie jar. Writes land in the
/// response's `Set-Cookie` headers via `CookieManagerLayer`.
#[derive(Clone)]
pub struct CookieSessionStore {
    cookies: Cookies,
    secure: bool,
}

impl CookieSessionStore {
    pub fn new(cookies: Cookies, secure: bool) -> Self {
        Self { cookies, secure }
    }
}

impl SessionStore for CookieSessionStore {
    fn get(&self, name: &str) -> Option<String> {
        self.cookies.get(name).map(|cookie| cookie.value().to_string())
    }

    fn set(&self, name: &str, value: String) {
        let mut cookie = Cookie::new(name.to_string(), percent_encode(&value));
        cookie.set_path(COOKIE_PATH);
        cookie.set_same_site(SameSite::Lax);
        cookie.set_secure(self.secure);
        self.cookies.add(cookie);
    }

    fn clear(&self, name: &str) {
        let mut cookie = Cookie::new(name.to_string(), "");
        cookie.set_path(COOKIE_PATH);
        self.cookies.remove(cookie);
    }
}

/// Percent-encodes a cookie value with the set `cookie` uses, matching the
/// `parse_encoded` decoding applied to incoming `Cookie` headers.
fn percent_encode(value: &str) -> String {
    let pair = Cookie::new("", value).encoded().stripped().to_string();
    match pair.strip_prefix('=') {
        Some(encoded) => encoded.to_string(),
        None => pair,
    }
}

#[async_trait]
impl FromRequestParts<AppState> for CookieSessionStore {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let cookies = Cookies::from_request_parts(parts, state)
            .await
            .map_err(|(_, msg)| AppError::internal(format!("cookie jar unavailable: {msg}")))?;

        Ok(CookieSessionStore::new(cookies, state.config.cookie_secure))
    }
}
