use std::time::Duration;

use crate::authz::AuthzMode;
use crate::errors::AppError;

pub const DEFAULT_LOGIN_PATH: &str = "/admin/login";
pub const DEFAULT_DASHBOARD_PATH: &str = "/admin/dashboard";

/// Routes the admin shell registers itself; a configured login path cannot reuse them.
const RESERVED_PATHS: [&str; 2] = ["/admin", "/admin/logout"];

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub api_base_url: String,
    pub port: u16,
    pub login_path: String,
    pub dashboard_path: String,
    pub cookie_secure: bool,
    pub upstream_timeout: Duration,
    pub authz_mode: AuthzMode,
}

impl AppConfig {
    /// Config with defaults for everything except the upstream locations.
    pub fn new(
        supabase_url: impl Into<String>,
        supabase_anon_key: impl Into<String>,
        api_base_url: impl Into<String>,
    ) -> Self {
        Self {
            supabase_url: supabase_url.into(),
            supabase_anon_key: supabase_anon_key.into(),
            api_base_url: api_base_url.into(),
            port: 8000,
            login_path: DEFAULT_LOGIN_PATH.to_string(),
            dashboard_path: DEFAULT_DASHBOARD_PATH.to_string(),
            cookie_secure: true,
            upstream_timeout: Duration::from_secs(15),
            authz_mode: AuthzMode::Off,
        }
    }

    pub fn with_authz_mode(mut self, mode: AuthzMode) -> Self {
        self.authz_mode = mode;
        self
    }

    pub fn from_env() -> Result<Self, AppError> {
        let supabase_url = required("SUPABASE_URL")?;
        let supabase_anon_key = required("SUPABASE_ANON_KEY")?;
        let api_base_url = required("API_BASE_URL")?;

        let mut config = Self::new(supabase_url, supabase_anon_key, api_base_url);

        config.port = std::env::var("APP_PORT")
            .map(|val| val.parse::<u16>())
            .unwrap_or(Ok(config.port))
            .map_err(|_| AppError::configuration("APP_PORT must be a valid port number"))?;

        if let Ok(path) = std::env::var("ADMIN_LOGIN_PATH") {
            config.login_path = normalize_path(&path);
        }
        if let Ok(path) = std::env::var("ADMIN_DASHBOARD_PATH") {
            config.dashboard_path = normalize_path(&path);
        }

        config.cookie_secure = std::env::var("COOKIE_SECURE")
            .map(|val| parse_bool(&val))
            .unwrap_or(Some(true))
            .ok_or_else(|| AppError::configuration("COOKIE_SECURE must be true or false"))?;

        let timeout_secs = std::env::var("UPSTREAM_TIMEOUT_SECS")
            .map(|val| val.parse::<u64>())
            .unwrap_or(Ok(15))
            .map_err(|_| AppError::configuration("UPSTREAM_TIMEOUT_SECS must be a valid integer"))?;
        config.upstream_timeout = Duration::from_secs(timeout_secs);

        config.authz_mode = AuthzMode::parse(&std::env::var("AUTHZ_MODE").unwrap_or_default());

        config.validate()?;
        Ok(config)
    }

    /// Rejects page paths the router cannot serve or that would send the guards in circles.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, path) in [
            ("ADMIN_LOGIN_PATH", &self.login_path),
            ("ADMIN_DASHBOARD_PATH", &self.dashboard_path),
        ] {
            if !path.starts_with('/') {
                return Err(AppError::configuration(format!("{name} must start with '/'")));
            }
            if path == "/api" || path.starts_with("/api/") {
                return Err(AppError::configuration(format!("{name} cannot live under /api")));
            }
        }

        if RESERVED_PATHS.contains(&self.login_path.as_str()) {
            return Err(AppError::configuration(format!(
                "ADMIN_LOGIN_PATH cannot be {}",
                self.login_path
            )));
        }
        if self.login_path == self.dashboard_path {
            return Err(AppError::configuration(
                "ADMIN_LOGIN_PATH and ADMIN_DASHBOARD_PATH must differ",
            ));
        }

        Ok(())
    }
}

/// Trims whitespace and trailing slashes; the root path stays `/`.
pub fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Slash-tolerant comparison of two request paths.
pub fn same_path(a: &str, b: &str) -> bool {
    a.trim_end_matches('/') == b.trim_end_matches('/')
}

fn required(name: &str) -> Result<String, AppError> {
    std::env::var(name)
        .ok()
        .filter(|val| !val.trim().is_empty())
        .ok_or_else(|| AppError::configuration(format!("{name} not set")))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
