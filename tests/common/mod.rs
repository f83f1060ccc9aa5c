#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{self, Body};
use axum::http::{Request, Response};
use axum::Router;
use serde_json::Value;
use tower::util::ServiceExt;

use raspepix::authz::AuthzMode;
use raspepix::config::AppConfig;
use raspepix::upstream::{ApiCall, TableQuery, Upstream, UpstreamError};
use raspepix::{create_app, AppState};

pub const TOKEN: &str = "test-admin-token";
pub const SUPORTE_DATA: &str = r#"{"permissoes_pagina":["dashboard","clientes"],"funcao":"Suporte"}"#;
pub const ADMIN_DATA: &str = r#"{"permissoes_pagina":["*"],"funcao":"Administrador"}"#;

#[derive(Debug, Clone)]
pub enum Recorded {
    Select { bearer: Option<String>, query: TableQuery },
    Call { bearer: Option<String>, call: ApiCall },
}

/// In-process stand-in for Supabase and the business API.
#[derive(Default)]
pub struct FakeUpstream {
    tables: Mutex<HashMap<String, Vec<Value>>>,
    table_errors: Mutex<HashMap<String, (u16, String)>>,
    api: Mutex<HashMap<String, Result<Value, (u16, String)>>>,
    recorded: Mutex<Vec<Recorded>>,
}

impl FakeUpstream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rows(self, table: &str, rows: Vec<Value>) -> Self {
        self.tables.lock().unwrap().insert(table.to_string(), rows);
        self
    }

    pub fn with_table_error(self, table: &str, status: u16, body: &str) -> Self {
        self.table_errors
            .lock()
            .unwrap()
            .insert(table.to_string(), (status, body.to_string()));
        self
    }

    pub fn with_api(self, path: &str, body: Value) -> Self {
        self.api.lock().unwrap().insert(path.to_string(), Ok(body));
        self
    }

    pub fn with_api_error(self, path: &str, status: u16, body: &str) -> Self {
        self.api
            .lock()
            .unwrap()
            .insert(path.to_string(), Err((status, body.to_string())));
        self
    }

    pub fn recorded(&self) -> Vec<Recorded> {
        self.recorded.lock().unwrap().clone()
    }
}

#[async_trait]
impl Upstream for FakeUpstream {
    async fn select(&self, bearer: Option<&str>, query: TableQuery) -> Result<Vec<Value>, UpstreamError> {
        self.recorded.lock().unwrap().push(Recorded::Select {
            bearer: bearer.map(str::to_string),
            query: query.clone(),
        });

        if let Some((status, body)) = self.table_errors.lock().unwrap().get(&query.table).cloned() {
            return Err(UpstreamError::Status { status, body });
        }

        let rows = self
            .tables
            .lock()
            .unwrap()
            .get(&query.table)
            .cloned()
            .unwrap_or_default();

        // Honour equality filters so lookups by id behave like PostgREST.
        let rows = rows
            .into_iter()
            .filter(|row| {
                query.filters.iter().all(|(column, value)| match row.get(column) {
                    Some(Value::String(s)) => s == value,
                    Some(other) => other.to_string() == *value,
                    None => false,
                })
            })
            .collect();

        Ok(rows)
    }

    async fn call(&self, bearer: Option<&str>, call: ApiCall) -> Result<Value, UpstreamError> {
        self.recorded.lock().unwrap().push(Recorded::Call {
            bearer: bearer.map(str::to_string),
            call: call.clone(),
        });

        match self.api.lock().unwrap().get(&call.path).cloned() {
            Some(Ok(body)) => Ok(body),
            Some(Err((status, body))) => Err(UpstreamError::Status { status, body }),
            None => Err(UpstreamError::Status {
                status: 404,
                body: format!("no route {}", call.path),
            }),
        }
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::new("http://supabase.test", "anon-key", "http://api.test");
    config.cookie_secure = false;
    config
}

pub fn app_with(upstream: Arc<FakeUpstream>, mode: AuthzMode) -> Router {
    app_with_config(upstream, test_config().with_authz_mode(mode))
}

pub fn app_with_config(upstream: Arc<FakeUpstream>, config: AppConfig) -> Router {
    create_app(AppState::new(config, upstream))
}

pub fn app(upstream: Arc<FakeUpstream>) -> Router {
    app_with(upstream, AuthzMode::Off)
}

pub fn cookie_header(token: Option<&str>, data: Option<&str>) -> String {
    let mut parts = Vec::new();
    if let Some(token) = token {
        parts.push(format!("admin_token={}", token));
    }
    if let Some(data) = data {
        parts.push(format!("admin_data={}", data));
    }
    parts.join("; ")
}

pub async fn send(app: &Router, request: Request<Body>) -> anyhow::Result<Response<Body>> {
    Ok(app.clone().oneshot(request).await?)
}

pub async fn json_body(response: Response<Body>) -> anyhow::Result<Value> {
    let bytes = body::to_bytes(response.into_body(), 10_485_760).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

pub async fn text_body(response: Response<Body>) -> anyhow::Result<String> {
    let bytes = body::to_bytes(response.into_body(), 10_485_760).await?;
    Ok(String::from_utf8_lossy(&bytes).to_string())
}

pub fn set_cookies(response: &Response<Body>) -> Vec<String> {
    response
        .headers()
        .get_all(axum::http::header::SET_COOKIE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .map(str::to_string)
        .collect()
}
