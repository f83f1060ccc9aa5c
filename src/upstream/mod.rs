//! External collaborators: the Supabase REST endpoint and the internal business API.
//!
//! Handlers talk to both through the [`Upstream`] trait so routes can be
//! exercised against an in-process fake.

mod http;

pub use http::HttpUpstream;

use async_trait::async_trait;
use serde_json::Value;

#[derive(thiserror::Error, Debug)]
pub enum UpstreamError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned {status}: {body}")]
    Status { status: u16, body: String },
    #[error("failed to decode upstream payload: {0}")]
    Decode(String),
}

impl UpstreamError {
    pub fn status_code(&self) -> Option<u16> {
        match self {
            UpstreamError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Row query against a database table exposed over PostgREST.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    pub table: String,
    pub columns: String,
    pub filters: Vec<(String, String)>,
    pub order: Option<(String, bool)>,
    pub limit: Option<u32>,
}

impl TableQuery {
    pub fn new(table: &str) -> Self {
        Self {
            table: table.to_string(),
            columns: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn select(mut self, columns: &str) -> Self {
        self.columns = columns.to_string();
        self
    }

    pub fn eq(mut self, column: &str, value: impl ToString) -> Self {
        self.filters.push((column.to_string(), value.to_string()));
        self
    }

    pub fn order(mut self, column: &str, ascending: bool) -> Self {
        self.order = Some((column.to_string(), ascending));
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Query-string pairs in PostgREST syntax.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![("select".to_string(), self.columns.clone())];
        for (column, value) in &self.filters {
            params.push((column.clone(), format!("eq.{value}")));
        }
        if let Some((column, ascending)) = &self.order {
            let direction = if *ascending { "asc" } else { "desc" };
            params.push(("order".to_string(), format!("{column}.{direction}")));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
}

/// Call against the internal business API.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiCall {
    pub method: ApiMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiCall {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: ApiMethod::Get,
            path: path.into(),
            body: None,
        }
    }

    pub fn post(path: impl Into<String>, body: Value) -> Self {
        Self {
            method: ApiMethod::Post,
            path: path.into(),
            body: Some(body),
        }
    }
}

#[async_trait]
pub trait Upstream: Send + Sync {
    /// Fetch rows. `bearer` is the caller's credential, forwarded untouched.
    async fn select(&self, bearer: Option<&str>, query: TableQuery) -> Result<Vec<Value>, UpstreamError>;

    /// Perform one business API call and return its JSON body.
    async fn call(&self, bearer: Option<&str>, call: ApiCall) -> Result<Value, UpstreamError>;
}
