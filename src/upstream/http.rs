use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;

use super::{ApiCall, ApiMethod, TableQuery, Upstream, UpstreamError};
use crate::config::AppConfig;
use crate::errors::AppError;

/// reqwest-backed client for Supabase REST and the business API.
#[derive(Debug, Clone)]
pub struct HttpUpstream {
    client: Client,
    supabase_url: String,
    anon_key: String,
    api_base_url: String,
}

impl HttpUpstream {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(config.upstream_timeout)
            .build()
            .map_err(|err| AppError::configuration(format!("failed to build http client: {err}")))?;

        Ok(Self {
            client,
            supabase_url: config.supabase_url.trim_end_matches('/').to_string(),
            anon_key: config.supabase_anon_key.clone(),
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn api_url(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{}", self.api_base_url, path)
        } else {
            format!("{}/{}", self.api_base_url, path)
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response, UpstreamError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(UpstreamError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl Upstream for HttpUpstream {
    async fn select(&self, bearer: Option<&str>, query: TableQuery) -> Result<Vec<Value>, UpstreamError> {
        let url = format!("{}/rest/v1/{}", self.supabase_url, query.table);
        let credential = bearer.unwrap_or(self.anon_key.as_str());

        tracing::debug!(table = %query.table, "querying supabase");

        let response = self
            .client
            .get(&url)
            .query(&query.to_params())
            .header("apikey", self.anon_key.as_str())
            .header("Accept", "application/json")
            .bearer_auth(credential)
            .send()
            .await?;
        let response = ensure_success(response).await?;

        let payload: Value = response
            .json()
            .await
            .map_err(|err| UpstreamError::Decode(err.to_string()))?;

        match payload {
            Value::Array(rows) => Ok(rows),
            other => Err(UpstreamError::Decode(format!(
                "expected an array of rows from {}, got {}",
                query.table,
                json_kind(&other)
            ))),
        }
    }

    async fn call(&self, bearer: Option<&str>, call: ApiCall) -> Result<Value, UpstreamError> {
        let url = self.api_url(&call.path);

        tracing::debug!(path = %call.path, method = ?call.method, "calling business api");

        let mut request = match call.method {
            ApiMethod::Get => self.client.get(&url),
            ApiMethod::Post => self.client.post(&url),
        };
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = ensure_success(request.send().await?).await?;
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|err| UpstreamError::Decode(err.to_string()))
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
