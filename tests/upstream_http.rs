use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use axum::extract::{Path, RawQuery, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};

use raspepix::config::AppConfig;
use raspepix::upstream::{ApiCall, HttpUpstream, TableQuery, Upstream, UpstreamError};

#[derive(Debug, Clone)]
struct Seen {
    path: String,
    query: Option<String>,
    apikey: Option<String>,
    authorization: Option<String>,
    body: Option<Value>,
}

type Log = Arc<Mutex<Vec<Seen>>>;

fn header(headers: &HeaderMap, name: &str) -> Option<String> {
    headers.get(name).and_then(|v| v.to_str().ok()).map(str::to_string)
}

async fn rest_table(
    State(log): State<Log>,
    Path(table): Path<String>,
    RawQuery(query): RawQuery,
    headers: HeaderMap,
) -> axum::response::Response {
    log.lock().unwrap().push(Seen {
        path: format!("/rest/v1/{table}"),
        query,
        apikey: header(&headers, "apikey"),
        authorization: header(&headers, "authorization"),
        body: None,
    });

    match table.as_str() {
        "influencers" => Json(json!([{"id": 1, "nome": "Maria"}])).into_response(),
        "broken" => (StatusCode::SERVICE_UNAVAILABLE, "database is restarting").into_response(),
        "forbidden" => (StatusCode::UNAUTHORIZED, r#"{"message":"JWT expired"}"#).into_response(),
        _ => Json(json!({"not": "an array"})).into_response(),
    }
}

async fn draw(State(log): State<Log>, headers: HeaderMap, Json(body): Json<Value>) -> Json<Value> {
    log.lock().unwrap().push(Seen {
        path: "/api/sorteio/instantaneo".to_string(),
        query: None,
        apikey: header(&headers, "apikey"),
        authorization: header(&headers, "authorization"),
        body: Some(body.clone()),
    });
    Json(json!({"echo": body}))
}

async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

async fn spawn_fake() -> Result<(SocketAddr, Log)> {
    let log: Log = Arc::new(Mutex::new(Vec::new()));
    let router = Router::new()
        .route("/rest/v1/:table", get(rest_table))
        .route("/api/sorteio/instantaneo", post(draw))
        .route("/api/empty", get(no_content))
        .with_state(log.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok((addr, log))
}

fn client(addr: SocketAddr) -> Result<HttpUpstream> {
    let config = AppConfig::new(format!("http://{addr}/"), "anon-key", format!("http://{addr}/api"));
    Ok(HttpUpstream::new(&config)?)
}

#[tokio::test]
async fn select_builds_postgrest_request() -> Result<()> {
    let (addr, log) = spawn_fake().await?;
    let upstream = client(addr)?;

    let query = TableQuery::new("influencers")
        .eq("ativo", true)
        .order("created_at", false)
        .limit(5);
    let rows = upstream.select(Some("user-jwt"), query).await?;
    assert_eq!(rows, vec![json!({"id": 1, "nome": "Maria"})]);

    let seen = log.lock().unwrap().clone();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].path, "/rest/v1/influencers");
    assert_eq!(seen[0].apikey.as_deref(), Some("anon-key"));
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer user-jwt"));

    let query = seen[0].query.clone().unwrap_or_default();
    assert!(query.contains("select=*") || query.contains("select=%2A"), "query was {query}");
    assert!(query.contains("ativo=eq.true"), "query was {query}");
    assert!(query.contains("order=created_at.desc"), "query was {query}");
    assert!(query.contains("limit=5"), "query was {query}");

    Ok(())
}

#[tokio::test]
async fn select_without_caller_uses_anon_key() -> Result<()> {
    let (addr, log) = spawn_fake().await?;
    let upstream = client(addr)?;

    upstream.select(None, TableQuery::new("influencers")).await?;

    let seen = log.lock().unwrap().clone();
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer anon-key"));

    Ok(())
}

#[tokio::test]
async fn select_surfaces_status_and_decode_errors() -> Result<()> {
    let (addr, _log) = spawn_fake().await?;
    let upstream = client(addr)?;

    match upstream.select(None, TableQuery::new("broken")).await {
        Err(UpstreamError::Status { status, body }) => {
            assert_eq!(status, 503);
            assert_eq!(body, "database is restarting");
        }
        other => panic!("expected status error, got {other:?}"),
    }

    let err = upstream
        .select(Some("old"), TableQuery::new("forbidden"))
        .await
        .expect_err("401 from upstream");
    assert_eq!(err.status_code(), Some(401));

    let err = upstream
        .select(None, TableQuery::new("settings"))
        .await
        .expect_err("object is not a row list");
    assert!(matches!(err, UpstreamError::Decode(_)));

    Ok(())
}

#[tokio::test]
async fn call_forwards_bearer_and_body() -> Result<()> {
    let (addr, log) = spawn_fake().await?;
    let upstream = client(addr)?;

    let body = json!({"raspadinha_id": "abc", "quantidade": 2});
    let response = upstream
        .call(Some("user-jwt"), ApiCall::post("/sorteio/instantaneo", body.clone()))
        .await?;
    assert_eq!(response, json!({"echo": body}));

    let seen = log.lock().unwrap().clone();
    assert_eq!(seen[0].authorization.as_deref(), Some("Bearer user-jwt"));
    assert_eq!(seen[0].apikey, None);
    assert_eq!(seen[0].body, Some(body));

    Ok(())
}

#[tokio::test]
async fn call_treats_empty_body_as_null() -> Result<()> {
    let (addr, _log) = spawn_fake().await?;
    let upstream = client(addr)?;

    let value = upstream.call(None, ApiCall::get("empty")).await?;
    assert_eq!(value, Value::Null);

    let err = upstream
        .call(None, ApiCall::get("/missing"))
        .await
        .expect_err("unknown route");
    assert_eq!(err.status_code(), Some(404));

    Ok(())
}
