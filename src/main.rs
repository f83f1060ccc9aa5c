use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum_server::tls_rustls::RustlsConfig;

use raspepix::config::AppConfig;
use raspepix::upstream::HttpUpstream;
use raspepix::{create_app, docs, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_env();
    init_tracing();

    let config = AppConfig::from_env()?;
    let upstream = HttpUpstream::new(&config)?;
    let port = config.port;

    tracing::info!(
        supabase = %config.supabase_url,
        api = %config.api_base_url,
        authz_mode = ?config.authz_mode,
        "configuration loaded"
    );

    let state = AppState::new(config, Arc::new(upstream));
    let app = create_app(state).merge(docs::swagger_routes(docs::build_openapi(port))?);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));

    match tls_paths() {
        Some((cert, key)) => {
            let tls = RustlsConfig::from_pem_file(&cert, &key)
                .await
                .with_context(|| format!("failed to load TLS material from {cert} and {key}"))?;
            tracing::info!("listening on https://{}", addr);
            axum_server::bind_rustls(addr, tls)
                .serve(app.into_make_service())
                .await?;
        }
        None => {
            tracing::info!("listening on http://{}", addr);
            let listener = tokio::net::TcpListener::bind(addr).await?;
            axum::serve(listener, app.into_make_service()).await?;
        }
    }

    Ok(())
}

fn tls_paths() -> Option<(String, String)> {
    let cert = std::env::var("TLS_CERT_PATH").ok().filter(|v| !v.is_empty())?;
    let key = std::env::var("TLS_KEY_PATH").ok().filter(|v| !v.is_empty())?;
    Some((cert, key))
}

fn load_env() {
    if dotenvy::dotenv().is_ok() {
        return;
    }

    let crate_env = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env");
    let _ = dotenvy::from_path(crate_env);
}

fn init_tracing() {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    let filter_layer = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
