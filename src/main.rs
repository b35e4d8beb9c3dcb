use axum::extract::DefaultBodyLimit;
use axum::{
    Router,
    extract::Extension,
    routing::{get, post},
};
use docsearch::engine::client::EngineClient;
use docsearch::engine::types::EngineConfig;
use docsearch::ingest::handlers::{handle_delete_index, handle_index_document};
use docsearch::search::handlers::handle_search;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// Uploads carry base64-encoded binaries; the default axum body cap is far
// too small for a PDF.
const MAX_BODY_BYTES: usize = 50 * 1024 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let args: Vec<String> = std::env::args().collect();

    let mut bind_addr: SocketAddr = format!(
        "0.0.0.0:{}",
        std::env::var("PORT").unwrap_or_else(|_| "3000".to_string())
    )
    .parse()?;

    match parse_bind_override(&args) {
        Ok(Some(addr)) => bind_addr = addr,
        Ok(None) => {}
        Err(err) => {
            eprintln!("{}", err);
            eprintln!("Usage: {} [--bind <addr:port>]", args[0]);
            std::process::exit(1);
        }
    }

    // 1. Storage engine client:
    let config = EngineConfig {
        base_url: std::env::var("ENGINE_URL")
            .unwrap_or_else(|_| "https://localhost:9200".to_string()),
        index: std::env::var("ENGINE_INDEX").unwrap_or_else(|_| "documents".to_string()),
        username: std::env::var("ENGINE_USERNAME").ok(),
        password: std::env::var("ENGINE_PASSWORD").ok(),
        insecure_tls: std::env::var("ENGINE_INSECURE_TLS")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false),
    };

    tracing::info!("Engine node: {} (index '{}')", config.base_url, config.index);
    let engine = Arc::new(EngineClient::new(config)?);

    // 2. Connectivity ping (startup continues either way, the engine may
    //    come up later):
    match engine.info().await {
        Ok(info) => tracing::info!("Storage engine OK, version {}", info.version.number),
        Err(err) => tracing::warn!("Storage engine unreachable at startup: {}", err),
    }

    // 3. HTTP Router:
    let app = Router::new()
        .route("/search", get(handle_search))
        .route(
            "/search/index",
            post(handle_index_document).delete(handle_delete_index),
        )
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .layer(Extension(engine));

    // 4. Start HTTP server:
    tracing::info!("Search gateway listening on {}", bind_addr);
    tracing::info!("Press Ctrl+C to shutdown");

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Extracts a `--bind <addr:port>` override from the argument list.
fn parse_bind_override(args: &[String]) -> Result<Option<SocketAddr>, String> {
    let mut bind = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| "--bind requires a value".to_string())?;
                bind = Some(
                    value
                        .parse()
                        .map_err(|e| format!("invalid --bind value '{}': {}", value, e))?,
                );
                i += 2;
            }
            _ => {
                i += 1;
            }
        }
    }

    Ok(bind)
}
