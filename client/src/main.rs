use docsearch::orchestrator::orchestrator::SearchOrchestrator;
use docsearch::orchestrator::types::{FetchError, SearchQuery};
use docsearch::search::types::Hit;
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;

/// How long to wait for one search operation to settle before giving up on
/// printing its outcome (debounce + request, with headroom).
const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::WARN)
        .init();

    let backend_url = std::env::var("BACKEND_URL")
        .unwrap_or_else(|_| "http://localhost:3000".to_string())
        .trim_end_matches('/')
        .to_string();
    tracing::debug!("Gateway base URL: {}", backend_url);

    let args: Vec<String> = std::env::args().collect();
    match args.get(1).map(String::as_str) {
        Some("search") | None => run_search_loop(backend_url).await,
        Some("upload") => {
            let path = args.get(2).map(String::as_str).unwrap_or_else(|| {
                eprintln!("Usage: {} upload <file>", args[0]);
                std::process::exit(1)
            });
            upload_file(&backend_url, path).await
        }
        Some(other) => {
            eprintln!("Unknown mode '{}'. Modes: search (default), upload <file>", other);
            std::process::exit(1);
        }
    }
}

/// Interactive loop: every stdin line is fed to the orchestrator as the
/// current query text, and the settled state is printed.
async fn run_search_loop(backend_url: String) -> anyhow::Result<()> {
    let client = reqwest::Client::new();
    let fetch_url = backend_url.clone();

    let orchestrator = SearchOrchestrator::new(move |query: SearchQuery| {
        let client = client.clone();
        let url = format!(
            "{}/search?q={}&from={}&size={}",
            fetch_url,
            urlencoding::encode(&query.text),
            query.from,
            query.size
        );
        async move {
            let response = client
                .get(url)
                .send()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))?;

            if !response.status().is_success() {
                return Err(FetchError::Transport(response.status().to_string()));
            }

            response
                .json::<Vec<Hit>>()
                .await
                .map_err(|e| FetchError::Transport(e.to_string()))
        }
    });

    println!("Connected to {}. Type a query, empty line clears.", backend_url);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        orchestrator.on_input(&line);

        if line.is_empty() {
            println!("(cleared)");
            continue;
        }

        if !orchestrator.wait_settled(SETTLE_TIMEOUT).await {
            println!("timed out waiting for results");
            continue;
        }
        let state = orchestrator.state();
        if let Some(error) = &state.error {
            println!("error: {}", error);
        } else if state.results.is_empty() {
            println!("no results");
        } else {
            for hit in &state.results {
                let title = hit
                    .source
                    .get("title")
                    .and_then(|v| v.as_str())
                    .unwrap_or("<untitled>");
                println!("  {}  {}", hit.id, title);
            }
        }
    }

    Ok(())
}

/// Reads a file, base64-encodes it, and posts it for indexing. The gateway
/// routes the payload through the engine's attachment pipeline, so a PDF is
/// searchable by content immediately after this returns.
async fn upload_file(backend_url: &str, path: &str) -> anyhow::Result<()> {
    let bytes = tokio::fs::read(path).await?;
    let file_name = std::path::Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string());

    let payload = serde_json::json!({
        "title": file_name,
        "data": BASE64.encode(&bytes),
    });

    let response = reqwest::Client::new()
        .post(format!("{}/search/index", backend_url))
        .json(&payload)
        .send()
        .await?;

    if !response.status().is_success() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        anyhow::bail!("Upload failed ({}): {}", status, body);
    }

    let body = response.json::<serde_json::Value>().await?;
    match body.get("indexed").and_then(|v| v.as_str()) {
        Some(id) => println!("Indexed with ID {}", id),
        None => println!("Indexed: {}", body),
    }

    Ok(())
}
