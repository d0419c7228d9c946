use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use crate::config::{ServeArgs, ServerConfig, Settings};
use crate::error::ServerError;
use topic_engine::TopicCatalog;
use topic_source_file::JsonFileSource;

const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

pub async fn run(args: ServeArgs) -> Result<(), ServerError> {
    tracing::info!("topic-server starting");

    // --- Load config ---
    let file_config = match &args.config {
        Some(path) => {
            let cfg = ServerConfig::load(path)?;
            tracing::info!(config = %path.display(), "loaded config");
            Some(cfg)
        }
        None => None,
    };
    let settings = Settings::resolve(&args, file_config);

    // --- Topic source ---
    // Файл читается на каждый запрос: отсутствие файла не мешает старту.
    let source = JsonFileSource::from_config(&settings.source);
    if !source.path().exists() {
        tracing::warn!(
            path = %source.path().display(),
            "topics file not found, /api/topics will fail until it exists"
        );
    } else {
        tracing::info!(path = %source.path().display(), "serving topics from file");
    }
    let catalog = Arc::new(TopicCatalog::new(Arc::new(source)));

    // --- CancellationToken for graceful shutdown ---
    let token = CancellationToken::new();

    // --- API server ---
    let addr = settings.addr;
    let api_token = token.clone();
    let mut api_handle =
        tokio::spawn(async move { topic_api_server::run(addr, catalog, api_token).await });

    tracing::info!(url = %format!("http://localhost:{}", addr.port()), "server is running");
    tracing::info!(
        endpoint = %format!("http://localhost:{}/api/topics", addr.port()),
        "api endpoint"
    );

    // --- Wait for Ctrl+C, or the server dying on its own (e.g. bind error) ---
    tokio::select! {
        res = &mut api_handle => {
            return match res {
                Ok(Ok(())) => Ok(()),
                Ok(Err(e)) => Err(ServerError::Api(e)),
                Err(e) => Err(ServerError::Api(format!("api task: {e}"))),
            };
        }
        res = tokio::signal::ctrl_c() => res?,
    }
    tracing::info!("shutting down...");

    token.cancel();

    // Drain in-flight requests, then give up
    match tokio::time::timeout(DRAIN_TIMEOUT, &mut api_handle).await {
        Ok(Ok(Ok(()))) => {}
        Ok(Ok(Err(e))) => tracing::error!(error = %e, "api server error"),
        Ok(Err(e)) => tracing::error!(error = %e, "api task failed"),
        Err(_) => {
            tracing::warn!(timeout = ?DRAIN_TIMEOUT, "drain timed out, aborting");
            api_handle.abort();
        }
    }

    tracing::info!("shutdown complete");
    Ok(())
}
