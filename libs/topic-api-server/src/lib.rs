//! HTTP surface of the topic service.
//!
//! `GET /` returns a welcome payload, `GET /api/topics` lists topics with
//! optional `search` and `sort=name`, anything else is a JSON 404.
//! Paths match case-insensitively and may end with one `/`.

mod error;
mod http;
pub mod params;

use std::any::Any;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::Request;
use axum::http::Uri;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tokio_util::sync::CancellationToken;
use tower::util::MapRequestLayer;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use topic_engine::TopicCatalog;

pub use error::{ApiError, ApiResult};
pub use params::{parse_topic_query, ParamError};

#[derive(Clone)]
struct AppState {
    catalog: Arc<TopicCatalog>,
}

/// Build the router with request tracing and panic-to-500 layers applied.
pub fn router(catalog: Arc<TopicCatalog>) -> Router {
    let state = AppState { catalog };

    let routes = Router::new()
        .route("/", get(http::handle_root))
        .route("/api/topics", get(http::handle_list_topics))
        .fallback(http::handle_not_found)
        .method_not_allowed_fallback(http::handle_not_found)
        .with_state(state);

    // Rewriting has to happen before routing, so it wraps the routes
    // instead of being a `Router::layer`.
    let app = Router::new().fallback_service(MapRequestLayer::new(normalize_path).layer(routes));

    apply_layers(app)
}

fn normalize_path(mut request: Request) -> Request {
    if let Some(uri) = normalized_uri(request.uri()) {
        *request.uri_mut() = uri;
    }
    request
}

/// Lower-cased path without its trailing `/`, query untouched.
/// `None` when the path is already in that form.
fn normalized_uri(uri: &Uri) -> Option<Uri> {
    let path = uri.path();
    let trimmed = match path.strip_suffix('/') {
        Some(rest) if !rest.is_empty() => rest,
        _ => path,
    };
    if trimmed.len() == path.len() && !path.bytes().any(|b| b.is_ascii_uppercase()) {
        return None;
    }

    let mut path_and_query = trimmed.to_ascii_lowercase();
    if let Some(query) = uri.query() {
        path_and_query.push('?');
        path_and_query.push_str(query);
    }
    let mut parts = uri.clone().into_parts();
    parts.path_and_query = Some(path_and_query.parse().ok()?);
    Uri::from_parts(parts).ok()
}

fn apply_layers(router: Router) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|request: &axum::http::Request<_>| {
            tracing::info_span!(
                "http.request",
                method = %request.method(),
                uri = %request.uri(),
            )
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    router
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(trace)
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    tracing::error!(panic = %detail, "handler panicked");
    ApiError::internal().into_response()
}

/// Serve the topic API on `addr` until `shutdown` is cancelled.
/// In-flight requests are allowed to finish.
pub async fn run(
    addr: SocketAddr,
    catalog: Arc<TopicCatalog>,
    shutdown: CancellationToken,
) -> Result<(), String> {
    let app = router(catalog);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| format!("bind api {addr}: {e}"))?;
    tracing::info!(%addr, "api server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown.cancelled_owned())
        .await
        .map_err(|e| format!("axum serve: {e}"))?;

    Ok(())
}
