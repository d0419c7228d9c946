use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;
use serde_json::{json, Value};

use topic_api::Topic;

use crate::error::{ApiError, ApiResult};
use crate::params::{parse_topic_query, ParamError};
use crate::AppState;

// ═══════════════════════════════════════════════════════════════
//  GET /
// ═══════════════════════════════════════════════════════════════

pub(crate) fn welcome() -> Value {
    json!({
        "message": "Welcome to Topic Retrieval API",
        "endpoints": {
            "topics": "/api/topics",
            "search": "/api/topics?search=<query>",
            "sort": "/api/topics?sort=name",
            "combined": "/api/topics?search=<query>&sort=name",
        },
    })
}

pub(crate) async fn handle_root() -> Json<Value> {
    Json(welcome())
}

// ═══════════════════════════════════════════════════════════════
//  GET /api/topics?search=<s>&sort=name
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_list_topics(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> ApiResult<Json<Vec<Topic>>> {
    let Query(pairs) = query.map_err(|e| ParamError::Malformed(e.body_text()))?;
    let query = parse_topic_query(&pairs)?;
    let topics = state.catalog.query(&query).await?;
    Ok(Json(topics))
}

// ═══════════════════════════════════════════════════════════════
//  Fallback
// ═══════════════════════════════════════════════════════════════

pub(crate) async fn handle_not_found() -> ApiError {
    ApiError::not_found()
}
