use axum::{
    extract::{Query, State},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;
use wikisearch_core::tokenizer::is_single_term;
use wikisearch_core::SearchEngine;

/// Number of hits returned in `data`; `results` still reports the full count.
pub const MAX_RESULTS: usize = 5;

#[derive(Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
}

#[derive(Serialize)]
pub struct SearchResponse {
    pub msg: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<SearchHit>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<usize>,
}

#[derive(Serialize)]
pub struct SearchHit {
    pub name: String,
    pub link: String,
    pub score: String,
    pub content: String,
    pub location: u32,
    pub rank: u32,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub msg: &'static str,
    pub status: u16,
}

pub type AppState = Arc<SearchEngine>;

/// Router over an already indexed engine. `origin` is a comma-separated list of
/// allowed CORS origins; any origin is allowed when it is `None` or unparsable.
pub fn build_app(engine: AppState, origin: Option<&str>) -> Router {
    let origins: Vec<HeaderValue> = origin
        .map(|val| val.split(',').filter_map(|s| s.trim().parse().ok()).collect())
        .unwrap_or_default();
    let cors = if origins.is_empty() {
        CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any)
    } else {
        CorsLayer::new().allow_origin(AllowOrigin::list(origins)).allow_methods(Any).allow_headers(Any)
    };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/search", get(search_handler))
        .fallback(not_found)
        .with_state(engine)
        .layer(SetResponseHeaderLayer::overriding(header::CACHE_CONTROL, HeaderValue::from_static("no-cache")))
        .layer(SetResponseHeaderLayer::if_not_present(header::X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff")))
        .layer(SetResponseHeaderLayer::if_not_present(header::X_FRAME_OPTIONS, HeaderValue::from_static("SAMEORIGIN")))
        .layer(SetResponseHeaderLayer::if_not_present(header::REFERRER_POLICY, HeaderValue::from_static("no-referrer")))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

pub async fn search_handler(State(engine): State<AppState>, Query(params): Query<SearchParams>) -> Response {
    let Some(query) = params.query else {
        return error_response(StatusCode::BAD_REQUEST, "Bad Request");
    };
    if !is_single_term(&query) {
        return Json(SearchResponse { msg: "Too many words (max 1)", data: None, results: None }).into_response();
    }

    let results = engine.search(&query);
    let data = results
        .iter()
        .take(MAX_RESULTS)
        .map(|r| {
            let score = two_decimals(r.score);
            SearchHit {
                name: r.document.name.clone(),
                link: r.document.url.clone(),
                content: score.clone(),
                score,
                location: 0,
                rank: 0,
            }
        })
        .collect();
    Json(SearchResponse { msg: "Search result", data: Some(data), results: Some(results.len()) }).into_response()
}

/// Two-decimal rendering with halves rounded away from zero (0.125 -> "0.13").
pub fn two_decimals(score: f64) -> String {
    format!("{:.2}", (score * 100.0).round() / 100.0)
}

async fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Not Found")
}

fn error_response(status: StatusCode, msg: &'static str) -> Response {
    (status, Json(ErrorBody { msg, status: status.as_u16() })).into_response()
}
