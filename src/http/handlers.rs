//! Route handlers.

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Extension, Json,
};
use serde_json::{json, Value};
use tracing::Instrument;

use crate::http::request::RequestId;
use crate::http::response::{ApiError, OrdersResponse};
use crate::http::server::AppState;
use crate::proxy::{parse_body, ProxyError};

/// Routes served by the proxy, as reported by `/routes`.
pub const ROUTES: &[&str] = &[
    "GET /",
    "GET /health",
    "GET /routes",
    "POST /tmsorders",
    "POST /tmsorders/week",
];

pub async fn root() -> &'static str {
    "TMS orders proxy is running"
}

pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({ "ok": true, "service": &*state.service_name }))
}

pub async fn routes(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "routes": ROUTES,
        "allowedOrigins": state.cors.allowed_origins(),
    }))
}

/// `POST /tmsorders` and `POST /tmsorders/week`.
///
/// The query runs on its own task: it keeps going if the client disconnects,
/// and a panic inside it becomes a 500 for this request only.
pub async fn tmsorders(
    State(state): State<AppState>,
    Extension(rid): Extension<RequestId>,
    body: Result<Bytes, BytesRejection>,
) -> Response {
    let body = match body {
        Ok(bytes) => parse_body(&bytes),
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!(error = %rejection, "Request body over limit");
            return ApiError::new(rid, ProxyError::PayloadTooLarge).into_response();
        }
        Err(rejection) => {
            // An unreadable body is handled like a non-JSON one.
            tracing::debug!(error = %rejection, "Request body could not be read");
            parse_body(&[])
        }
    };
    let proxy = state.proxy.clone();
    let task = tokio::spawn(async move { proxy.handle(&body).await }.in_current_span());

    let result = match task.await {
        Ok(result) => result,
        Err(e) => {
            tracing::error!(error = %e, "Order query task failed");
            Err(ProxyError::Internal(e.to_string()))
        }
    };

    match result {
        Ok(reply) => {
            tracing::info!(cached = reply.cached, "Order query served");
            OrdersResponse::new(rid, reply).into_response()
        }
        Err(error) => {
            tracing::warn!(status = error.status_code(), error = %error, "Order query failed");
            ApiError::new(rid, error).into_response()
        }
    }
}
