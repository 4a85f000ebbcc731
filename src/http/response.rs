//! Response payloads.
//!
//! Every payload carries the request ID and an `ok` flag. Errors map from
//! [`ProxyError`] to a status code and a JSON body here, keeping the proxy
//! core free of HTTP types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::{json, Value};

use crate::http::request::RequestId;
use crate::proxy::{OrdersReply, ProxyError};

/// Successful order query payload.
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub rid: RequestId,
    pub ok: bool,
    pub cached: bool,
    pub data: Value,
}

impl OrdersResponse {
    pub fn new(rid: RequestId, reply: OrdersReply) -> Self {
        Self {
            rid,
            ok: true,
            cached: reply.cached,
            data: reply.data,
        }
    }
}

impl IntoResponse for OrdersResponse {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}

/// A [`ProxyError`] bound to the request it ended.
#[derive(Debug)]
pub struct ApiError {
    pub rid: RequestId,
    pub error: ProxyError,
}

impl ApiError {
    pub fn new(rid: RequestId, error: ProxyError) -> Self {
        Self { rid, error }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn body(&self) -> Value {
        let mut body = json!({
            "rid": self.rid,
            "ok": false,
            "error": self.error.to_string(),
        });

        let extra = match &self.error {
            ProxyError::Transport(e) => json!({ "message": e.to_string(), "code": e.code() }),
            ProxyError::UpstreamProtocol { status, raw } => json!({ "status": status, "raw": raw }),
            ProxyError::UpstreamApplication { status, body } => {
                json!({ "status": status, "data": body })
            }
            ProxyError::Validation
            | ProxyError::PayloadTooLarge
            | ProxyError::MissingCredential
            | ProxyError::Internal(_) => {
                Value::Null
            }
        };

        if let (Some(target), Value::Object(fields)) = (body.as_object_mut(), extra) {
            target.extend(fields);
        }
        body
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(self.body())).into_response()
    }
}
