//! Transport seam for the upstream call.
//!
//! [`UpstreamTransport`] performs exactly one HTTP exchange. Deadlines and
//! retries are layered on top by [`crate::upstream::UpstreamClient`].

use async_trait::async_trait;
use reqwest::{header, Client};
use std::time::Duration;

use crate::upstream::error::TransportError;
use crate::upstream::types::{OutboundRequest, RawResponse};

#[async_trait]
pub trait UpstreamTransport: Send + Sync {
    /// Send one request and read the whole response body.
    async fn send(&self, request: &OutboundRequest) -> Result<RawResponse, TransportError>;
}

/// reqwest-backed transport.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a transport with the given connect timeout. The per-attempt
    /// deadline is enforced by the caller.
    pub fn new(connect_timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .user_agent(concat!("tmsorders-proxy/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl UpstreamTransport for ReqwestTransport {
    async fn send(&self, request: &OutboundRequest) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .post(request.url.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::AUTHORIZATION, request.authorization.as_str())
            .json(&request.body)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(TransportError::body)?;
        Ok(RawResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resilience::Retryable;
    use serde_json::json;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serve one connection with a fixed raw HTTP response, then close it.
    async fn serve_once(raw: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            socket.write_all(raw.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{}/api/tmsorders/getall", addr)
    }

    fn request(url: &str) -> OutboundRequest {
        OutboundRequest {
            url: url.parse().unwrap(),
            authorization: "token".into(),
            body: json!({"startDate": "2026-01-01", "endDate": "2026-01-02", "userId": 1}),
        }
    }

    #[tokio::test]
    async fn test_reads_full_response() {
        let url = serve_once(
            "HTTP/1.1 201 Created\r\nContent-Length: 7\r\nConnection: close\r\n\r\n{\"x\":1}",
        )
        .await;
        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();

        let response = transport.send(&request(&url)).await.unwrap();
        assert_eq!(response.status, 201);
        assert_eq!(response.body, r#"{"x":1}"#);
    }

    #[tokio::test]
    async fn test_truncated_body_is_not_retryable() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Length: 100\r\nConnection: close\r\n\r\nshort",
        )
        .await;
        let transport = ReqwestTransport::new(Duration::from_secs(5)).unwrap();

        let err = transport.send(&request(&url)).await.unwrap_err();
        assert!(matches!(err, TransportError::Body(_)), "got {:?}", err);
        assert_eq!(err.code(), "UPSTREAM_BODY");
        assert!(!err.is_retryable());
    }
}
