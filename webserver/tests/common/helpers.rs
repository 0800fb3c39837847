//! Test helper utilities for driving the router without a socket

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use shared::AdjustmentRates;
use tower::ServiceExt;

use webserver::{AppraisalStore, RealAppraisalStore, WebServer, WebServerState};

/// Create a test webserver state
pub fn create_test_state(rates: AdjustmentRates) -> Arc<WebServerState> {
    let bind_addr: SocketAddr = "127.0.0.1:3000".parse().unwrap();
    Arc::new(WebServerState::new(bind_addr, rates))
}

/// Router backed by a real in-memory store and default rates
pub fn create_test_router() -> Router {
    let state = create_test_state(AdjustmentRates::default());
    let store = RealAppraisalStore::new(state.clone());
    WebServer::new(state, store).build_router()
}

/// Router over an arbitrary store
pub fn router_with_store<S>(store: S) -> Router
where
    S: AppraisalStore + Clone + 'static,
{
    WebServer::new(create_test_state(AdjustmentRates::default()), store).build_router()
}

/// Send one request and decode the JSON response body (Null when empty)
pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    match body {
        Some(json) => send_raw(router, method, uri, Some("application/json"), json.to_string()).await,
        None => send_raw(router, method, uri, None, String::new()).await,
    }
}

/// Send a raw body. A response that is not JSON comes back as `Value::String`
pub async fn send_raw(
    router: &Router,
    method: &str,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header("content-type", content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
    };
    (status, value)
}
