//! Shared helpers for the HTTP integration tests
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{HeaderMap, Method, Request, StatusCode, header};
use grub_server::{Config, ServerState, build_app};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

pub const DELIVERED_ORDER: &str = "5a887d326e83d3c5bdcbee398ea32aff";
pub const PENDING_ORDER: &str = "9e4e6a0d0c3b44f3a3a1d6d8a7c5b210";
pub const OUT_FOR_DELIVERY_ORDER: &str = "f6069a542257054114138301947672ba";
pub const SPAGHETTI: &str = "d351db2b49b69679504652ea1cf38241";

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub raw: Vec<u8>,
    pub body: Value,
}

impl TestResponse {
    pub fn error(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}

/// State loaded from the embedded fixtures
pub fn seeded_state() -> ServerState {
    ServerState::initialize(&Config::with_overrides(0, true)).unwrap()
}

pub fn empty_state() -> ServerState {
    ServerState::new()
}

pub async fn send(state: &ServerState, method: Method, uri: &str, body: Option<Value>) -> TestResponse {
    match body {
        Some(body) => send_raw(state, method, uri, Some("application/json"), body.to_string()).await,
        None => send_raw(state, method, uri, None, String::new()).await,
    }
}

/// Send `{"data": data}`
pub async fn send_data(state: &ServerState, method: Method, uri: &str, data: Value) -> TestResponse {
    send(state, method, uri, Some(json!({ "data": data }))).await
}

pub async fn send_raw(
    state: &ServerState,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: String,
) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder.body(Body::from(body)).unwrap();

    let response = build_app(state.clone()).oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let raw = response.into_body().collect().await.unwrap().to_bytes().to_vec();
    let body = serde_json::from_slice(&raw).unwrap_or(Value::Null);

    TestResponse {
        status,
        headers,
        raw,
        body,
    }
}

pub fn valid_dish() -> Value {
    json!({
        "name": "Century eggs",
        "description": "Whole eggs preserved in clay and ash for a few months",
        "price": 17,
        "image_url": "https://images.pexels.com/photos/175753/pexels-photo-175753.jpeg"
    })
}

pub fn valid_order() -> Value {
    json!({
        "deliverTo": "Rua Vieira de Carvalho, 2 - República, São Paulo - SP, 01210-010, Brazil",
        "mobileNumber": "(11) 3331-3633",
        "dishes": [
            {
                "id": SPAGHETTI,
                "name": "Dolcelatte and chickpea spaghetti",
                "description": "Spaghetti topped with a blend of dolcelatte and fresh chickpeas",
                "image_url": "https://images.pexels.com/photos/1279330/pexels-photo-1279330.jpeg",
                "price": 19,
                "quantity": 2
            }
        ]
    })
}
