//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`dishes`] - 菜品接口
//! - [`orders`] - 订单接口
//! - [`extract`] - `{data}` 请求体提取器
//! - [`fallback`] - 404 / 405 / panic 兜底

pub mod dishes;
pub mod extract;
pub mod fallback;
pub mod health;
pub mod orders;

use axum::Router;
use axum::middleware as axum_middleware;
use http::{HeaderName, HeaderValue};
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::CorsLayer;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::core::ServerState;
use crate::middleware;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Custom request ID generator
#[derive(Clone)]
struct XRequestId;

impl MakeRequestId for XRequestId {
    fn make_request_id<B>(&mut self, _request: &http::Request<B>) -> Option<RequestId> {
        let id = Uuid::new_v4().to_string();
        HeaderValue::from_str(&id).ok().map(RequestId::new)
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(dishes::router())
        .merge(orders::router())
        // Known path, unsupported method - must come after every route
        .method_not_allowed_fallback(fallback::method_not_allowed)
        .fallback(fallback::route_not_found)
}

/// Build a fully configured application with all middleware and state
///
/// This is used by both the HTTP server and the integration tests.
pub fn build_app(state: ServerState) -> Router {
    build_router()
        // Panic → 500 {"error": "Something went wrong!"}
        .layer(CatchPanicLayer::custom(fallback::handle_panic))
        // CORS - Handle cross-origin requests
        .layer(CorsLayer::permissive())
        // Request logging
        .layer(axum_middleware::from_fn(middleware::logging_middleware))
        // Trace - Request tracing (logs at INFO level)
        .layer(TraceLayer::new_for_http())
        // Propagate request ID to response
        .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
            REQUEST_ID_HEADER,
        )))
        // Request ID - outermost, so every layer above sees it
        .layer(SetRequestIdLayer::new(
            HeaderName::from_static(REQUEST_ID_HEADER),
            XRequestId,
        ))
        .with_state(state)
}
