//! 兜底处理: 未匹配路由、不支持的方法、panic

use std::any::Any;

use axum::http::{Method, Uri};
use axum::response::{IntoResponse, Response};
use shared::AppError;

fn display_path(uri: &Uri) -> &str {
    uri.path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or_else(|| uri.path())
}

/// 404 - 没有路由匹配该路径
pub async fn route_not_found(uri: Uri) -> AppError {
    AppError::route_not_found(display_path(&uri))
}

/// 405 - 路径存在但不支持该方法
pub async fn method_not_allowed(method: Method, uri: Uri) -> AppError {
    AppError::method_not_allowed(method.as_str(), display_path(&uri))
}

/// 500 - handler panic 时的响应
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic payload".to_string()
    };
    AppError::internal(detail).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;

    #[test]
    fn test_handle_panic_is_internal_error() {
        let response = handle_panic(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = handle_panic(Box::new(42_u8));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_route_not_found_message() {
        let uri: Uri = "/nowhere?x=1".parse().unwrap();
        let err = route_not_found(uri).await;
        assert_eq!(err.message, "Path not found: /nowhere?x=1");
    }

    #[tokio::test]
    async fn test_method_not_allowed_message() {
        let uri: Uri = "/dishes/abc".parse().unwrap();
        let err = method_not_allowed(Method::DELETE, uri).await;
        assert_eq!(err.http_status(), StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(err.message, "DELETE not allowed for /dishes/abc");
    }
}
