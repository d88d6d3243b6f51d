//! Order API Handlers

use axum::extract::{Path, State};
use axum::http::StatusCode;
use shared::models::{Order, OrderPayload};

use super::validation::{
    create_status, ensure_deletable, ensure_not_delivered, ensure_route_id, order_exists,
    order_not_found, update_status, validate_order,
};
use crate::api::extract::DataBody;
use crate::core::ServerState;
use crate::utils::{ApiResponse, AppError, AppResult};

/// GET /orders - 获取所有订单
pub async fn list(State(state): State<ServerState>) -> ApiResponse<Vec<Order>> {
    ApiResponse::new(state.orders.find_all())
}

/// GET /orders/{order_id} - 获取单个订单
pub async fn read(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<ApiResponse<Order>> {
    let order = order_exists(&state.orders, &order_id)?;
    Ok(ApiResponse::new(order))
}

/// POST /orders - 创建订单 (状态缺省为 pending)
pub async fn create(
    State(state): State<ServerState>,
    DataBody(payload): DataBody<OrderPayload>,
) -> AppResult<(StatusCode, ApiResponse<Order>)> {
    let mut fields = validate_order(&payload)?;
    fields.status = create_status(payload.status.as_ref())?;
    let order = state.orders.create(fields);

    tracing::info!(
        order_id = %order.id,
        status = %order.status,
        items = order.dishes.len(),
        "Order created"
    );
    Ok((StatusCode::CREATED, ApiResponse::new(order)))
}

/// PUT /orders/{order_id} - 整体替换订单
///
/// 整个检查链在同一把写锁内完成。
pub async fn update(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
    body: Result<DataBody<OrderPayload>, AppError>,
) -> AppResult<ApiResponse<Order>> {
    let order = state
        .orders
        .update_with(&order_id, |order| -> AppResult<Order> {
            let DataBody(payload) = body?;
            let fields = validate_order(&payload)?;
            ensure_route_id(payload.id.as_ref(), &order_id)?;
            let status = update_status(payload.status.as_ref())?;
            ensure_not_delivered(order)?;

            order.apply(fields, status);
            Ok(order.clone())
        })
        .unwrap_or_else(|| Err(order_not_found(&order_id)))?;

    tracing::info!(order_id = %order.id, status = %order.status, "Order updated");
    Ok(ApiResponse::new(order))
}

/// DELETE /orders/{order_id} - 删除订单 (仅限 pending)
pub async fn delete(
    State(state): State<ServerState>,
    Path(order_id): Path<String>,
) -> AppResult<StatusCode> {
    let order = state
        .orders
        .delete_if(&order_id, ensure_deletable)
        .unwrap_or_else(|| Err(order_not_found(&order_id)))?;

    tracing::info!(order_id = %order.id, "Order deleted");
    Ok(StatusCode::NO_CONTENT)
}
