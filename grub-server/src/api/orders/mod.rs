//! Order API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /orders | GET | 订单列表 |
//! | /orders | POST | 创建订单 |
//! | /orders/{order_id} | GET | 订单详情 |
//! | /orders/{order_id} | PUT | 整体替换订单 |
//! | /orders/{order_id} | DELETE | 删除 pending 订单 |

mod handler;
pub mod validation;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/orders", get(handler::list).post(handler::create))
        .route(
            "/orders/{order_id}",
            get(handler::read)
                .put(handler::update)
                .delete(handler::delete),
        )
}
