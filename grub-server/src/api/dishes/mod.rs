//! Dish API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /dishes | GET | 菜品列表 |
//! | /dishes | POST | 创建菜品 |
//! | /dishes/{dish_id} | GET | 菜品详情 |
//! | /dishes/{dish_id} | PUT | 整体替换菜品 |
//!
//! 菜品不支持删除。

mod handler;
pub mod validation;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/dishes", get(handler::list).post(handler::create))
        .route("/dishes/{dish_id}", get(handler::read).put(handler::update))
}
