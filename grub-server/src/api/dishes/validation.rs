//! 菜品校验
//!
//! 字段按固定顺序检查，第一个失败即返回。

use serde_json::Value;
use shared::models::{Dish, DishFields, DishPayload};

use crate::db::repository::DishRepository;
use crate::utils::validation::{mismatched_id, positive_integer, required_text};
use crate::utils::{AppError, AppResult, ErrorCode};

pub(crate) fn dish_not_found(dish_id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::DishNotFound,
        format!("Dish does not exist: {dish_id}."),
    )
}

/// 按路由 id 查找菜品
pub fn dish_exists(repo: &DishRepository, dish_id: &str) -> AppResult<Dish> {
    repo.find_by_id(dish_id)
        .ok_or_else(|| dish_not_found(dish_id))
}

/// 校验创建/更新请求体
pub fn validate_dish(payload: &DishPayload) -> AppResult<DishFields> {
    let name = required_text(payload.name.as_ref())
        .ok_or_else(|| AppError::validation("Dish must include a name"))?;
    let description = required_text(payload.description.as_ref())
        .ok_or_else(|| AppError::validation("Dish must include a description"))?;

    // 价格只检查键是否存在，null 视为存在但非法
    let price = payload
        .price
        .as_ref()
        .ok_or_else(|| AppError::validation("Dish must include a price"))?;
    let price = positive_integer(price).ok_or_else(|| {
        AppError::validation("Dish must have a price that is an integer greater than 0")
    })?;

    let image_url = required_text(payload.image_url.as_ref())
        .ok_or_else(|| AppError::validation("Dish must include a image_url"))?;

    Ok(DishFields {
        name,
        description,
        price,
        image_url,
    })
}

/// 请求体携带的 id 必须与路由 id 一致 (缺省或空值放行)
pub fn ensure_route_id(id: Option<&Value>, route_id: &str) -> AppResult<()> {
    match mismatched_id(id, route_id) {
        Some(id) => Err(AppError::with_message(
            ErrorCode::DishIdMismatch,
            format!("Dish id does not match route id. Dish: {id}, Route: {route_id}"),
        )),
        None => Ok(()),
    }
}
